//! # OSS Client SDK
//!
//! A client SDK for the file server, speaking gRPC.
//!
//! ## Features
//!
//! - **Single-shot transfers**: whole file in one request or one reply
//! - **Chunked transfers**: client-streaming upload and server-streaming
//!   download in fixed-size chunks
//! - **Uniform upload outcomes**: every upload yields an [`UploadResponse`],
//!   never a bare transport error
//! - **Retry**: server-streaming downloads retry with linear backoff and jitter
//!
//! ## Example
//!
//! ```rust,ignore
//! use oss_client::{ClientConfig, GrpcOssClient, OssClient};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GrpcOssClient::connect(ClientConfig::new("localhost:50051"), "my-access-key").await?;
//!
//!     // Upload a file in 1 MiB chunks
//!     let resp = client
//!         .upload_for_chunk_from_file(1 << 20, "report.pdf", "docs", "application/pdf", Path::new("report.pdf"))
//!         .await;
//!     println!("{}: {}", resp.code, resp.message);
//!
//!     // Download it back to ./docs/report.pdf
//!     let path = client.download_for_chunk(1 << 20, "report.pdf", "docs").await?;
//!     println!("saved to {}", path.display());
//!
//!     client.close().await?;
//!     Ok(())
//! }
//! ```

mod auth;
mod chunk;
mod client;
mod config;
mod download;
mod error;
mod retry;
mod transport;
mod types;
mod upload;

pub use auth::{AllowList, Authenticator, NonEmptyKey};
pub use chunk::{chunk_count, ChunkReader};
pub use client::{ByteSource, GrpcOssClient, OssClient};
pub use config::{ClientConfig, RetryBackoff};
pub use download::destination;
pub use error::{ClientError, Result};
pub use retry::RetryPolicy;
pub use transport::{ChunkUploadStream, DownloadStream, FileTransport, GrpcTransport};
pub use types::*;

// Re-export wire types needed to implement a transport
pub use oss_proto::{Chunk, DownloadInfo, DownloadReply, UpLoadResponse, UploadInfo};

//! Client error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client errors
///
/// Returned by construction and download paths. Upload paths never surface
/// these; they normalize every failure into an [`UploadResponse`](crate::UploadResponse).
#[derive(Error, Debug)]
pub enum ClientError {
    /// Remote call failed
    #[error("gRPC error: {0}")]
    Grpc(#[from] tonic::Status),

    /// Connection could not be established
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Access key rejected at construction
    #[error("no permission")]
    PermissionDenied,

    /// Chunked transfer requested with a zero chunk size
    #[error("Invalid chunk size: {0}")]
    InvalidChunkSize(u64),

    /// File name would escape the bucket directory
    #[error("Invalid file name: {0:?}")]
    InvalidFileName(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing the downloaded file failed
    #[error("Failed to persist {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Check if this is a permission error
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied)
            || matches!(self, Self::Grpc(status) if status.code() == tonic::Code::PermissionDenied)
    }

    /// Check if the remote reported the file as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Grpc(status) if status.code() == tonic::Code::NotFound)
    }
}

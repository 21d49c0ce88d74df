//! # OSS Proto
//!
//! Wire types, the RPC client and the service skeleton for
//! `file_server.FileServerService`.
//!
//! The service exposes four call shapes:
//!
//! - `SingleUpload` (unary): the whole file in one `UploadInfo`
//! - `ChunkUpload` (client streaming): one `UploadInfo` per chunk, one reply
//! - `Download` (unary): the whole file in one `DownloadReply`
//! - `BigFileDownload` (server streaming): one `DownloadReply` per chunk
//!
//! The source definition lives in `proto/file_server.proto`.

mod file_server;

pub use file_server::*;
pub use file_server::file_server_service_client::FileServerServiceClient;
pub use file_server::file_server_service_server::{FileServerService, FileServerServiceServer};

impl DownloadReply {
    /// Bytes carried by this reply. A reply without a chunk carries nothing.
    pub fn content(&self) -> &[u8] {
        self.chunk.as_ref().map(|c| c.content.as_slice()).unwrap_or_default()
    }

    /// Consume the reply and take its bytes.
    pub fn into_content(self) -> Vec<u8> {
        self.chunk.map(|c| c.content).unwrap_or_default()
    }
}

impl UploadInfo {
    /// Bytes carried by this message.
    pub fn content(&self) -> &[u8] {
        self.chunk.as_ref().map(|c| c.content.as_slice()).unwrap_or_default()
    }
}

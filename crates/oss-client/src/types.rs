//! Common types for the client SDK

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between an error kind's message and the underlying error text
pub const MESSAGE_SEPARATOR: &str = ":";

/// Local failure kinds on the upload paths, each with a stable code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Source file could not be opened
    FileOpen,
    /// Source could not be read
    FileRead,
    /// Upload stream could not be opened
    GrpcClient,
    /// Unary upload call failed
    SingleUpload,
    /// Sending a chunk or finalizing the stream failed
    ChunkUpload,
    /// Chunked upload requested with a zero chunk size
    InvalidChunkSize,
}

impl ErrorKind {
    /// Stable numeric code
    pub fn code(&self) -> i64 {
        match self {
            Self::FileOpen => 10001,
            Self::FileRead => 10002,
            Self::GrpcClient => 10003,
            Self::SingleUpload => 10004,
            Self::ChunkUpload => 10005,
            Self::InvalidChunkSize => 10006,
        }
    }

    /// Human-readable description
    pub fn message(&self) -> &'static str {
        match self {
            Self::FileOpen => "file open error",
            Self::FileRead => "file read error",
            Self::GrpcClient => "grpc client error",
            Self::SingleUpload => "single upload error",
            Self::ChunkUpload => "chunk upload error",
            Self::InvalidChunkSize => "invalid chunk size",
        }
    }

    /// Look up a kind by its code
    pub fn from_code(code: i64) -> Option<Self> {
        [
            Self::FileOpen,
            Self::FileRead,
            Self::GrpcClient,
            Self::SingleUpload,
            Self::ChunkUpload,
            Self::InvalidChunkSize,
        ]
        .into_iter()
        .find(|kind| kind.code() == code)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of an upload
///
/// Every upload path yields exactly one of these: either the server's reply,
/// or one synthesized locally from an [`ErrorKind`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Status code
    pub code: i64,
    /// Status message
    pub message: String,
}

impl UploadResponse {
    /// Build a response for a local failure.
    ///
    /// With an underlying error the message reads `"<kind message>:<error>"`.
    pub fn from_error_kind(kind: ErrorKind, source: Option<&dyn fmt::Display>) -> Self {
        let message = match source {
            Some(err) => format!("{}{}{}", kind.message(), MESSAGE_SEPARATOR, err),
            None => kind.message().to_string(),
        };
        Self {
            code: kind.code(),
            message,
        }
    }

    /// Status code
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Status message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The local error kind, if this response was synthesized by the client
    pub fn error_kind(&self) -> Option<ErrorKind> {
        ErrorKind::from_code(self.code)
    }
}

impl From<oss_proto::UpLoadResponse> for UploadResponse {
    fn from(reply: oss_proto::UpLoadResponse) -> Self {
        Self {
            code: reply.code,
            message: reply.message,
        }
    }
}

//! Single-shot and chunked upload
//!
//! Both paths always produce an [`UploadResponse`]: the server's reply, or one
//! synthesized from an [`ErrorKind`] when something fails locally or on the wire.

use crate::{
    chunk::ChunkReader,
    transport::FileTransport,
    types::{ErrorKind, UploadResponse},
};
use oss_proto::{Chunk, UploadInfo};
use tokio::io::{AsyncRead, AsyncReadExt};
use tonic::Status;
use tracing::{debug, instrument, warn};

/// Identity of an upload, repeated on every message
#[derive(Clone, Copy, Debug)]
pub(crate) struct UploadTarget<'a> {
    pub access_key: &'a str,
    pub file_name: &'a str,
    pub bucket: &'a str,
    pub header: &'a str,
}

impl UploadTarget<'_> {
    fn message(&self, content: Vec<u8>) -> UploadInfo {
        UploadInfo {
            access_key: self.access_key.to_string(),
            header: self.header.to_string(),
            bucket: self.bucket.to_string(),
            file_name: self.file_name.to_string(),
            chunk: Some(Chunk { content }),
        }
    }
}

/// Read the whole source, then send it in one unary call.
#[instrument(skip(transport, target, reader), fields(bucket = target.bucket, file = target.file_name))]
pub(crate) async fn single_upload<R>(
    transport: &dyn FileTransport,
    target: UploadTarget<'_>,
    mut reader: R,
) -> UploadResponse
where
    R: AsyncRead + Unpin + Send,
{
    let mut body = Vec::new();
    if let Err(e) = reader.read_to_end(&mut body).await {
        warn!("Failed to read upload source: {}", e);
        return UploadResponse::from_error_kind(ErrorKind::FileRead, Some(&e));
    }

    let size = body.len();
    match transport.single_upload(target.message(body)).await {
        Ok(reply) => {
            debug!(bytes = size, code = reply.code, "Single upload finished");
            reply.into()
        }
        Err(status) => {
            warn!("Single upload failed: {}", describe(&status));
            UploadResponse::from_error_kind(ErrorKind::SingleUpload, Some(&describe(&status)))
        }
    }
}

/// Stream the source to the server in chunks of `chunk_size` bytes.
///
/// Chunks go out strictly in source order on one client-streaming call; the
/// server reassembles by arrival order. A read failure abandons the call
/// without half-closing it, so the server never commits a partial file.
#[instrument(skip(transport, target, reader), fields(bucket = target.bucket, file = target.file_name))]
pub(crate) async fn chunk_upload<R>(
    transport: &dyn FileTransport,
    target: UploadTarget<'_>,
    chunk_size: u64,
    reader: R,
) -> UploadResponse
where
    R: AsyncRead + Unpin + Send,
{
    let size = usize::try_from(chunk_size).unwrap_or(0);
    let mut chunks = match ChunkReader::new(reader, size) {
        Ok(chunks) => chunks,
        Err(_) => {
            let detail = format!("{} bytes", chunk_size);
            return UploadResponse::from_error_kind(ErrorKind::InvalidChunkSize, Some(&detail));
        }
    };

    let mut stream = match transport.open_chunk_upload().await {
        Ok(stream) => stream,
        Err(status) => {
            warn!("Failed to open upload stream: {}", describe(&status));
            return UploadResponse::from_error_kind(ErrorKind::GrpcClient, Some(&describe(&status)));
        }
    };

    let mut sent = 0u64;
    let mut bytes = 0u64;

    loop {
        let chunk = match chunks.next_chunk().await {
            Ok(Some(chunk)) => chunk,
            Ok(None) => break,
            Err(e) => {
                warn!(chunks_sent = sent, "Aborting chunk upload, read failed: {}", e);
                return UploadResponse::from_error_kind(ErrorKind::FileRead, Some(&e));
            }
        };

        let len = chunk.len() as u64;
        if let Err(status) = stream.send(target.message(Vec::from(chunk))).await {
            warn!(chunks_sent = sent, "Failed to send chunk: {}", describe(&status));
            return UploadResponse::from_error_kind(ErrorKind::ChunkUpload, Some(&describe(&status)));
        }
        sent += 1;
        bytes += len;
    }

    match stream.close_and_recv().await {
        Ok(reply) => {
            debug!(chunks = sent, bytes, code = reply.code, "Chunk upload finished");
            reply.into()
        }
        Err(status) => {
            warn!(chunks_sent = sent, "Chunk upload was not accepted: {}", describe(&status));
            UploadResponse::from_error_kind(ErrorKind::ChunkUpload, Some(&describe(&status)))
        }
    }
}

fn describe(status: &Status) -> String {
    format!("{} ({:?})", status.message(), status.code())
}

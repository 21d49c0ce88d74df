//! Single-shot and chunked download, persisted under `<root>/<bucket>/<file>`

use crate::{transport::FileTransport, ClientError, Result};
use futures::StreamExt;
use oss_proto::DownloadInfo;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, instrument};

/// Fetch a file in one unary call and write it to disk.
#[instrument(skip(transport, root))]
pub(crate) async fn single_download(
    transport: &dyn FileTransport,
    root: &Path,
    file_name: &str,
    bucket: &str,
) -> Result<PathBuf> {
    let path = destination(root, bucket, file_name)?;
    let request = DownloadInfo {
        bucket: bucket.to_string(),
        file_name: file_name.to_string(),
        size: 0,
    };

    let reply = transport.download(request).await?;
    let body = reply.into_content();
    debug!(bytes = body.len(), "Single download finished");

    persist(&path, &body).await?;
    Ok(path)
}

/// Pull a file over a server-streaming call and write it to disk.
///
/// Chunks are concatenated in receive order into memory; the file is only
/// created once the stream ends cleanly. A receive error discards what was
/// gathered so far.
#[instrument(skip(transport, root))]
pub(crate) async fn chunk_download(
    transport: &dyn FileTransport,
    root: &Path,
    chunk_size: u64,
    file_name: &str,
    bucket: &str,
) -> Result<PathBuf> {
    let size = match i64::try_from(chunk_size) {
        Ok(size) if size > 0 => size,
        _ => return Err(ClientError::InvalidChunkSize(chunk_size)),
    };
    let path = destination(root, bucket, file_name)?;
    let request = DownloadInfo {
        bucket: bucket.to_string(),
        file_name: file_name.to_string(),
        size,
    };

    let mut stream = transport.big_file_download(request).await?;
    let mut body = Vec::new();
    let mut received = 0u64;

    while let Some(reply) = stream.next().await {
        let reply = reply?;
        body.extend_from_slice(reply.content());
        received += 1;
    }
    debug!(chunks = received, bytes = body.len(), "Chunk download finished");

    persist(&path, &body).await?;
    Ok(path)
}

/// Local path for a downloaded file.
///
/// `bucket` and `file_name` must be relative paths made of plain components
/// so the result stays inside `root`.
pub fn destination(root: &Path, bucket: &str, file_name: &str) -> Result<PathBuf> {
    fn is_plain(name: &str) -> bool {
        !name.is_empty()
            && Path::new(name)
                .components()
                .all(|c| matches!(c, Component::Normal(_)))
    }

    if !is_plain(bucket) {
        return Err(ClientError::InvalidFileName(bucket.to_string()));
    }
    if !is_plain(file_name) {
        return Err(ClientError::InvalidFileName(file_name.to_string()));
    }
    Ok(root.join(bucket).join(file_name))
}

/// Create missing directories, then create or truncate `path` and write
/// `body` in one pass.
///
/// Not atomic: a failure mid-write leaves a partial file behind.
pub(crate) async fn persist(path: &Path, body: &[u8]) -> Result<()> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| ClientError::Persist {
                path: dir.to_path_buf(),
                source,
            })?;
    }

    tokio::fs::write(path, body)
        .await
        .map_err(|source| ClientError::Persist {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Wrote {} bytes to {}", body.len(), path.display());
    Ok(())
}

//! Main client implementation

use crate::{
    auth::{Authenticator, NonEmptyKey},
    download,
    transport::{FileTransport, GrpcTransport},
    types::{ErrorKind, UploadResponse},
    upload::{self, UploadTarget},
    ClientConfig, ClientError, Result,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::AsyncRead;
use tracing::{info, instrument, warn};

/// Any readable byte source an upload can draw from
pub type ByteSource<'a> = &'a mut (dyn AsyncRead + Unpin + Send);

/// Operations offered by a file server client
///
/// Uploads never fail with an error value; every outcome is an
/// [`UploadResponse`]. Downloads return the path of the written file.
#[async_trait]
pub trait OssClient: Send + Sync {
    /// Upload everything from `reader` in one call
    async fn upload(&self, file_name: &str, bucket: &str, header: &str, reader: ByteSource<'_>) -> UploadResponse;

    /// Upload a local file in one call
    async fn upload_from_file(&self, file_name: &str, bucket: &str, header: &str, file_path: &Path) -> UploadResponse;

    /// Stream `reader` to the server in chunks of `chunk_size` bytes
    async fn upload_for_chunk(
        &self,
        chunk_size: u64,
        file_name: &str,
        bucket: &str,
        header: &str,
        reader: ByteSource<'_>,
    ) -> UploadResponse;

    /// Stream a local file to the server in chunks of `chunk_size` bytes
    async fn upload_for_chunk_from_file(
        &self,
        chunk_size: u64,
        file_name: &str,
        bucket: &str,
        header: &str,
        file_path: &Path,
    ) -> UploadResponse;

    /// Fetch a file in one reply and write it to `<root>/<bucket>/<file_name>`
    async fn download(&self, file_name: &str, bucket: &str) -> Result<PathBuf>;

    /// Fetch a file as a stream of `chunk_size` chunks and write it to
    /// `<root>/<bucket>/<file_name>`
    async fn download_for_chunk(&self, chunk_size: u64, file_name: &str, bucket: &str) -> Result<PathBuf>;

    /// Release the connection
    async fn close(&self) -> Result<()>;
}

/// File server client over gRPC
///
/// Owns one connection for its lifetime. Calls run one at a time per use
/// site; share a client across tasks only if they do not overlap streaming
/// calls, or create one client per task.
pub struct GrpcOssClient {
    config: ClientConfig,
    access_key: String,
    transport: Arc<dyn FileTransport>,
}

impl GrpcOssClient {
    /// Check the access key with the default gate, then connect.
    pub async fn connect(config: ClientConfig, access_key: impl Into<String>) -> Result<Self> {
        Self::connect_with(config, access_key, &NonEmptyKey).await
    }

    /// Check the access key with `authenticator`, then connect.
    ///
    /// A rejected key fails with [`ClientError::PermissionDenied`] before any
    /// connection attempt.
    pub async fn connect_with(
        config: ClientConfig,
        access_key: impl Into<String>,
        authenticator: &dyn Authenticator,
    ) -> Result<Self> {
        let access_key = access_key.into();
        authorize(authenticator, &access_key).await?;
        config.validate()?;

        let transport = GrpcTransport::connect(&config).await?;
        Ok(Self {
            config,
            access_key,
            transport: Arc::new(transport),
        })
    }

    /// Check the access key, then use an existing transport.
    pub async fn with_transport(
        config: ClientConfig,
        access_key: impl Into<String>,
        authenticator: &dyn Authenticator,
        transport: Arc<dyn FileTransport>,
    ) -> Result<Self> {
        let access_key = access_key.into();
        authorize(authenticator, &access_key).await?;
        config.validate()?;

        Ok(Self {
            config,
            access_key,
            transport,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn target<'a>(&'a self, file_name: &'a str, bucket: &'a str, header: &'a str) -> UploadTarget<'a> {
        UploadTarget {
            access_key: &self.access_key,
            file_name,
            bucket,
            header,
        }
    }
}

async fn authorize(authenticator: &dyn Authenticator, access_key: &str) -> Result<()> {
    if authenticator.authenticate(access_key).await {
        Ok(())
    } else {
        warn!("Access key rejected");
        Err(ClientError::PermissionDenied)
    }
}

async fn open_source(file_path: &Path) -> std::result::Result<File, UploadResponse> {
    File::open(file_path).await.map_err(|e| {
        warn!("Failed to open {}: {}", file_path.display(), e);
        UploadResponse::from_error_kind(ErrorKind::FileOpen, Some(&e))
    })
}

#[async_trait]
impl OssClient for GrpcOssClient {
    #[instrument(skip(self, reader))]
    async fn upload(&self, file_name: &str, bucket: &str, header: &str, reader: ByteSource<'_>) -> UploadResponse {
        upload::single_upload(self.transport.as_ref(), self.target(file_name, bucket, header), reader).await
    }

    #[instrument(skip(self))]
    async fn upload_from_file(&self, file_name: &str, bucket: &str, header: &str, file_path: &Path) -> UploadResponse {
        let file = match open_source(file_path).await {
            Ok(file) => file,
            Err(response) => return response,
        };
        upload::single_upload(self.transport.as_ref(), self.target(file_name, bucket, header), file).await
    }

    #[instrument(skip(self, reader))]
    async fn upload_for_chunk(
        &self,
        chunk_size: u64,
        file_name: &str,
        bucket: &str,
        header: &str,
        reader: ByteSource<'_>,
    ) -> UploadResponse {
        upload::chunk_upload(
            self.transport.as_ref(),
            self.target(file_name, bucket, header),
            chunk_size,
            reader,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn upload_for_chunk_from_file(
        &self,
        chunk_size: u64,
        file_name: &str,
        bucket: &str,
        header: &str,
        file_path: &Path,
    ) -> UploadResponse {
        let file = match open_source(file_path).await {
            Ok(file) => file,
            Err(response) => return response,
        };
        upload::chunk_upload(
            self.transport.as_ref(),
            self.target(file_name, bucket, header),
            chunk_size,
            file,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn download(&self, file_name: &str, bucket: &str) -> Result<PathBuf> {
        let root = self.config.download_root()?;
        download::single_download(self.transport.as_ref(), &root, file_name, bucket).await
    }

    #[instrument(skip(self))]
    async fn download_for_chunk(&self, chunk_size: u64, file_name: &str, bucket: &str) -> Result<PathBuf> {
        let root = self.config.download_root()?;
        download::chunk_download(self.transport.as_ref(), &root, chunk_size, file_name, bucket).await
    }

    async fn close(&self) -> Result<()> {
        self.transport.close().await?;
        info!("Client closed");
        Ok(())
    }
}

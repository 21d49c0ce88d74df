//! RPC transport seam
//!
//! [`FileTransport`] is the boundary between the transfer logic and the wire.
//! [`GrpcTransport`] implements it over a tonic channel; tests substitute an
//! in-memory double.

use crate::{retry::RetryPolicy, ClientConfig, Result};
use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt};
use oss_proto::{DownloadInfo, DownloadReply, FileServerServiceClient, UpLoadResponse, UploadInfo};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::Poll;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;
use tonic::transport::{Channel, Endpoint};
use tonic::{Request, Status};
use tracing::{debug, info};

/// Stream of replies from a server-streaming download
pub type DownloadStream = BoxStream<'static, std::result::Result<DownloadReply, Status>>;

/// The four call shapes of the file server, plus connection teardown
#[async_trait]
pub trait FileTransport: Send + Sync {
    /// Unary upload of a whole file
    async fn single_upload(&self, request: UploadInfo) -> std::result::Result<UpLoadResponse, Status>;

    /// Open a client-streaming upload
    async fn open_chunk_upload(&self) -> std::result::Result<Box<dyn ChunkUploadStream>, Status>;

    /// Unary download of a whole file
    async fn download(&self, request: DownloadInfo) -> std::result::Result<DownloadReply, Status>;

    /// Open a server-streaming download
    async fn big_file_download(&self, request: DownloadInfo) -> std::result::Result<DownloadStream, Status>;

    /// Release the connection. Later calls fail with `Unavailable`.
    async fn close(&self) -> std::result::Result<(), Status>;
}

/// Send side of a client-streaming upload
///
/// Messages arrive at the server in send order. Dropping the stream without
/// calling [`close_and_recv`](Self::close_and_recv) cancels the call; the
/// server never sees it as a completed upload.
#[async_trait]
pub trait ChunkUploadStream: Send {
    /// Send one message
    async fn send(&mut self, message: UploadInfo) -> std::result::Result<(), Status>;

    /// Half-close the stream and wait for the server's single reply
    async fn close_and_recv(&mut self) -> std::result::Result<UpLoadResponse, Status>;
}

/// Transport over a tonic channel
///
/// Unary calls carry the whole-call deadline as `grpc-timeout`, which the
/// channel also enforces locally. Streaming calls have no overall deadline;
/// a download stream's open is bounded per attempt by the retry policy.
pub struct GrpcTransport {
    client: RwLock<Option<FileServerServiceClient<Channel>>>,
    retry: RetryPolicy,
    timeout: Duration,
}

impl GrpcTransport {
    /// Connect to the configured endpoint
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        let uri = config.endpoint_uri();
        let endpoint = Endpoint::from_shared(uri.clone())?.connect_timeout(config.retry_timeout);

        debug!("Connecting to {}", uri);
        let channel = endpoint.connect().await?;
        info!("Connected to file server at {}", uri);

        Ok(Self::from_channel(channel, config))
    }

    /// Wrap an already established channel
    pub fn from_channel(channel: Channel, config: &ClientConfig) -> Self {
        let client = FileServerServiceClient::new(channel)
            .max_encoding_message_size(config.max_message_size)
            .max_decoding_message_size(config.max_message_size);

        Self {
            client: RwLock::new(Some(client)),
            retry: RetryPolicy {
                max_retries: config.max_retries,
                per_attempt_timeout: config.retry_timeout,
                backoff: config.retry_backoff,
            },
            timeout: config.timeout,
        }
    }

    fn client(&self) -> std::result::Result<FileServerServiceClient<Channel>, Status> {
        self.client
            .read()
            .clone()
            .ok_or_else(|| Status::unavailable("client connection is closed"))
    }

    fn with_deadline<T>(&self, message: T) -> Request<T> {
        let mut request = Request::new(message);
        request.set_timeout(self.timeout);
        request
    }
}

#[async_trait]
impl FileTransport for GrpcTransport {
    async fn single_upload(&self, request: UploadInfo) -> std::result::Result<UpLoadResponse, Status> {
        let mut client = self.client()?;
        Ok(client.single_upload(self.with_deadline(request)).await?.into_inner())
    }

    async fn open_chunk_upload(&self) -> std::result::Result<Box<dyn ChunkUploadStream>, Status> {
        let mut client = self.client()?;
        let (sender, receiver) = mpsc::channel(1);
        let finished = Arc::new(AtomicBool::new(false));

        // The request body only ends once `finished` is set. A dropped
        // sender without it leaves the body pending until the call is aborted.
        let end_of_stream = {
            let finished = Arc::clone(&finished);
            futures::stream::poll_fn(move |_| {
                if finished.load(Ordering::SeqCst) {
                    Poll::Ready(None)
                } else {
                    Poll::Pending
                }
            })
        };
        let outgoing = ReceiverStream::new(receiver).chain(end_of_stream);

        let call = tokio::spawn(async move {
            client
                .chunk_upload(outgoing)
                .await
                .map(|response| response.into_inner())
        });

        Ok(Box::new(GrpcChunkUpload {
            sender: Some(sender),
            finished,
            call: Some(call),
        }))
    }

    async fn download(&self, request: DownloadInfo) -> std::result::Result<DownloadReply, Status> {
        let mut client = self.client()?;
        Ok(client.download(self.with_deadline(request)).await?.into_inner())
    }

    async fn big_file_download(&self, request: DownloadInfo) -> std::result::Result<DownloadStream, Status> {
        let client = self.client()?;
        let response = self
            .retry
            .run("BigFileDownload", move || {
                let mut client = client.clone();
                let request = request.clone();
                async move { client.big_file_download(request).await }
            })
            .await?;
        Ok(response.into_inner().boxed())
    }

    async fn close(&self) -> std::result::Result<(), Status> {
        if self.client.write().take().is_some() {
            info!("Closed file server connection");
        }
        Ok(())
    }
}

/// Client-streaming upload bridged through a channel to a spawned call
struct GrpcChunkUpload {
    sender: Option<mpsc::Sender<UploadInfo>>,
    finished: Arc<AtomicBool>,
    call: Option<JoinHandle<std::result::Result<UpLoadResponse, Status>>>,
}

impl GrpcChunkUpload {
    async fn finish(&mut self) -> std::result::Result<UpLoadResponse, Status> {
        self.finished.store(true, Ordering::SeqCst);
        self.sender = None;
        match self.call.take() {
            Some(call) => call
                .await
                .map_err(|e| Status::internal(format!("upload task failed: {}", e)))?,
            None => Err(Status::failed_precondition("upload stream already finished")),
        }
    }
}

#[async_trait]
impl ChunkUploadStream for GrpcChunkUpload {
    async fn send(&mut self, message: UploadInfo) -> std::result::Result<(), Status> {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| Status::failed_precondition("upload stream already closed"))?;
        if sender.send(message).await.is_ok() {
            return Ok(());
        }

        // The call ended before consuming the message; report why.
        match self.finish().await {
            Ok(_) => Err(Status::aborted("server closed the upload stream early")),
            Err(status) => Err(status),
        }
    }

    async fn close_and_recv(&mut self) -> std::result::Result<UpLoadResponse, Status> {
        self.finish().await
    }
}

impl Drop for GrpcChunkUpload {
    fn drop(&mut self) {
        if let Some(call) = self.call.take() {
            call.abort();
        }
    }
}

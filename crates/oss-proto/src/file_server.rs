// Code produced from proto/file_server.proto with prost-build and tonic-build.
// Regenerate when the .proto changes.

/// A bounded slice of a file's bytes.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Chunk {
    #[prost(bytes = "vec", tag = "1")]
    pub content: ::prost::alloc::vec::Vec<u8>,
}
/// One upload message. A single-shot upload sends exactly one; a chunked
/// upload sends one per chunk, in file order.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UploadInfo {
    #[prost(string, tag = "1")]
    pub access_key: ::prost::alloc::string::String,
    /// Content tag / content type of the object.
    #[prost(string, tag = "2")]
    pub header: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub bucket: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub file_name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "5")]
    pub chunk: ::core::option::Option<Chunk>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpLoadResponse {
    #[prost(int64, tag = "1")]
    pub code: i64,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DownloadInfo {
    #[prost(string, tag = "1")]
    pub bucket: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub file_name: ::prost::alloc::string::String,
    /// Chunk size for BigFileDownload. Zero means non-chunked.
    #[prost(int64, tag = "3")]
    pub size: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DownloadReply {
    #[prost(message, optional, tag = "1")]
    pub chunk: ::core::option::Option<Chunk>,
}
/// Generated client implementations.
pub mod file_server_service_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    #[derive(Debug, Clone)]
    pub struct FileServerServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl FileServerServiceClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> FileServerServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_encoding_message_size(limit);
            self
        }
        pub async fn single_upload(
            &mut self,
            request: impl tonic::IntoRequest<super::UploadInfo>,
        ) -> std::result::Result<tonic::Response<super::UpLoadResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/file_server.FileServerService/SingleUpload",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new("file_server.FileServerService", "SingleUpload"),
                );
            self.inner.unary(req, path, codec).await
        }
        pub async fn chunk_upload(
            &mut self,
            request: impl tonic::IntoStreamingRequest<Message = super::UploadInfo>,
        ) -> std::result::Result<tonic::Response<super::UpLoadResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/file_server.FileServerService/ChunkUpload",
            );
            let mut req = request.into_streaming_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new("file_server.FileServerService", "ChunkUpload"),
                );
            self.inner.client_streaming(req, path, codec).await
        }
        pub async fn download(
            &mut self,
            request: impl tonic::IntoRequest<super::DownloadInfo>,
        ) -> std::result::Result<tonic::Response<super::DownloadReply>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/file_server.FileServerService/Download",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new("file_server.FileServerService", "Download"),
                );
            self.inner.unary(req, path, codec).await
        }
        pub async fn big_file_download(
            &mut self,
            request: impl tonic::IntoRequest<super::DownloadInfo>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<super::DownloadReply>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/file_server.FileServerService/BigFileDownload",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "file_server.FileServerService",
                        "BigFileDownload",
                    ),
                );
            self.inner.server_streaming(req, path, codec).await
        }
    }
}
/// Generated server implementations.
pub mod file_server_service_server {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    /// Generated trait containing gRPC methods that should be implemented for use with FileServerServiceServer.
    #[async_trait]
    pub trait FileServerService: std::marker::Send + std::marker::Sync + 'static {
        async fn single_upload(
            &self,
            request: tonic::Request<super::UploadInfo>,
        ) -> std::result::Result<tonic::Response<super::UpLoadResponse>, tonic::Status>;
        async fn chunk_upload(
            &self,
            request: tonic::Request<tonic::Streaming<super::UploadInfo>>,
        ) -> std::result::Result<tonic::Response<super::UpLoadResponse>, tonic::Status>;
        async fn download(
            &self,
            request: tonic::Request<super::DownloadInfo>,
        ) -> std::result::Result<tonic::Response<super::DownloadReply>, tonic::Status>;
        /// Server streaming response type for the BigFileDownload method.
        type BigFileDownloadStream: tonic::codegen::tokio_stream::Stream<
                Item = std::result::Result<super::DownloadReply, tonic::Status>,
            >
            + std::marker::Send
            + 'static;
        async fn big_file_download(
            &self,
            request: tonic::Request<super::DownloadInfo>,
        ) -> std::result::Result<
            tonic::Response<Self::BigFileDownloadStream>,
            tonic::Status,
        >;
    }
    #[derive(Debug)]
    pub struct FileServerServiceServer<T> {
        inner: Arc<T>,
        max_decoding_message_size: Option<usize>,
        max_encoding_message_size: Option<usize>,
    }
    impl<T> FileServerServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }
        pub fn from_arc(inner: Arc<T>) -> Self {
            Self {
                inner,
                max_decoding_message_size: None,
                max_encoding_message_size: None,
            }
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.max_decoding_message_size = Some(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.max_encoding_message_size = Some(limit);
            self
        }
    }
    impl<T, B> tonic::codegen::Service<http::Request<B>> for FileServerServiceServer<T>
    where
        T: FileServerService,
        B: Body + std::marker::Send + 'static,
        B::Error: Into<StdError> + std::marker::Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(
            &mut self,
            _cx: &mut Context<'_>,
        ) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let max_decoding_message_size = self.max_decoding_message_size;
            let max_encoding_message_size = self.max_encoding_message_size;
            match req.uri().path() {
                "/file_server.FileServerService/SingleUpload" => {
                    #[allow(non_camel_case_types)]
                    struct SingleUploadSvc<T: FileServerService>(pub Arc<T>);
                    impl<
                        T: FileServerService,
                    > tonic::server::UnaryService<super::UploadInfo>
                    for SingleUploadSvc<T> {
                        type Response = super::UpLoadResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::UploadInfo>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as FileServerService>::single_upload(&inner, request)
                                    .await
                            };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SingleUploadSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/file_server.FileServerService/ChunkUpload" => {
                    #[allow(non_camel_case_types)]
                    struct ChunkUploadSvc<T: FileServerService>(pub Arc<T>);
                    impl<
                        T: FileServerService,
                    > tonic::server::ClientStreamingService<super::UploadInfo>
                    for ChunkUploadSvc<T> {
                        type Response = super::UpLoadResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<tonic::Streaming<super::UploadInfo>>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as FileServerService>::chunk_upload(&inner, request)
                                    .await
                            };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = ChunkUploadSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.client_streaming(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/file_server.FileServerService/Download" => {
                    #[allow(non_camel_case_types)]
                    struct DownloadSvc<T: FileServerService>(pub Arc<T>);
                    impl<
                        T: FileServerService,
                    > tonic::server::UnaryService<super::DownloadInfo>
                    for DownloadSvc<T> {
                        type Response = super::DownloadReply;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::DownloadInfo>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as FileServerService>::download(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = DownloadSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/file_server.FileServerService/BigFileDownload" => {
                    #[allow(non_camel_case_types)]
                    struct BigFileDownloadSvc<T: FileServerService>(pub Arc<T>);
                    impl<
                        T: FileServerService,
                    > tonic::server::ServerStreamingService<super::DownloadInfo>
                    for BigFileDownloadSvc<T> {
                        type Response = super::DownloadReply;
                        type ResponseStream = T::BigFileDownloadStream;
                        type Future = BoxFuture<
                            tonic::Response<Self::ResponseStream>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::DownloadInfo>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as FileServerService>::big_file_download(
                                        &inner,
                                        request,
                                    )
                                    .await
                            };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = BigFileDownloadSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.server_streaming(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => {
                    Box::pin(async move {
                        let mut response = http::Response::new(empty_body());
                        let headers = response.headers_mut();
                        headers
                            .insert(
                                tonic::Status::GRPC_STATUS,
                                (tonic::Code::Unimplemented as i32).into(),
                            );
                        headers
                            .insert(
                                http::header::CONTENT_TYPE,
                                tonic::metadata::GRPC_CONTENT_TYPE,
                            );
                        Ok(response)
                    })
                }
            }
        }
    }
    impl<T> Clone for FileServerServiceServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self {
                inner,
                max_decoding_message_size: self.max_decoding_message_size,
                max_encoding_message_size: self.max_encoding_message_size,
            }
        }
    }
    /// Generated gRPC service name
    pub const SERVICE_NAME: &str = "file_server.FileServerService";
    impl<T> tonic::server::NamedService for FileServerServiceServer<T> {
        const NAME: &'static str = SERVICE_NAME;
    }
}

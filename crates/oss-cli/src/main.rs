//! oss - upload and download files against the file server

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use oss_client::{ClientConfig, GrpcOssClient, OssClient, UploadResponse};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "oss")]
#[command(about = "Upload and download files against the file server")]
#[command(version)]
struct Args {
    /// File server endpoint
    #[arg(short, long, default_value = "localhost:50051", env = "OSS_ENDPOINT")]
    endpoint: String,

    /// Access key
    #[arg(short = 'k', long, env = "OSS_ACCESS_KEY", hide_env_values = true)]
    access_key: String,

    /// Per-attempt timeout in seconds
    #[arg(long, default_value = "2", env = "OSS_RETRY_TIMEOUT_SECS")]
    retry_timeout_secs: u64,

    /// Deadline for unary calls in seconds
    #[arg(long, default_value = "60", env = "OSS_TIMEOUT_SECS")]
    timeout_secs: u64,

    /// Retries for streaming downloads
    #[arg(long, default_value = "3", env = "OSS_MAX_RETRIES")]
    max_retries: u32,

    /// Enable debug logging
    #[arg(short, long, env = "OSS_DEBUG")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload a local file
    Upload {
        /// File to upload
        path: PathBuf,

        /// Target bucket
        #[arg(short, long)]
        bucket: String,

        /// Name to store the file under (defaults to the file's name)
        #[arg(short, long)]
        name: Option<String>,

        /// Content tag sent with the file
        #[arg(long, default_value = "")]
        header: String,

        /// Stream in chunks of this many bytes instead of one request
        #[arg(short, long)]
        chunk_size: Option<u64>,
    },
    /// Download a file into <output-dir>/<bucket>/<name>
    Download {
        /// Source bucket
        #[arg(short, long)]
        bucket: String,

        /// Stored file name
        #[arg(short, long)]
        name: String,

        /// Receive in chunks of this many bytes instead of one reply
        #[arg(short, long)]
        chunk_size: Option<u64>,

        /// Directory to write under (defaults to the working directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.endpoint.clone())
            .with_retry_timeout(Duration::from_secs(self.retry_timeout_secs))
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_max_retries(self.max_retries);
        if let Command::Download { output_dir: Some(dir), .. } = &self.command {
            config = config.with_download_root(dir.clone());
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("oss_client={},oss={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = GrpcOssClient::connect(args.client_config(), args.access_key.clone())
        .await
        .with_context(|| format!("failed to connect to {}", args.endpoint))?;

    let outcome = run(&client, args.command).await;
    client.close().await?;
    outcome
}

async fn run(client: &GrpcOssClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Upload {
            path,
            bucket,
            name,
            header,
            chunk_size,
        } => {
            let name = match name {
                Some(name) => name,
                None => file_name_of(&path)?,
            };
            tracing::info!("Uploading {} to {}/{}", path.display(), bucket, name);

            let resp = match chunk_size {
                Some(size) => client.upload_for_chunk_from_file(size, &name, &bucket, &header, &path).await,
                None => client.upload_from_file(&name, &bucket, &header, &path).await,
            };
            report(&resp)
        }
        Command::Download {
            bucket,
            name,
            chunk_size,
            ..
        } => {
            let path = match chunk_size {
                Some(size) => client.download_for_chunk(size, &name, &bucket).await?,
                None => client.download(&name, &bucket).await?,
            };
            tracing::info!("Saved {}/{} to {}", bucket, name, path.display());
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn file_name_of(path: &std::path::Path) -> anyhow::Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("cannot derive a file name from {}", path.display()))
}

fn report(resp: &UploadResponse) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(resp)?);
    if let Some(kind) = resp.error_kind() {
        bail!("upload failed: {}", kind);
    }
    Ok(())
}

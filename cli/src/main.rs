use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod request;
mod session;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Client(#[from] socketbench::ClientError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("invalid header `{0}`; expected NAME:VALUE")]
    InvalidHeader(String),
    #[error("invalid HTTP method `{0}`")]
    InvalidMethod(String),
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("stdin read failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "socketbench", about = "WebSocket session client and HTTP request helper")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open an interactive WebSocket session; stdin lines are sent as text.
    Session(SessionArgs),
    /// Issue one JSON HTTP request and print the response body.
    Request(RequestArgs),
}

#[derive(Args, Debug)]
struct SessionArgs {
    #[arg(env = "SOCKETBENCH_URL")]
    url: String,
}

#[derive(Args, Debug)]
struct RequestArgs {
    url: String,

    #[arg(long, default_value = "GET")]
    method: String,

    #[arg(long = "header", value_name = "NAME:VALUE")]
    headers: Vec<String>,

    #[arg(long, help = "JSON request body")]
    body: Option<String>,

    #[arg(long, env = "SOCKETBENCH_REQUEST_TIMEOUT_SECS", default_value_t = request::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Session(args) => session::run(&args.url).await,
        Command::Request(args) => {
            let spec = request::RequestSpec {
                url: args.url,
                method: args.method,
                headers: args.headers,
                body: args.body,
                timeout: Duration::from_secs(args.timeout_secs),
            };
            let rendered = request::run(spec).await?;
            println!("{rendered}");
            Ok(())
        }
    }
}

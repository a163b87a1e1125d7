//! Interactive session: stdin lines out, every message and status change in.

use std::sync::Arc;

use socketbench::transport::ws::WsTransport;
use socketbench::{Client, ClientError, ErrorCode, Message, Status};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use crate::CliError;

pub async fn run(url: &str) -> Result<(), CliError> {
    let transport = WsTransport::from_env();
    debug!(config = ?transport.config(), "session: transport configured");
    let client = Client::new(Arc::new(transport));
    client.add_message_listener(|message| println!("{}", format_message(message)));
    client.add_status_listener(|status| println!("{}", format_status(status)));

    client.connect(url).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                // Already reported as a system message; keep the session open.
                if let Err(e) = client.send(&line).await {
                    log_send_failure(&e);
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    client.disconnect().await;
    Ok(())
}

fn log_send_failure(e: &ClientError) {
    warn!(code = e.error_code(), retryable = e.retryable(), error = %e, "session: send failed");
}

fn format_message(message: &Message) -> String {
    format!("[{}] {}: {}", message.timestamp, message.kind, message.content)
}

fn format_status(status: Status) -> String {
    format!("-- status: {status}")
}

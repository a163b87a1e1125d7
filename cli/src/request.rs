//! One-shot JSON HTTP request with a deadline.

use std::time::Duration;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::debug;

use crate::CliError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub url: String,
    pub method: String,
    /// Raw `NAME:VALUE` pairs, in command-line order.
    pub headers: Vec<String>,
    pub body: Option<String>,
    pub timeout: Duration,
}

/// Perform the request and return the rendered response body.
pub async fn run(spec: RequestSpec) -> Result<String, CliError> {
    let method = Method::from_bytes(spec.method.to_ascii_uppercase().as_bytes())
        .map_err(|_| CliError::InvalidMethod(spec.method.clone()))?;
    let headers = merge_headers(&spec.headers)?;
    let body = spec.body.as_deref().map(parse_body).transpose()?;

    let client = reqwest::Client::new();
    let mut request = client.request(method, &spec.url).headers(headers);
    if let Some(body) = body {
        request = request.body(body.to_string());
    }

    debug!(url = %spec.url, timeout = ?spec.timeout, "request: sending");
    let fut = async {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CliError::Status(status));
        }
        Ok(response.text().await?)
    };

    let text = tokio::time::timeout(spec.timeout, fut)
        .await
        .map_err(|_| CliError::Timeout(spec.timeout))??;
    Ok(render_body(&text))
}

/// `Content-Type: application/json` underneath caller-supplied headers.
/// A later duplicate header from the caller replaces an earlier one.
fn merge_headers(raw: &[String]) -> Result<HeaderMap, CliError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for entry in raw {
        let (name, value) = parse_header(entry)?;
        headers.insert(name, value);
    }
    Ok(headers)
}

fn parse_header(entry: &str) -> Result<(HeaderName, HeaderValue), CliError> {
    let invalid = || CliError::InvalidHeader(entry.to_owned());
    let (name, value) = entry.split_once(':').ok_or_else(invalid)?;
    let name = HeaderName::from_bytes(name.trim().as_bytes()).map_err(|_| invalid())?;
    let value = HeaderValue::from_str(value.trim()).map_err(|_| invalid())?;
    Ok((name, value))
}

fn parse_body(raw: &str) -> Result<Value, CliError> {
    Ok(serde_json::from_str(raw)?)
}

/// Pretty-print a JSON body; anything else is returned as-is.
fn render_body(text: &str) -> String {
    serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| text.to_owned())
}

#[cfg(test)]
#[path = "request_test.rs"]
mod tests;

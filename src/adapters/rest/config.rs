//! Shared configuration and construction helpers for the REST clients.

use reqwest::{Client, Url};
use std::time::Duration;

/// Configuration for one downstream REST client.
#[derive(Debug, Clone)]
pub struct RestClientConfig {
    /// Collection URL of the downstream resource
    /// (e.g. `http://localhost:8080/v1/movieinfos`).
    pub base_url: String,
    /// Per-request timeout enforced by the transport.
    pub timeout: Duration,
}

impl RestClientConfig {
    /// Creates a new configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(5),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Errors raised while constructing a REST client.
#[derive(Debug, thiserror::Error)]
pub enum RestClientError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to create HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Parses and checks a base URL once, at construction time.
pub(super) fn parse_base_url(raw: &str) -> Result<Url, RestClientError> {
    let url = Url::parse(raw).map_err(|e| RestClientError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(RestClientError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "must be an http(s) URL".to_string(),
        });
    }

    Ok(url)
}

/// Builds the pooled HTTP client shared by every call of one adapter.
pub(super) fn build_http_client(timeout: Duration) -> Result<Client, RestClientError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Describes a send failure the way logs and error messages report it.
pub(super) fn describe_send_error(err: &reqwest::Error, timeout: Duration) -> String {
    if err.is_timeout() {
        format!("Request timed out after {}ms", timeout.as_millis())
    } else if err.is_connect() {
        format!("Connection failed: {}", err)
    } else {
        err.to_string()
    }
}

/// Describes a failure while reading a response body after the status
/// line arrived.
pub(super) fn describe_body_error(err: &reqwest::Error) -> String {
    format!("Failed to read response body: {}", err)
}

/// Uses the response body as the error message, falling back to the status
/// line when the body is empty.
pub(super) fn body_or_status(body: String, status: reqwest::StatusCode) -> String {
    if body.trim().is_empty() {
        status.to_string()
    } else {
        body
    }
}

/// Serves one response whose body stops short of its declared length, then
/// closes the connection. Returns the server's base URL.
#[cfg(test)]
pub(super) async fn spawn_truncated_response(status_line: &'static str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        // Consume the request head before answering.
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: text/plain\r\ncontent-length: 100\r\n\r\nshort",
            status_line
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{}", addr)
}

//! HTTP transport.

use crate::error::{TransportError, TransportResult};
use crate::operation::Method;
use crate::request::{Request, RequestBody};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Status and body of a server response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Convenience constructor for JSON bodies.
    pub fn json_body(status: u16, body: &serde_json::Value) -> Self {
        Self::new(status, body.to_string())
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Body as text, cut after `max_len` characters.
    pub fn preview(&self, max_len: usize) -> String {
        match std::str::from_utf8(&self.body) {
            Ok(text) if text.chars().count() > max_len => {
                let cut: String = text.chars().take(max_len).collect();
                format!("{cut}...")
            }
            Ok(text) => text.to_string(),
            Err(_) => "<binary-data>".to_string(),
        }
    }
}

/// Sends requests to a server under test.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Single reachability request against the server root.
    async fn probe(&self, server: &str) -> TransportResult<HttpResponse>;

    /// Send one generated request.
    async fn send(&self, server: &str, request: &Request) -> TransportResult<HttpResponse>;
}

/// Transport settings.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    /// Verify TLS certificates.
    pub verify: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            verify: true,
        }
    }
}

/// `reqwest` based transport.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: TransportConfig) -> TransportResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify)
            .build()?;
        Ok(Self { client })
    }

    fn url(server: &str, request: &Request) -> TransportResult<Url> {
        let raw = format!("{}{}", server.trim_end_matches('/'), request.path);
        let mut url = Url::parse(&raw).map_err(|e| TransportError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }

    async fn finish(response: reqwest::Response) -> TransportResult<HttpResponse> {
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(HttpResponse { status, body })
    }
}

fn method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn probe(&self, server: &str) -> TransportResult<HttpResponse> {
        debug!(server, "Probing server");
        let response = self.client.get(server).send().await?;
        Self::finish(response).await
    }

    async fn send(&self, server: &str, request: &Request) -> TransportResult<HttpResponse> {
        let url = Self::url(server, request)?;
        debug!(method = %request.method, %url, "Sending request");
        let mut builder = self.client.request(method(request.method), url);
        builder = match &request.body {
            Some(RequestBody::Json(value)) => builder.json(value),
            Some(RequestBody::Raw(raw)) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(raw.clone()),
            None => builder,
        };
        let response = builder.send().await?;
        Self::finish(response).await
    }
}

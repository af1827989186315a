//! Executes `HttpRequest` values against the network.
//!
//! # Design
//! `Transport` is the only seam that performs I/O. The production
//! implementation wraps a `reqwest::Client`; tests substitute a stub that
//! replays canned responses. Non-2xx statuses are returned as data, never as
//! `Err`, so status interpretation stays in `PostClient`.

use async_trait::async_trait;
use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Performs a single HTTP GET round trip.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `Transport` backed by `reqwest`, using the client's default timeouts.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let response = self
            .client
            .get(&request.url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        debug!(url = %request.url, status, "request completed");
        Ok(HttpResponse { status, body })
    }
}

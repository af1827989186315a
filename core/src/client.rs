//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `PostClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! A `Transport` executes the round trip in between, keeping this module
//! deterministic and free of I/O.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Post;

/// Synchronous, stateless client for the posts API.
#[derive(Debug, Clone)]
pub struct PostClient {
    base_url: String,
}

impl PostClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/posts", self.base_url),
        }
    }

    /// The id is opaque and inserted into the path as-is.
    pub fn build_get_post(&self, id: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/posts/{id}", self.base_url),
        }
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        decode_ok(response)
    }

    pub fn parse_get_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        decode_ok(response)
    }
}

/// Require a 200 and decode the body.
fn decode_ok<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response, 200)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

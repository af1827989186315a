//! Error types for the posts pipeline.
//!
//! # Design
//! Two layers. `ApiError` describes why a single request failed and is only
//! ever logged. `FetchError` is what the repository hands upward: callers get
//! one failure kind regardless of whether the post was missing, the network
//! was down, or the body did not decode.

use thiserror::Error;

/// Diagnostic errors from building, executing, or parsing a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status other than 200 or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),
}

/// The failure surfaced to consumers of `PostRepository`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("invalid")]
    Invalid,
}

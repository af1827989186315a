//! Client pipeline for the posts API.
//!
//! # Overview
//! Fetches blog posts over HTTP and exposes them as view state, in layers:
//! `PostClient` builds requests and parses responses without I/O, a
//! `Transport` performs the round trip, `PostDataSource` turns each call into
//! an `Option`, `PostRepository` turns that into a `Result`, and
//! `PostViewModel` publishes the outcome as `ViewState`.
//!
//! # Design
//! - `PostClient` is stateless; it holds only `base_url`.
//! - All network, status, and decode failures reach consumers as the single
//!   `FetchError::Invalid`. The underlying `ApiError` is logged, not returned.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.
//! - Wiring is plain constructor injection:
//!
//! ```no_run
//! use posts_core::{PostClient, PostDataSource, PostRepository, PostViewModel, ReqwestTransport};
//!
//! # async fn run() {
//! let source = PostDataSource::new(PostClient::new(posts_core::DEFAULT_BASE_URL), ReqwestTransport::new());
//! let view_model = PostViewModel::new(PostRepository::new(source));
//! view_model.fetch().await.unwrap();
//! println!("{:?}", view_model.posts_state());
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod repository;
pub mod source;
pub mod transport;
pub mod types;
pub mod view_model;

pub use client::PostClient;
pub use error::{ApiError, FetchError};
pub use http::{HttpRequest, HttpResponse};
pub use repository::PostRepository;
pub use source::{PostDataSource, PostSource};
pub use transport::{ReqwestTransport, Transport};
pub use types::Post;
pub use view_model::{PostViewModel, ViewEvent, ViewState};

/// Public JSONPlaceholder instance the client targets when not configured.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

//! Data source: one request per call, decoded or nothing.
//!
//! # Design
//! `PostDataSource` pairs a `PostClient` with a `Transport`. Every failure
//! (transport error, unexpected status, undecodable body) collapses into
//! `None`; the cause is logged and then dropped. A missing id short-circuits
//! before any request is made.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::client::PostClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::Post;

/// Boundary the repository reads posts through.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// `None` on any non-200 status, transport failure, or decode failure.
    async fn fetch_list(&self) -> Option<Vec<Post>>;

    /// `None` without a request when `id` is absent.
    async fn fetch_one(&self, id: Option<&str>) -> Option<Post>;
}

/// `PostSource` that talks HTTP through a `Transport`.
#[derive(Debug, Clone)]
pub struct PostDataSource<T> {
    client: PostClient,
    transport: T,
}

impl<T: Transport> PostDataSource<T> {
    pub fn new(client: PostClient, transport: T) -> Self {
        Self { client, transport }
    }

    async fn try_fetch_list(&self) -> Result<Vec<Post>, ApiError> {
        let response = self.transport.execute(self.client.build_list_posts()).await?;
        self.client.parse_list_posts(response)
    }

    async fn try_fetch_one(&self, id: &str) -> Result<Post, ApiError> {
        let response = self.transport.execute(self.client.build_get_post(id)).await?;
        self.client.parse_get_post(response)
    }
}

#[async_trait]
impl<T: Transport> PostSource for PostDataSource<T> {
    async fn fetch_list(&self) -> Option<Vec<Post>> {
        match self.try_fetch_list().await {
            Ok(posts) => {
                debug!(count = posts.len(), "fetched post list");
                Some(posts)
            }
            Err(error) => {
                log_failure("list", &error);
                None
            }
        }
    }

    async fn fetch_one(&self, id: Option<&str>) -> Option<Post> {
        let Some(id) = id else {
            debug!("no post id given, skipping request");
            return None;
        };
        match self.try_fetch_one(id).await {
            Ok(post) => {
                debug!(id, "fetched post");
                Some(post)
            }
            Err(error) => {
                log_failure("single", &error);
                None
            }
        }
    }
}

fn log_failure(operation: &str, error: &ApiError) {
    match error {
        ApiError::NotFound => debug!(operation, %error, "post fetch failed"),
        _ => warn!(operation, %error, "post fetch failed"),
    }
}

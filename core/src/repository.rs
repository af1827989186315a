//! Repository: wraps data-source calls in a `Result`.

use crate::error::FetchError;
use crate::source::PostSource;
use crate::types::Post;

/// Turns the data source's `Option`s into `Result`s with a single error kind.
///
/// An empty list is a success; only an absent value is a failure.
#[derive(Debug, Clone)]
pub struct PostRepository<S> {
    source: S,
}

impl<S: PostSource> PostRepository<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn get_posts(&self) -> Result<Vec<Post>, FetchError> {
        self.source.fetch_list().await.ok_or(FetchError::Invalid)
    }

    pub async fn get_post(&self, id: Option<&str>) -> Result<Post, FetchError> {
        self.source.fetch_one(id).await.ok_or(FetchError::Invalid)
    }
}

//! Maps repository results onto observable view state.
//!
//! # Design
//! Two independent `watch` cells hold the list screen and detail screen
//! state. Each starts at `Loading`. A fetch runs as its own tokio task and
//! publishes exactly one value when it resolves: `Loaded*` on success,
//! `Error` with the failure message otherwise. There is no intermediate
//! `Loading` publish between fetches, no de-duplication, and no cancellation;
//! when fetches overlap, whichever resolves last is what readers see.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::repository::PostRepository;
use crate::source::PostSource;
use crate::types::Post;

/// Display state of one screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    LoadedList(Vec<Post>),
    LoadedSingle(Option<Post>),
    Error(String),
}

/// Actions the presentation layer can dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Fetch,
    FetchSingle(Option<String>),
}

pub struct PostViewModel<S> {
    repository: Arc<PostRepository<S>>,
    posts: Arc<watch::Sender<ViewState>>,
    post: Arc<watch::Sender<ViewState>>,
}

impl<S: PostSource + 'static> PostViewModel<S> {
    pub fn new(repository: PostRepository<S>) -> Self {
        let (posts, _) = watch::channel(ViewState::Loading);
        let (post, _) = watch::channel(ViewState::Loading);
        Self {
            repository: Arc::new(repository),
            posts: Arc::new(posts),
            post: Arc::new(post),
        }
    }

    /// Dispatch an event to the matching fetch action.
    pub fn handle(&self, event: ViewEvent) -> JoinHandle<()> {
        match event {
            ViewEvent::Fetch => self.fetch(),
            ViewEvent::FetchSingle(id) => self.fetch_single(id),
        }
    }

    /// Load the post list into the list cell.
    ///
    /// Must be called from within a tokio runtime. Dropping the handle does
    /// not cancel the fetch.
    pub fn fetch(&self) -> JoinHandle<()> {
        let repository = Arc::clone(&self.repository);
        let cell = Arc::clone(&self.posts);
        tokio::spawn(async move {
            let state = match repository.get_posts().await {
                Ok(posts) => {
                    info!(count = posts.len(), "post list loaded");
                    ViewState::LoadedList(posts)
                }
                Err(error) => {
                    debug!(%error, "post list failed");
                    ViewState::Error(error.to_string())
                }
            };
            cell.send_replace(state);
        })
    }

    /// Load one post into the detail cell. A `None` id lands as `Error`.
    pub fn fetch_single(&self, id: Option<String>) -> JoinHandle<()> {
        let repository = Arc::clone(&self.repository);
        let cell = Arc::clone(&self.post);
        tokio::spawn(async move {
            let state = match repository.get_post(id.as_deref()).await {
                Ok(post) => {
                    info!(id = post.id, "post loaded");
                    ViewState::LoadedSingle(Some(post))
                }
                Err(error) => {
                    debug!(id = id.as_deref().unwrap_or("<none>"), %error, "post failed");
                    ViewState::Error(error.to_string())
                }
            };
            cell.send_replace(state);
        })
    }

    pub fn posts_state(&self) -> ViewState {
        self.posts.borrow().clone()
    }

    pub fn post_state(&self) -> ViewState {
        self.post.borrow().clone()
    }

    pub fn subscribe_posts(&self) -> watch::Receiver<ViewState> {
        self.posts.subscribe()
    }

    pub fn subscribe_post(&self) -> watch::Receiver<ViewState> {
        self.post.subscribe()
    }
}

//! Plain-text rendering of view state.

use anyhow::{anyhow, Result};
use posts_core::{Post, ViewState};

/// Render a state as output lines; an `Error` state becomes an `Err`.
pub fn render(state: &ViewState) -> Result<Vec<String>> {
    match state {
        ViewState::Loading => Ok(vec!["loading...".to_string()]),
        ViewState::LoadedList(posts) if posts.is_empty() => Ok(vec!["no posts".to_string()]),
        ViewState::LoadedList(posts) => Ok(posts.iter().map(summary_line).collect()),
        ViewState::LoadedSingle(Some(post)) => Ok(detail_lines(post)),
        ViewState::LoadedSingle(None) => Ok(vec!["no post".to_string()]),
        ViewState::Error(message) => Err(anyhow!("fetch failed: {message}")),
    }
}

fn summary_line(post: &Post) -> String {
    format!("{:>4}  {}", post.id, post.title)
}

fn detail_lines(post: &Post) -> Vec<String> {
    vec![
        format!("#{} by user {}", post.id, post.user_id),
        post.title.clone(),
        String::new(),
        post.body.clone(),
    ]
}

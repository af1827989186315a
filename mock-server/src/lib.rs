use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub id: i32,
    pub title: String,
    pub body: String,
}

/// Posts keyed by id; iteration order is the list endpoint's order.
pub type Db = Arc<BTreeMap<i32, Post>>;

/// Router serving the built-in fixture posts.
pub fn app() -> Router {
    app_with_posts(fixtures())
}

/// Router serving exactly `posts`.
pub fn app_with_posts(posts: Vec<Post>) -> Router {
    let db: Db = Arc::new(posts.into_iter().map(|p| (p.id, p)).collect());
    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{id}", get(get_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_posts(listener: TcpListener, posts: Vec<Post>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_posts(posts)).await
}

/// A small JSONPlaceholder-shaped data set.
pub fn fixtures() -> Vec<Post> {
    [
        (1, 1, "sunt aut facere repellat", "quia et suscipit recusandae"),
        (1, 2, "qui est esse", "est rerum tempore vitae"),
        (1, 3, "ea molestias quasi", "et iusto sed quo iure"),
        (2, 4, "eum et est occaecati", "ullam et saepe reiciendis"),
        (2, 5, "nesciunt quas odio", "repudiandae veniam quaerat"),
    ]
    .into_iter()
    .map(|(user_id, id, title, body)| Post {
        user_id,
        id,
        title: title.to_string(),
        body: body.to_string(),
    })
    .collect()
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    tracing::debug!(count = db.len(), "list posts");
    Json(db.values().cloned().collect())
}

async fn get_post(State(db): State<Db>, Path(id): Path<i32>) -> Result<Json<Post>, StatusCode> {
    tracing::debug!(id, "get post");
    db.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_to_json() {
        let post = Post {
            user_id: 3,
            id: 1,
            title: "Test".to_string(),
            body: "Body".to_string(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["userId"], 3);
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["body"], "Body");
    }
}

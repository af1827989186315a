use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_posts, fixtures, Post};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn post(id: i32, title: &str) -> Post {
    Post {
        user_id: 1,
        id,
        title: title.to_string(),
        body: "b".to_string(),
    }
}

// --- list ---

#[tokio::test]
async fn list_posts_returns_fixtures() {
    let resp = app().oneshot(get_request("/posts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts, fixtures());
}

#[tokio::test]
async fn list_posts_empty() {
    let resp = app_with_posts(Vec::new())
        .oneshot(get_request("/posts"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert!(posts.is_empty());
}

#[tokio::test]
async fn list_posts_sorted_by_id() {
    let resp = app_with_posts(vec![post(3, "c"), post(1, "a"), post(2, "b")])
        .oneshot(get_request("/posts"))
        .await
        .unwrap();

    let posts: Vec<Post> = body_json(resp).await;
    let ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn list_posts_wire_format_uses_user_id_camel_case() {
    let resp = app_with_posts(vec![post(1, "t")])
        .oneshot(get_request("/posts"))
        .await
        .unwrap();

    let raw: serde_json::Value = body_json(resp).await;
    assert_eq!(
        raw,
        serde_json::json!([{"userId": 1, "id": 1, "title": "t", "body": "b"}])
    );
}

#[tokio::test]
async fn list_posts_duplicate_ids_keep_last() {
    let resp = app_with_posts(vec![post(1, "first"), post(1, "second")])
        .oneshot(get_request("/posts"))
        .await
        .unwrap();

    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts, vec![post(1, "second")]);
}

// --- get ---

#[tokio::test]
async fn get_post_found() {
    let resp = app_with_posts(vec![post(7, "seven")])
        .oneshot(get_request("/posts/7"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Post = body_json(resp).await;
    assert_eq!(fetched, post(7, "seven"));
}

#[tokio::test]
async fn get_post_not_found() {
    let resp = app().oneshot(get_request("/posts/99")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn get_post_non_numeric_id_returns_400() {
    let resp = app().oneshot(get_request("/posts/not-a-number")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app().oneshot(get_request("/comments")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- list then detail on one service ---

#[tokio::test]
async fn browse_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/posts"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert!(!posts.is_empty());

    for listed in &posts {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(get_request(&format!("/posts/{}", listed.id)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let fetched: Post = body_json(resp).await;
        assert_eq!(&fetched, listed);
    }
}

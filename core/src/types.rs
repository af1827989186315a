//! Domain DTOs for the posts API.
//!
//! # Design
//! `Post` mirrors the upstream JSON schema (`userId` is camelCase on the
//! wire). The mock-server crate defines its own copy; integration tests catch
//! schema drift between the two.

use serde::{Deserialize, Serialize};

/// A single blog post returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub id: i32,
    pub title: String,
    pub body: String,
}

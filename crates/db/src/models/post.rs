//! Post entity model and DTOs.

use inkpost_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `posts` table.
///
/// Serializes to its own columns only. There is deliberately no `user`
/// field: navigating from a post back to its owner is done by looking
/// up `user_id`, which keeps the JSON representation acyclic.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub user_id: DbId,
}

/// DTO for creating a new post.
///
/// No route exposes post creation yet; the repository and this DTO are
/// exercised by tests and seed tooling.
#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub user_id: DbId,
}

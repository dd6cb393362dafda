//! Repository for the `posts` table.

use sqlx::SqlitePool;

use inkpost_core::types::DbId;

use crate::models::post::{CreatePost, Post};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, user_id";

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created row.
    ///
    /// Fails with a foreign-key database error if `input.user_id` does
    /// not reference an existing user.
    pub async fn create(pool: &SqlitePool, input: &CreatePost) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (title, content, user_id) VALUES (?, ?, ?) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// List all posts in id order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts ORDER BY id");
        sqlx::query_as::<_, Post>(&query).fetch_all(pool).await
    }

    /// List the posts belonging to one user, in id order.
    pub async fn list_by_user(pool: &SqlitePool, user_id: DbId) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE user_id = ? ORDER BY id");
        sqlx::query_as::<_, Post>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}

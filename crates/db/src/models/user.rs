//! User entity model and DTOs.

use std::collections::HashMap;

use inkpost_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::post::Post;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new user.
///
/// `name` is optional at the wire level; the handler validates presence
/// before any insert happens.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: Option<String>,
}

/// A user with its posts nested one level deep.
///
/// This is the response shape for `/users`: each nested [`Post`]
/// serializes its own columns and nothing else, so the user → posts →
/// user cycle in the schema never appears in the JSON.
#[derive(Debug, Serialize)]
pub struct UserWithPosts {
    pub id: DbId,
    pub name: String,
    pub posts: Vec<Post>,
}

impl UserWithPosts {
    /// Wrap a bare user that has no posts (e.g. one just created).
    pub fn without_posts(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            posts: Vec::new(),
        }
    }

    /// Group `posts` under their owning users by `user_id`.
    ///
    /// Users keep their input order, and each user's posts keep theirs.
    /// A post whose `user_id` matches no user in `users` is dropped;
    /// with both sets read from the same database this cannot happen,
    /// since the foreign key guarantees an owner exists.
    pub fn group(users: Vec<User>, posts: Vec<Post>) -> Vec<Self> {
        let mut by_user: HashMap<DbId, Vec<Post>> = HashMap::new();
        for post in posts {
            by_user.entry(post.user_id).or_default().push(post);
        }

        users
            .into_iter()
            .map(|user| Self {
                posts: by_user.remove(&user.id).unwrap_or_default(),
                id: user.id,
                name: user.name,
            })
            .collect()
    }
}

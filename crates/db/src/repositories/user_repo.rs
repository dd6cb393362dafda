//! Repository for the `users` table.

use sqlx::SqlitePool;

use inkpost_core::types::DbId;

use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// A duplicate name surfaces as a unique-constraint database error
    /// (`uq_users_name`); classification into an HTTP status is the
    /// caller's concern.
    pub async fn create(pool: &SqlitePool, name: &str) -> Result<User, sqlx::Error> {
        let query = format!("INSERT INTO users (name) VALUES (?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, User>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = ?");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all users in id order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }
}

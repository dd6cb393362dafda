//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use inkpost_core::users;
use inkpost_db::models::user::{CreateUser, UserWithPosts};
use inkpost_db::repositories::{PostRepo, UserRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /users
///
/// Returns every user with its posts nested one level deep. Users and
/// posts are read with one query each and grouped in memory, so the
/// nesting never costs a per-user query.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserWithPosts>>> {
    let all_users = UserRepo::list(&state.pool).await?;
    let all_posts = PostRepo::list(&state.pool).await?;

    Ok(Json(UserWithPosts::group(all_users, all_posts)))
}

/// POST /users
///
/// Creates a user. A missing or empty `name` is rejected with 400
/// before touching the database; a duplicate `name` surfaces as a
/// unique-constraint error and maps to 409.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<UserWithPosts>)> {
    let name = users::validate_name(input.name.as_deref())?;

    let user = UserRepo::create(&state.pool, name).await?;

    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(UserWithPosts::without_posts(user))))
}

//! Route tree.

pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET  /health -> health_check
///
/// GET  /users  -> list (users with nested posts)
/// POST /users  -> create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/users", users::router())
}

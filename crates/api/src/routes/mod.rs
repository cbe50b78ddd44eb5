pub mod health;
pub mod todo;
pub mod welcome;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                 welcome message
/// /todos            list, create
/// /todos/{id}       get, patch, delete
/// ```
///
/// `/health` is mounted separately by the router builder.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(welcome::router())
        .merge(todo::router())
}

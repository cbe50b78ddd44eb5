use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Greeting returned from the root path.
pub const WELCOME_MESSAGE: &str = "Welcome to the Todo API!";

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET / -- static greeting.
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}

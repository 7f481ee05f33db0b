//! Contains all the routes that this application can handle.

mod api;
mod home;

use crate::AppState;
use home::{health_check, home};

use axum::{
    routing::{get, post},
    Router,
};

/// All the routes of the server
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .nest("/api", api_routes(app_state))
}

/// API - Routes nested under "/api" path
fn api_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/waitlist", post(api::join_waitlist))
        .route("/waitlist/count", get(api::waitlist_count))
        .with_state(app_state)
}

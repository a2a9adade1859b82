pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pipeline::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/applications", post(handlers::handle_generate))
        .route(
            "/api/v1/applications/refine",
            post(handlers::handle_refine),
        )
        .with_state(state)
}

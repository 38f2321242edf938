use axum::{
    routing::{get, post},
    Router,
};

use crate::api;

/// All application routes.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/generate-readme",
            post(api::handlers::generate::generate_readme),
        )
}

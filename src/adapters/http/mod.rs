//! HTTP adapters - REST API implementations.
//!
//! `api_router` assembles the full application: bearer authentication for
//! every `/api` route and an unauthenticated `/health` probe.

pub mod activity;
pub mod error;
pub mod middleware;

use axum::{middleware::from_fn_with_state, routing::get, Json, Router};

pub use activity::{activity_routes, ActivityAppState};
pub use error::{ActivityApiError, ErrorResponse};
pub use middleware::{auth_middleware, AuthState, RequireAuth};

/// Builds the application router.
pub fn api_router(state: ActivityAppState, auth: AuthState) -> Router {
    let api = activity_routes()
        .layer(from_fn_with_state(auth, auth_middleware))
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
}

/// GET /health - Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

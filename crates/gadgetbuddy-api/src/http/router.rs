//! Axum router configuration with middleware.
//!
//! Scoring and command routes are under `/api/v1/`; the tool server lives at
//! `/mcp`. Middleware: CORS, tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/budget", post(handlers::scoring::budget))
        .route("/tierlist", post(handlers::scoring::tierlist))
        .route("/commands/{name}", post(handlers::commands::run_command));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/mcp", post(handlers::tools::call_tool))
        .route("/mcp/tools", get(handlers::tools::list_tools))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness check (no auth required).
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

//! HTTP router.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{db::DbPool, handlers};

/// Build the application router with every route and middleware attached.
pub fn build_router(pool: DbPool) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/seed", get(handlers::seed::seed))
        .route("/seed/status", get(handlers::seed::seed_status))
        .layer(TraceLayer::new_for_http())
        // Share database pool with all handlers via State extraction
        .with_state(pool)
}

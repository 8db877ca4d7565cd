//! Route definitions
//!
//! Review routes plus the health probes.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{health, reviews};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(review_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Review routes
///
/// Every dynamic segment is named `id` so the product and review routes can
/// share the `/reviews/:id` prefix.
fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/reviews", post(reviews::create_review))
        .route("/reviews/:id/list", get(reviews::list_reviews))
        .route("/reviews/:id/meta", get(reviews::get_review_meta))
        .route("/reviews/:id/helpful", put(reviews::mark_helpful))
        .route("/reviews/report/:id", put(reviews::report_review))
}

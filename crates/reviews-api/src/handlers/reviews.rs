//! Review handlers
//!
//! Endpoints for listing, aggregating, creating and flagging reviews.

use axum::{
    extract::{Path, State},
    Json,
};
use reviews_service::{CreateReviewRequest, ReviewListResponse, ReviewMetaResponse, ReviewService};

use crate::extractors::{JsonBody, ProductIdPath, ReviewIdPath, ReviewPage};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List a product's reviews with their photos
///
/// GET /reviews/{product_id}/list?count&page
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(path): Path<ProductIdPath>,
    page: ReviewPage,
) -> ApiResult<Json<ReviewListResponse>> {
    let product_id = path.product_id()?;

    let service = ReviewService::new(state.service_context());
    let results = service.list_reviews(product_id, page.query()).await?;

    Ok(Json(ReviewListResponse {
        product: path.raw().to_string(),
        page: page.page,
        count: page.count,
        results,
    }))
}

/// Aggregate ratings, recommendations and characteristics for a product
///
/// GET /reviews/{product_id}/meta
pub async fn get_review_meta(
    State(state): State<AppState>,
    Path(path): Path<ProductIdPath>,
) -> ApiResult<Json<ReviewMetaResponse>> {
    let product_id = path.product_id()?;

    let service = ReviewService::new(state.service_context());
    let meta = service.get_meta(product_id).await?;
    Ok(Json(meta))
}

/// Submit a review with optional photos and characteristic ratings
///
/// POST /reviews
pub async fn create_review(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateReviewRequest>,
) -> ApiResult<Created<&'static str>> {
    let service = ReviewService::new(state.service_context());
    service.create_review(request).await?;
    Ok(Created("CREATED"))
}

/// Mark a review as helpful
///
/// PUT /reviews/{review_id}/helpful
pub async fn mark_helpful(
    State(state): State<AppState>,
    Path(path): Path<ReviewIdPath>,
) -> ApiResult<NoContent> {
    let review_id = path.review_id()?;

    let service = ReviewService::new(state.service_context());
    service.mark_helpful(review_id).await?;
    Ok(NoContent)
}

/// Report a review
///
/// PUT /reviews/report/{review_id}
pub async fn report_review(
    State(state): State<AppState>,
    Path(path): Path<ReviewIdPath>,
) -> ApiResult<NoContent> {
    let review_id = path.review_id()?;

    let service = ReviewService::new(state.service_context());
    service.report(review_id).await?;
    Ok(NoContent)
}

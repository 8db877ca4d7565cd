//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Identifiers are
//! plain JSON integers.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use reviews_core::entities::{CharacteristicAverage, RatingCount, RecommendCount};
use reviews_core::value_objects::{CharacteristicId, ProductId, ReviewId};
use serde::Serialize;

// ============================================================================
// Review Responses
// ============================================================================

/// Photo attached to a review
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoResponse {
    pub id: i32,
    pub review_id: ReviewId,
    pub url: String,
}

/// Review with its photos
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub review_id: ReviewId,
    pub product_id: ProductId,
    pub rating: i32,
    pub date: DateTime<Utc>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub recommend: bool,
    pub reported: bool,
    pub reviewer_name: Option<String>,
    pub reviewer_email: Option<String>,
    pub response: Option<String>,
    pub helpfulness: i32,
    pub photos: Vec<PhotoResponse>,
}

/// One page of a product's reviews
#[derive(Debug, Clone, Serialize)]
pub struct ReviewListResponse {
    /// Product identifier exactly as it appeared in the request path
    pub product: String,
    pub page: i64,
    pub count: i64,
    pub results: Vec<ReviewResponse>,
}

// ============================================================================
// Metadata Responses
// ============================================================================

/// Average rating of one characteristic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacteristicMetaResponse {
    pub id: CharacteristicId,
    pub value: f64,
}

/// Aggregate statistics over a product's reviews
#[derive(Debug, Clone, Serialize)]
pub struct ReviewMetaResponse {
    pub product_id: ProductId,
    /// Star rating to number of reviews
    pub ratings: BTreeMap<i32, i64>,
    /// `0` (not recommended) / `1` (recommended) to number of reviews
    pub recommended: BTreeMap<u8, i64>,
    /// Characteristic name to id and mean value
    pub characteristic: BTreeMap<String, CharacteristicMetaResponse>,
}

impl ReviewMetaResponse {
    /// Fold the three aggregate query results into one response.
    ///
    /// Characteristics sharing a name collapse onto the last row seen.
    pub fn fold(
        product_id: ProductId,
        ratings: &[RatingCount],
        recommended: &[RecommendCount],
        averages: Vec<CharacteristicAverage>,
    ) -> Self {
        let ratings = ratings.iter().map(|r| (r.rating, r.count)).collect();
        let recommended = recommended
            .iter()
            .map(|r| (u8::from(r.recommend), r.count))
            .collect();
        let characteristic = averages
            .into_iter()
            .map(|c| {
                (
                    c.name,
                    CharacteristicMetaResponse {
                        id: c.characteristic_id,
                        value: c.average,
                    },
                )
            })
            .collect();

        Self {
            product_id,
            ratings,
            recommended,
            characteristic,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

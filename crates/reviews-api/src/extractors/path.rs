//! Path parameter extractors
//!
//! Path segments are captured as text and parsed into typed ids on demand,
//! so the raw segment stays available for echoing back.

use reviews_core::value_objects::{ProductId, ReviewId};
use serde::Deserialize;

use crate::response::ApiError;

/// Path parameters with a product id
#[derive(Debug, Deserialize)]
pub struct ProductIdPath {
    pub id: String,
}

impl ProductIdPath {
    /// Parse id as ProductId
    pub fn product_id(&self) -> Result<ProductId, ApiError> {
        self.id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid product_id format"))
    }

    /// The segment exactly as requested
    pub fn raw(&self) -> &str {
        &self.id
    }
}

/// Path parameters with a review id
#[derive(Debug, Deserialize)]
pub struct ReviewIdPath {
    pub id: String,
}

impl ReviewIdPath {
    /// Parse id as ReviewId
    pub fn review_id(&self) -> Result<ReviewId, ApiError> {
        self.id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid review_id format"))
    }
}

//! Request DTOs for API endpoints
//!
//! Field values are passed through to storage as given; only the shape of
//! the body is checked here.

use std::collections::BTreeMap;

use reviews_core::entities::NewReview;
use reviews_core::error::DomainError;
use reviews_core::value_objects::{CharacteristicId, ProductId};
use serde::Deserialize;

/// Review submission body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewRequest {
    pub product_id: ProductId,
    pub rating: i32,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    pub recommend: bool,
    /// Reviewer display name
    #[serde(default)]
    pub name: Option<String>,
    /// Reviewer email
    #[serde(default)]
    pub email: Option<String>,
    /// Photo URLs
    #[serde(default)]
    pub photos: Vec<String>,
    /// Characteristic id (as a JSON object key) to rating value
    #[serde(default)]
    pub characteristics: BTreeMap<String, i32>,
}

impl CreateReviewRequest {
    /// Column values for the review row itself
    pub fn new_review(&self) -> NewReview {
        NewReview {
            product_id: self.product_id,
            rating: self.rating,
            summary: self.summary.clone(),
            body: self.body.clone(),
            recommend: self.recommend,
            reviewer_name: self.name.clone(),
            reviewer_email: self.email.clone(),
        }
    }

    /// Parse the characteristics keys into ids, failing on the first non-integer key
    pub fn characteristic_values(&self) -> Result<Vec<(CharacteristicId, i32)>, DomainError> {
        self.characteristics
            .iter()
            .map(|(key, value)| {
                CharacteristicId::parse(key)
                    .map(|id| (id, *value))
                    .map_err(|_| DomainError::InvalidCharacteristicId(key.clone()))
            })
            .collect()
    }
}

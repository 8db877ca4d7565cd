//! Review entity - a customer-submitted evaluation of a product

use chrono::{DateTime, Utc};

use crate::value_objects::{ProductId, ReviewId};

use super::Photo;

/// Review entity
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: ReviewId,
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
}

/// Values supplied by a caller when submitting a review.
///
/// `id`, `date`, `reported`, `response` and `helpfulness` are left to the
/// column defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub product_id: ProductId,
    pub rating: i32,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub recommend: bool,
    pub reviewer_name: Option<String>,
    pub reviewer_email: Option<String>,
}

/// A review together with its photos, as returned by listings
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewWithPhotos {
    pub review: Review,
    pub photos: Vec<Photo>,
}

impl ReviewWithPhotos {
    /// Attach the photos belonging to `review` out of a mixed batch
    pub fn collect(review: Review, photos: &[Photo]) -> Self {
        let photos = photos
            .iter()
            .filter(|p| p.review_id == review.id)
            .cloned()
            .collect();
        Self { review, photos }
    }
}

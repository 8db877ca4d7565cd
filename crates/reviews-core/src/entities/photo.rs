//! Photo entity - an image URL attached to a review

use crate::value_objects::ReviewId;

/// Photo entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: i32,
    pub review_id: ReviewId,
    pub url: String,
}

impl Photo {
    /// Create a Photo from stored values
    pub fn new(id: i32, review_id: ReviewId, url: impl Into<String>) -> Self {
        Self {
            id,
            review_id,
            url: url.into(),
        }
    }
}

/// Photo to be inserted for a freshly created review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPhoto {
    pub review_id: ReviewId,
    pub url: String,
}

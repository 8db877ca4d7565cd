//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Associations between reviews, photos and
//! characteristic ratings are expressed as explicit foreign-key lookups.

use async_trait::async_trait;

use crate::entities::{
    CharacteristicAverage, CharacteristicRating, NewCharacteristicRating, NewPhoto, NewReview,
    Photo, RatingCount, RecommendCount, Review,
};
use crate::error::DomainError;
use crate::value_objects::{ProductId, ReviewId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Review Repository
// ============================================================================

/// Offset/limit window for review listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewQuery {
    pub limit: i64,
    pub offset: i64,
}

impl ReviewQuery {
    /// Build the window for a 1-based page of `count` items
    pub fn page(page: i64, count: i64) -> Self {
        Self {
            limit: count,
            offset: (page - 1).saturating_mul(count),
        }
    }
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find review by ID
    async fn find_by_id(&self, id: ReviewId) -> RepoResult<Option<Review>>;

    /// List reviews of a product, ordered by id
    async fn find_by_product(&self, product_id: ProductId, query: ReviewQuery)
        -> RepoResult<Vec<Review>>;

    /// Insert a review and return its generated id
    async fn create(&self, review: &NewReview) -> RepoResult<ReviewId>;

    /// Add one to the helpfulness counter; returns rows touched
    async fn increment_helpfulness(&self, id: ReviewId) -> RepoResult<u64>;

    /// Flag a review as reported; returns rows touched
    async fn mark_reported(&self, id: ReviewId) -> RepoResult<u64>;
}

// ============================================================================
// Photo Repository
// ============================================================================

#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// Photos belonging to any of the given reviews
    async fn find_by_reviews(&self, review_ids: &[ReviewId]) -> RepoResult<Vec<Photo>>;

    /// Insert a photo and return its generated id
    async fn create(&self, photo: &NewPhoto) -> RepoResult<i32>;
}

// ============================================================================
// Characteristic Rating Repository
// ============================================================================

#[async_trait]
pub trait CharacteristicRatingRepository: Send + Sync {
    /// Ratings recorded for one review
    async fn find_by_review(&self, review_id: ReviewId) -> RepoResult<Vec<CharacteristicRating>>;

    /// Insert a characteristic rating and return its generated id
    async fn create(&self, rating: &NewCharacteristicRating) -> RepoResult<i32>;
}

// ============================================================================
// Review Metadata Repository
// ============================================================================

#[async_trait]
pub trait ReviewMetaRepository: Send + Sync {
    /// Review count per star rating
    async fn rating_counts(&self, product_id: ProductId) -> RepoResult<Vec<RatingCount>>;

    /// Review count per recommend flag
    async fn recommend_counts(&self, product_id: ProductId) -> RepoResult<Vec<RecommendCount>>;

    /// Average value per catalog characteristic, ordered by id then name
    async fn characteristic_averages(
        &self,
        product_id: ProductId,
    ) -> RepoResult<Vec<CharacteristicAverage>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_query_page() {
        assert_eq!(ReviewQuery::page(1, 5), ReviewQuery { limit: 5, offset: 0 });
        assert_eq!(ReviewQuery::page(3, 10), ReviewQuery { limit: 10, offset: 20 });
    }
}

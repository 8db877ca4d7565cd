//! PostgreSQL implementation of CharacteristicRatingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reviews_core::entities::{CharacteristicRating, NewCharacteristicRating};
use reviews_core::traits::{CharacteristicRatingRepository, RepoResult};
use reviews_core::value_objects::ReviewId;

use crate::models::CharacteristicReviewModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CharacteristicRatingRepository
#[derive(Clone)]
pub struct PgCharacteristicRatingRepository {
    pool: PgPool,
}

impl PgCharacteristicRatingRepository {
    /// Create a new PgCharacteristicRatingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacteristicRatingRepository for PgCharacteristicRatingRepository {
    #[instrument(skip(self))]
    async fn find_by_review(&self, review_id: ReviewId) -> RepoResult<Vec<CharacteristicRating>> {
        let results = sqlx::query_as::<_, CharacteristicReviewModel>(
            r#"
            SELECT id, characteristic_id, review_id, value
            FROM characteristic_reviews
            WHERE review_id = $1
            ORDER BY characteristic_id
            "#,
        )
        .bind(review_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CharacteristicRating::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, rating: &NewCharacteristicRating) -> RepoResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO characteristic_reviews (characteristic_id, review_id, value)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(rating.characteristic_id.into_inner())
        .bind(rating.review_id.into_inner())
        .bind(rating.value)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCharacteristicRatingRepository>();
    }
}

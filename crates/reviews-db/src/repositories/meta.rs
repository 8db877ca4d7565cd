//! PostgreSQL implementation of ReviewMetaRepository
//!
//! Each aggregate is its own query; callers combine them.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reviews_core::entities::{CharacteristicAverage, RatingCount, RecommendCount};
use reviews_core::traits::{RepoResult, ReviewMetaRepository};
use reviews_core::value_objects::ProductId;

use crate::models::{CharacteristicAverageModel, RatingCountModel, RecommendCountModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ReviewMetaRepository
#[derive(Clone)]
pub struct PgReviewMetaRepository {
    pool: PgPool,
}

impl PgReviewMetaRepository {
    /// Create a new PgReviewMetaRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewMetaRepository for PgReviewMetaRepository {
    #[instrument(skip(self))]
    async fn rating_counts(&self, product_id: ProductId) -> RepoResult<Vec<RatingCount>> {
        let results = sqlx::query_as::<_, RatingCountModel>(
            r#"
            SELECT rating, COUNT(rating) AS count
            FROM review
            WHERE product_id = $1
            GROUP BY rating
            ORDER BY rating
            "#,
        )
        .bind(product_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(RatingCount::from).collect())
    }

    #[instrument(skip(self))]
    async fn recommend_counts(&self, product_id: ProductId) -> RepoResult<Vec<RecommendCount>> {
        let results = sqlx::query_as::<_, RecommendCountModel>(
            r#"
            SELECT recommend, COUNT(recommend) AS count
            FROM review
            WHERE product_id = $1
            GROUP BY recommend
            ORDER BY recommend
            "#,
        )
        .bind(product_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(RecommendCount::from).collect())
    }

    #[instrument(skip(self))]
    async fn characteristic_averages(
        &self,
        product_id: ProductId,
    ) -> RepoResult<Vec<CharacteristicAverage>> {
        let results = sqlx::query_as::<_, CharacteristicAverageModel>(
            r#"
            SELECT cr.characteristic_id,
                   c.name,
                   COUNT(1) AS count,
                   AVG(cr.value)::float8 AS average
            FROM review r
            INNER JOIN characteristic_reviews cr ON r.id = cr.review_id
            INNER JOIN characteristics c ON c.id = cr.characteristic_id
            WHERE r.product_id = $1
              AND c.product_id = r.product_id
            GROUP BY cr.characteristic_id, c.name
            ORDER BY cr.characteristic_id, c.name
            "#,
        )
        .bind(product_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CharacteristicAverage::from).collect())
    }
}

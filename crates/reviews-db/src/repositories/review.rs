//! PostgreSQL implementation of ReviewRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reviews_core::entities::{NewReview, Review};
use reviews_core::traits::{RepoResult, ReviewQuery, ReviewRepository};
use reviews_core::value_objects::{ProductId, ReviewId};

use crate::models::ReviewModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReviewRepository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    /// Create a new PgReviewRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ReviewId) -> RepoResult<Option<Review>> {
        let result = sqlx::query_as::<_, ReviewModel>(
            r#"
            SELECT id, product_id, rating, date, summary, body, recommend, reported,
                   reviewer_name, reviewer_email, response, helpfulness
            FROM review
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Review::from))
    }

    #[instrument(skip(self))]
    async fn find_by_product(
        &self,
        product_id: ProductId,
        query: ReviewQuery,
    ) -> RepoResult<Vec<Review>> {
        let results = sqlx::query_as::<_, ReviewModel>(
            r#"
            SELECT id, product_id, rating, date, summary, body, recommend, reported,
                   reviewer_name, reviewer_email, response, helpfulness
            FROM review
            WHERE product_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(product_id.into_inner())
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Review::from).collect())
    }

    #[instrument(skip(self, review), fields(product_id = %review.product_id))]
    async fn create(&self, review: &NewReview) -> RepoResult<ReviewId> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO review (product_id, rating, summary, body, recommend, reviewer_name, reviewer_email)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(review.product_id.into_inner())
        .bind(review.rating)
        .bind(&review.summary)
        .bind(&review.body)
        .bind(review.recommend)
        .bind(&review.reviewer_name)
        .bind(&review.reviewer_email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ReviewId::new(id))
    }

    #[instrument(skip(self))]
    async fn increment_helpfulness(&self, id: ReviewId) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE review SET helpfulness = helpfulness + 1 WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn mark_reported(&self, id: ReviewId) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE review SET reported = TRUE WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

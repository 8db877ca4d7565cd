//! PostgreSQL implementation of PhotoRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reviews_core::entities::{NewPhoto, Photo};
use reviews_core::traits::{PhotoRepository, RepoResult};
use reviews_core::value_objects::ReviewId;

use crate::models::PhotoModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PhotoRepository
#[derive(Clone)]
pub struct PgPhotoRepository {
    pool: PgPool,
}

impl PgPhotoRepository {
    /// Create a new PgPhotoRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoRepository for PgPhotoRepository {
    #[instrument(skip(self), fields(reviews = review_ids.len()))]
    async fn find_by_reviews(&self, review_ids: &[ReviewId]) -> RepoResult<Vec<Photo>> {
        if review_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = review_ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, PhotoModel>(
            r#"
            SELECT id, review_id, url
            FROM reviews_photos
            WHERE review_id = ANY($1)
            ORDER BY review_id, id
            "#,
        )
        .bind(&ids[..])
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Photo::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, photo: &NewPhoto) -> RepoResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO reviews_photos (review_id, url)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(photo.review_id.into_inner())
        .bind(&photo.url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

//! Service context - dependency container for services
//!
//! Holds the connection pool and the repositories used by the review services.

use std::sync::Arc;

use reviews_core::traits::{
    CharacteristicRatingRepository, PhotoRepository, ReviewMetaRepository, ReviewRepository,
};
use reviews_db::{
    PgCharacteristicRatingRepository, PgPhotoRepository, PgPool, PgReviewMetaRepository,
    PgReviewRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Repositories are held behind trait objects so tests can swap in
/// in-memory implementations.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    review_repo: Arc<dyn ReviewRepository>,
    photo_repo: Arc<dyn PhotoRepository>,
    characteristic_repo: Arc<dyn CharacteristicRatingRepository>,
    meta_repo: Arc<dyn ReviewMetaRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        review_repo: Arc<dyn ReviewRepository>,
        photo_repo: Arc<dyn PhotoRepository>,
        characteristic_repo: Arc<dyn CharacteristicRatingRepository>,
        meta_repo: Arc<dyn ReviewMetaRepository>,
    ) -> Self {
        Self {
            pool,
            review_repo,
            photo_repo,
            characteristic_repo,
            meta_repo,
        }
    }

    /// Wire the PostgreSQL repositories onto one pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(PgReviewRepository::new(pool.clone())),
            Arc::new(PgPhotoRepository::new(pool.clone())),
            Arc::new(PgCharacteristicRatingRepository::new(pool.clone())),
            Arc::new(PgReviewMetaRepository::new(pool)),
        )
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the review repository
    pub fn review_repo(&self) -> &dyn ReviewRepository {
        self.review_repo.as_ref()
    }

    /// Get the photo repository
    pub fn photo_repo(&self) -> &dyn PhotoRepository {
        self.photo_repo.as_ref()
    }

    /// Get the characteristic rating repository
    pub fn characteristic_repo(&self) -> &dyn CharacteristicRatingRepository {
        self.characteristic_repo.as_ref()
    }

    /// Get the review metadata repository
    pub fn meta_repo(&self) -> &dyn ReviewMetaRepository {
        self.meta_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    review_repo: Option<Arc<dyn ReviewRepository>>,
    photo_repo: Option<Arc<dyn PhotoRepository>>,
    characteristic_repo: Option<Arc<dyn CharacteristicRatingRepository>>,
    meta_repo: Option<Arc<dyn ReviewMetaRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn review_repo(mut self, repo: Arc<dyn ReviewRepository>) -> Self {
        self.review_repo = Some(repo);
        self
    }

    pub fn photo_repo(mut self, repo: Arc<dyn PhotoRepository>) -> Self {
        self.photo_repo = Some(repo);
        self
    }

    pub fn characteristic_repo(mut self, repo: Arc<dyn CharacteristicRatingRepository>) -> Self {
        self.characteristic_repo = Some(repo);
        self
    }

    pub fn meta_repo(mut self, repo: Arc<dyn ReviewMetaRepository>) -> Self {
        self.meta_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.review_repo
                .ok_or_else(|| ServiceError::validation("review_repo is required"))?,
            self.photo_repo
                .ok_or_else(|| ServiceError::validation("photo_repo is required"))?,
            self.characteristic_repo
                .ok_or_else(|| ServiceError::validation("characteristic_repo is required"))?,
            self.meta_repo
                .ok_or_else(|| ServiceError::validation("meta_repo is required"))?,
        ))
    }
}

//! # reviews-db
//!
//! Database layer implementing the review repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! Tables: `review`, `reviews_photos`, `characteristic_reviews`, and the
//! externally owned `characteristics` catalog.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reviews_db::{create_pool, PgReviewRepository, PoolConfig};
//! use reviews_core::traits::ReviewRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::default()).await?;
//!     let review_repo = PgReviewRepository::new(pool);
//!     review_repo.increment_helpfulness(7.into()).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, ping, PgPool, PoolConfig};
pub use repositories::{
    PgCharacteristicRatingRepository, PgPhotoRepository, PgReviewMetaRepository,
    PgReviewRepository,
};

//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in reviews-core.

mod characteristic;
mod error;
mod meta;
mod photo;
mod review;

pub use characteristic::PgCharacteristicRatingRepository;
pub use meta::PgReviewMetaRepository;
pub use photo::PgPhotoRepository;
pub use review::PgReviewRepository;

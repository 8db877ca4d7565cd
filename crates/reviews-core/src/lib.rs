//! # reviews-core
//!
//! Domain layer containing entities, identifier newtypes, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    CharacteristicAverage, CharacteristicRating, NewCharacteristicRating, NewPhoto, NewReview,
    Photo, RatingCount, RecommendCount, Review, ReviewWithPhotos,
};
pub use error::DomainError;
pub use traits::{
    CharacteristicRatingRepository, PhotoRepository, RepoResult, ReviewMetaRepository,
    ReviewQuery, ReviewRepository,
};
pub use value_objects::{CharacteristicId, IdParseError, ProductId, ReviewId};

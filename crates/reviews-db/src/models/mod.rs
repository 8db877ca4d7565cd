//! Database models - SQLx-compatible structs for PostgreSQL tables

mod characteristic;
mod photo;
mod review;

pub use characteristic::{CharacteristicAverageModel, CharacteristicReviewModel};
pub use photo::PhotoModel;
pub use review::{RatingCountModel, RecommendCountModel, ReviewModel};

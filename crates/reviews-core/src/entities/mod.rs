//! Domain entities - core business objects

mod characteristic;
mod photo;
mod review;

pub use characteristic::{
    CharacteristicAverage, CharacteristicRating, NewCharacteristicRating, RatingCount,
    RecommendCount,
};
pub use photo::{NewPhoto, Photo};
pub use review::{NewReview, Review, ReviewWithPhotos};

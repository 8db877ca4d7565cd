//! Characteristic ratings and the aggregates computed over them

use crate::value_objects::{CharacteristicId, ReviewId};

/// A single review's score for one product characteristic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacteristicRating {
    pub id: i32,
    pub characteristic_id: CharacteristicId,
    pub review_id: ReviewId,
    pub value: i32,
}

/// Characteristic rating to be inserted for a freshly created review
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCharacteristicRating {
    pub characteristic_id: CharacteristicId,
    pub review_id: ReviewId,
    pub value: i32,
}

/// Number of reviews of a product carrying a given star rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingCount {
    pub rating: i32,
    pub count: i64,
}

/// Number of reviews of a product with a given recommend flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendCount {
    pub recommend: bool,
    pub count: i64,
}

/// Mean value of one catalog characteristic across a product's reviews
#[derive(Debug, Clone, PartialEq)]
pub struct CharacteristicAverage {
    pub characteristic_id: CharacteristicId,
    pub name: String,
    pub count: i64,
    pub average: f64,
}

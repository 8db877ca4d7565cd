//! Characteristic rating database models

use sqlx::FromRow;

/// Database model for the characteristic_reviews table
#[derive(Debug, Clone, FromRow)]
pub struct CharacteristicReviewModel {
    pub id: i32,
    pub characteristic_id: i32,
    pub review_id: i32,
    pub value: i32,
}

/// Per-characteristic average joined with the catalog name (from query)
#[derive(Debug, Clone, FromRow)]
pub struct CharacteristicAverageModel {
    pub characteristic_id: i32,
    pub name: String,
    pub count: i64,
    pub average: f64,
}

//! Photo database model

use sqlx::FromRow;

/// Database model for the reviews_photos table
#[derive(Debug, Clone, FromRow)]
pub struct PhotoModel {
    pub id: i32,
    pub review_id: i32,
    pub url: String,
}

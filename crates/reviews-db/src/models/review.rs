//! Review database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the review table
#[derive(Debug, Clone, FromRow)]
pub struct ReviewModel {
    pub id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub date: DateTime<Utc>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub recommend: bool,
    pub reported: bool,
    pub reviewer_name: Option<String>,
    pub reviewer_email: Option<String>,
    pub response: Option<String>,
    pub helpfulness: i32,
}

/// Reviews per star rating (from query)
#[derive(Debug, Clone, FromRow)]
pub struct RatingCountModel {
    pub rating: i32,
    pub count: i64,
}

/// Reviews per recommend flag (from query)
#[derive(Debug, Clone, FromRow)]
pub struct RecommendCountModel {
    pub recommend: bool,
    pub count: i64,
}

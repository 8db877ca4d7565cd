//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Counter for unique product ids
static COUNTER: AtomicI32 = AtomicI32::new(0);

/// A product id no seeded data uses, unique per test
pub fn unique_product_id() -> i32 {
    let base = 2_000_000_000 + (std::process::id() % 100_000) as i32 * 100;
    base + COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Review submission body
#[derive(Debug, Clone, Serialize)]
pub struct CreateReviewRequest {
    pub product_id: i32,
    pub rating: i32,
    pub summary: String,
    pub body: String,
    pub recommend: bool,
    pub name: String,
    pub email: String,
    pub photos: Vec<String>,
    pub characteristics: BTreeMap<String, i32>,
}

impl CreateReviewRequest {
    pub fn new(product_id: i32, rating: i32) -> Self {
        Self {
            product_id,
            rating,
            summary: format!("{rating} star review"),
            body: "Arrived quickly and matches the description".to_string(),
            recommend: rating >= 4,
            name: "integration".to_string(),
            email: "integration@example.com".to_string(),
            photos: Vec::new(),
            characteristics: BTreeMap::new(),
        }
    }

    pub fn with_photos(mut self, urls: &[&str]) -> Self {
        self.photos = urls.iter().map(|u| (*u).to_string()).collect();
        self
    }

    pub fn with_characteristic(mut self, id: i32, value: i32) -> Self {
        self.characteristics.insert(id.to_string(), value);
        self
    }
}

/// Review list page
#[derive(Debug, Deserialize)]
pub struct ReviewListResponse {
    pub product: String,
    pub page: i64,
    pub count: i64,
    pub results: Vec<ReviewResponse>,
}

/// Review as returned by the list endpoint
#[derive(Debug, Deserialize)]
pub struct ReviewResponse {
    pub review_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub date: String,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub recommend: bool,
    pub reported: bool,
    pub reviewer_name: Option<String>,
    pub reviewer_email: Option<String>,
    pub response: Option<String>,
    pub helpfulness: i32,
    pub photos: Vec<PhotoResponse>,
}

/// Photo attached to a review
#[derive(Debug, Deserialize)]
pub struct PhotoResponse {
    pub id: i32,
    pub review_id: i32,
    pub url: String,
}

/// Aggregate metadata
#[derive(Debug, Deserialize)]
pub struct ReviewMetaResponse {
    pub product_id: i32,
    pub ratings: BTreeMap<String, i64>,
    pub recommended: BTreeMap<String, i64>,
    pub characteristic: BTreeMap<String, CharacteristicMeta>,
}

/// Average value of one characteristic
#[derive(Debug, Deserialize)]
pub struct CharacteristicMeta {
    pub id: i32,
    pub value: f64,
}

/// Insert a catalog characteristic for `product_id`
pub async fn seed_characteristic(pool: &PgPool, product_id: i32, name: &str) -> Result<i32> {
    let id = sqlx::query_scalar(
        "INSERT INTO characteristics (product_id, name) VALUES ($1, $2) RETURNING id",
    )
    .bind(product_id)
    .bind(name)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Row counts of the three review tables for one product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRows {
    pub reviews: i64,
    pub photos: i64,
    pub characteristics: i64,
}

/// Count what is stored for `product_id`
pub async fn count_rows(pool: &PgPool, product_id: i32) -> Result<ProductRows> {
    let reviews = sqlx::query_scalar("SELECT COUNT(*) FROM review WHERE product_id = $1")
        .bind(product_id)
        .fetch_one(pool)
        .await?;
    let photos = sqlx::query_scalar(
        "SELECT COUNT(*) FROM reviews_photos p JOIN review r ON r.id = p.review_id WHERE r.product_id = $1",
    )
    .bind(product_id)
    .fetch_one(pool)
    .await?;
    let characteristics = sqlx::query_scalar(
        "SELECT COUNT(*) FROM characteristic_reviews c JOIN review r ON r.id = c.review_id WHERE r.product_id = $1",
    )
    .bind(product_id)
    .fetch_one(pool)
    .await?;

    Ok(ProductRows {
        reviews,
        photos,
        characteristics,
    })
}

/// Remove everything stored for `product_id`
pub async fn cleanup_product(pool: &PgPool, product_id: i32) -> Result<()> {
    for statement in [
        "DELETE FROM reviews_photos WHERE review_id IN (SELECT id FROM review WHERE product_id = $1)",
        "DELETE FROM characteristic_reviews WHERE review_id IN (SELECT id FROM review WHERE product_id = $1)",
        "DELETE FROM review WHERE product_id = $1",
        "DELETE FROM characteristics WHERE product_id = $1",
    ] {
        sqlx::query(statement).bind(product_id).execute(pool).await?;
    }
    Ok(())
}

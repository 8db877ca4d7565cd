//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the `scripts/ddl` schema applied
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, cleanup_product, count_rows, fixtures::*,
    TestServer,
};
use reqwest::StatusCode;

async fn create(server: &TestServer, request: &CreateReviewRequest) {
    let response = server.post("/reviews", request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.text().await.unwrap(), "CREATED");
}

async fn list(server: &TestServer, path: &str) -> ReviewListResponse {
    let response = server.get(path).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_list_defaults_and_pagination() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let product_id = unique_product_id();

    for rating in 1..=5 {
        create(&server, &CreateReviewRequest::new(product_id, rating)).await;
    }
    create(&server, &CreateReviewRequest::new(product_id, 3)).await;
    create(&server, &CreateReviewRequest::new(product_id, 4)).await;

    // Defaults: count=5, page=1
    let page = list(&server, &format!("/reviews/{product_id}/list")).await;
    assert_eq!(page.product, product_id.to_string());
    assert_eq!(page.page, 1);
    assert_eq!(page.count, 5);
    assert_eq!(page.results.len(), 5);
    let ratings: Vec<i32> = page.results.iter().map(|r| r.rating).collect();
    assert_eq!(ratings, vec![1, 2, 3, 4, 5]);

    // Offset = (page - 1) * count
    let page = list(&server, &format!("/reviews/{product_id}/list?count=3&page=2")).await;
    let ratings: Vec<i32> = page.results.iter().map(|r| r.rating).collect();
    assert_eq!(ratings, vec![4, 5, 3]);

    let page = list(&server, &format!("/reviews/{product_id}/list?count=3&page=4")).await;
    assert!(page.results.is_empty());

    // count is the limit as given
    let page = list(&server, &format!("/reviews/{product_id}/list?count=0")).await;
    assert_eq!(page.count, 0);
    assert!(page.results.is_empty());

    let page = list(&server, &format!("/reviews/{product_id}/list?count=250&page=")).await;
    assert_eq!(page.count, 250);
    assert_eq!(page.page, 1);
    assert_eq!(page.results.len(), 7);

    cleanup_product(&server.pool, product_id).await.unwrap();
}

#[tokio::test]
async fn test_list_for_product_without_reviews() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let product_id = unique_product_id();

    let page = list(&server, &format!("/reviews/{product_id}/list")).await;
    assert_eq!(page.product, product_id.to_string());
    assert!(page.results.is_empty());
}

#[tokio::test]
async fn test_list_rejects_malformed_product_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/reviews/not-a-number/list").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Creation Tests
// ============================================================================

#[tokio::test]
async fn test_create_with_photos_and_characteristics() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let product_id = unique_product_id();
    let fit = seed_characteristic(&server.pool, product_id, "Fit").await.unwrap();
    let width = seed_characteristic(&server.pool, product_id, "Width").await.unwrap();

    let request = CreateReviewRequest::new(product_id, 5)
        .with_photos(&["a.jpg", "b.jpg"])
        .with_characteristic(fit, 3)
        .with_characteristic(width, 5);
    create(&server, &request).await;

    let rows = count_rows(&server.pool, product_id).await.unwrap();
    assert_eq!(
        rows,
        ProductRows {
            reviews: 1,
            photos: 2,
            characteristics: 2,
        }
    );

    let page = list(&server, &format!("/reviews/{product_id}/list")).await;
    let review = &page.results[0];
    assert_eq!(review.product_id, product_id);
    assert_eq!(review.reviewer_name.as_deref(), Some("integration"));
    assert_eq!(review.helpfulness, 0);
    assert!(!review.reported);
    let mut urls: Vec<&str> = review.photos.iter().map(|p| p.url.as_str()).collect();
    urls.sort_unstable();
    assert_eq!(urls, vec!["a.jpg", "b.jpg"]);
    assert!(review.photos.iter().all(|p| p.review_id == review.review_id));

    cleanup_product(&server.pool, product_id).await.unwrap();
}

#[tokio::test]
async fn test_create_rejects_non_integer_characteristic() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let product_id = unique_product_id();

    let body = serde_json::json!({
        "product_id": product_id,
        "rating": 4,
        "recommend": true,
        "characteristics": {"fit": 4}
    });
    let response = server.post("/reviews", &body).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let rows = count_rows(&server.pool, product_id).await.unwrap();
    assert_eq!(rows.reviews, 0);
}

// ============================================================================
// Metadata Tests
// ============================================================================

#[tokio::test]
async fn test_meta_aggregates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let product_id = unique_product_id();
    let comfort = seed_characteristic(&server.pool, product_id, "Comfort").await.unwrap();

    for (rating, value) in [(5, 5), (5, 4), (5, 3), (4, 2), (4, 1)] {
        let request = CreateReviewRequest::new(product_id, rating).with_characteristic(comfort, value);
        create(&server, &request).await;
    }

    let response = server.get(&format!("/reviews/{product_id}/meta")).await.unwrap();
    let meta: ReviewMetaResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(meta.product_id, product_id);
    assert_eq!(meta.ratings.get("5"), Some(&3));
    assert_eq!(meta.ratings.get("4"), Some(&2));
    assert_eq!(meta.ratings.len(), 2);
    assert_eq!(meta.recommended.get("1"), Some(&5));
    let comfort_meta = &meta.characteristic["Comfort"];
    assert_eq!(comfort_meta.id, comfort);
    assert!((comfort_meta.value - 3.0).abs() < f64::EPSILON);

    cleanup_product(&server.pool, product_id).await.unwrap();
}

// ============================================================================
// Helpful / Report Tests
// ============================================================================

#[tokio::test]
async fn test_helpful_twice_increments_by_two() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let product_id = unique_product_id();
    create(&server, &CreateReviewRequest::new(product_id, 4)).await;

    let page = list(&server, &format!("/reviews/{product_id}/list")).await;
    let review_id = page.results[0].review_id;
    let before = page.results[0].helpfulness;

    for _ in 0..2 {
        let response = server.put(&format!("/reviews/{review_id}/helpful")).await.unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }

    let page = list(&server, &format!("/reviews/{product_id}/list")).await;
    assert_eq!(page.results[0].helpfulness, before + 2);

    cleanup_product(&server.pool, product_id).await.unwrap();
}

#[tokio::test]
async fn test_report_sets_flag() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let product_id = unique_product_id();
    create(&server, &CreateReviewRequest::new(product_id, 2)).await;

    let page = list(&server, &format!("/reviews/{product_id}/list")).await;
    let review_id = page.results[0].review_id;

    let response = server.put(&format!("/reviews/report/{review_id}")).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let page = list(&server, &format!("/reviews/{product_id}/list")).await;
    assert!(page.results[0].reported);

    cleanup_product(&server.pool, product_id).await.unwrap();
}

#[tokio::test]
async fn test_report_unknown_review_is_no_content() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.put(&format!("/reviews/report/{}", i32::MAX)).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.put(&format!("/reviews/{}/helpful", i32::MAX)).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

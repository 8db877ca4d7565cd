//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use reviews_core::entities::{Photo, ReviewWithPhotos};

use super::responses::{PhotoResponse, ReviewResponse};

impl From<&Photo> for PhotoResponse {
    fn from(photo: &Photo) -> Self {
        Self {
            id: photo.id,
            review_id: photo.review_id,
            url: photo.url.clone(),
        }
    }
}

impl From<ReviewWithPhotos> for ReviewResponse {
    fn from(item: ReviewWithPhotos) -> Self {
        let ReviewWithPhotos { review, photos } = item;
        Self {
            review_id: review.id,
            product_id: review.product_id,
            rating: review.rating,
            date: review.date,
            summary: review.summary,
            body: review.body,
            recommend: review.recommend,
            reported: review.reported,
            reviewer_name: review.reviewer_name,
            reviewer_email: review.reviewer_email,
            response: review.response,
            helpfulness: review.helpfulness,
            photos: photos.iter().map(PhotoResponse::from).collect(),
        }
    }
}

//! # reviews-service
//!
//! Application layer containing the review use cases, service context, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CharacteristicMetaResponse, CreateReviewRequest, HealthChecks, HealthResponse,
    PhotoResponse, ReadinessResponse, ReviewListResponse, ReviewMetaResponse, ReviewResponse,
};
pub use services::{ReviewService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};

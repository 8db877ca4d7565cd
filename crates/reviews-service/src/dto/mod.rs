//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs deserialized from API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::CreateReviewRequest;

pub use responses::{
    CharacteristicMetaResponse, HealthChecks, HealthResponse, PhotoResponse, ReadinessResponse,
    ReviewListResponse, ReviewMetaResponse, ReviewResponse,
};

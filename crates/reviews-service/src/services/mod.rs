//! Business logic services
//!
//! Service layer implementations that orchestrate repository calls for the
//! review endpoints.

pub mod context;
pub mod error;
pub mod review;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use review::ReviewService;

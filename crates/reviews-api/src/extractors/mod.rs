//! Axum extractors for request handling
//!
//! Custom extractors for JSON bodies, pagination, and path ids. All of
//! them reject with `ApiError` so malformed input answers 400.

mod json;
mod pagination;
mod path;

pub use json::JsonBody;
pub use pagination::{PageParams, ReviewPage};
pub use path::{ProductIdPath, ReviewIdPath};

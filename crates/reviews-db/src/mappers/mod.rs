//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions turning database rows into domain objects.

mod characteristic;
mod photo;
mod review;

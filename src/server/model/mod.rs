//! Domain models and operation parameters for the server layer.
//!
//! Repositories convert SeaORM entity models into these types, services operate on them,
//! and controllers convert them into wire DTOs. Parameter types are built from request
//! DTOs and carry input that has already been validated.

pub mod favorite;
pub mod item;
pub mod user;

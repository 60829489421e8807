//! Wire-level DTOs shared by every endpoint.
//!
//! These types define the JSON request and response bodies. Server-side domain models
//! convert into them at the controller boundary.

pub mod api;
pub mod favorite;
pub mod item;
pub mod user;

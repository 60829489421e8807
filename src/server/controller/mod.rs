//! HTTP request handlers.
//!
//! Each handler converts request DTOs into validated parameters, calls one service
//! method and converts the resulting domain model back into a DTO. Handlers carry the
//! `utoipa` annotations the router collects into the OpenAPI document.

pub mod favorite;
pub mod item;
pub mod sitemap;
pub mod user;

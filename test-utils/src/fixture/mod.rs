//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions build in-memory entity models for unit tests and provide the
//! default values used by the factory builders. Unlike factories, fixtures do NOT
//! insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let user = fixture::user::entity();
//!
//! // Create with custom fields
//! let inactive = fixture::user::entity_builder()
//!     .is_active(false)
//!     .build();
//! ```

pub mod item;
pub mod user;

pub use user::{entity as user_entity, entity_builder as user_entity_builder};

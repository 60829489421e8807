//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test rows with sensible defaults,
//! reducing boilerplate in tests. Each table has a `Factory` builder for customization and
//! `create_*` convenience functions for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let luke = factory::create_people(&db).await?;
//!     factory::create_favorite_people(&db, user.id, luke.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user rows
//! - `item` - Create people, planet and starship rows
//! - `favorite` - Create favorite relation rows
//! - `helpers` - Unique id generation and multi-row helpers

pub mod favorite;
pub mod helpers;
pub mod item;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use favorite::{create_favorite_people, create_favorite_planet, create_favorite_starship};
pub use item::{create_people, create_planet, create_starship};
pub use user::create_user;

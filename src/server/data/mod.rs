//! Database repository layer for users, items and favorite relations.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `server::model`. Each repository borrows any `ConnectionTrait`, so a service can run
//! several repositories against the same open transaction.

pub mod favorite;
pub mod item;
pub mod user;

//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Existence checks, uniqueness rules and error translation
//! - **Orchestration**: Coordinating several repositories for one operation
//! - **Transaction Management**: Every mutation runs in one transaction that is
//!   committed at the end or dropped (and rolled back) on the first error

pub mod favorite;
pub mod item;
pub mod user;

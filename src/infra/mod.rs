//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Offer repositories
//! - Specification queries

pub mod db;
pub mod repositories;
pub mod specification;

pub use db::{Database, Migrator};
pub use repositories::{JobOfferStore, OfferRepository, OfferStore, TransportOfferStore};
pub use specification::Specification;

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockOfferRepository;

//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod base;
pub mod entities;
mod offer_repository;

pub use base::{OfferColumn, OfferEntity};
pub use entities::{JobOfferEntity, TransportOfferEntity};
pub use offer_repository::{OfferRepository, OfferStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use offer_repository::MockOfferRepository;

/// Job offer repository backed by SeaORM
pub type JobOfferStore = OfferStore<JobOfferEntity>;

/// Transport offer repository backed by SeaORM
pub type TransportOfferStore = OfferStore<TransportOfferEntity>;

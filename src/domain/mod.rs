//! Domain layer - Core business entities and logic
//!
//! Offer records and their validation rules. Nothing here knows about
//! the database or HTTP.

pub mod job_offer;
pub mod offer;
pub mod transport_offer;
pub mod validation;

pub use job_offer::{JobMode, JobOffer, JobOfferFilter, JobType, Language};
pub use offer::{Location, Offer, OfferBase, OfferKind, UserId};
pub use transport_offer::{TransportOffer, TransportOfferFilter};

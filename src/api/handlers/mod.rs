//! HTTP request handlers.

pub mod job_handler;
pub mod offer_handler;
pub mod transport_handler;

pub use offer_handler::OfferResource;

//! API layer - HTTP handlers and middleware
//!
//! Public offer reads live under `/api`, writes under `/api/secure`
//! behind the bearer token middleware.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;

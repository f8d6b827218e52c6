//! Classifieds API - job and transport offers over REST
//!
//! Users publish offers through `/api/secure/*` with a bearer token and
//! anyone can browse them through `/api/*`. Every offer carries its owner
//! and a server-stamped modification date.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Offer records and validation rules
//! - **services**: Offer use cases and token handling
//! - **infra**: Database, migrations, repositories and query specifications
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Get a token for user 1
//! cargo run -- token 1
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{JobOffer, Offer, TransportOffer, UserId};
pub use errors::{AppError, AppResult};

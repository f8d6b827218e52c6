//! Application configuration module
//!
//! Environment-driven [`Config`] plus the defaults and limits it falls
//! back to.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;

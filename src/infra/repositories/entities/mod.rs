//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod job_offer;
pub mod transport_offer;

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::{AppError, AppResult};

pub use job_offer::Entity as JobOfferEntity;
pub use transport_offer::Entity as TransportOfferEntity;

/// Serialize a set-valued field into its JSON column.
fn encode_json<T: Serialize>(value: &T) -> AppResult<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| AppError::internal(format!("failed to encode column: {}", e)))
}

fn decode_json<T: DeserializeOwned>(value: serde_json::Value) -> AppResult<T> {
    serde_json::from_value(value)
        .map_err(|e| AppError::internal(format!("failed to decode column: {}", e)))
}

/// Parse an enum stored by its string form.
fn parse_stored<T>(raw: &str) -> AppResult<T>
where
    T: std::str::FromStr<Err = String>,
{
    raw.parse().map_err(AppError::internal)
}

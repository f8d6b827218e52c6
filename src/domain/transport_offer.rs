//! Transport offer entity and listing criteria.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::offer::{Location, Offer, OfferBase, OfferKind};

/// Offer of free seats on a trip between two locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransportOffer {
    #[serde(flatten)]
    #[validate(nested)]
    pub base: OfferBase,
    #[validate(nested)]
    pub origin: Location,
    #[validate(nested)]
    pub destination: Location,
    /// Number of passengers that can be taken
    #[validate(range(min = 1, max = 99, message = "Capacity must be between 1 and 99"))]
    #[schema(example = 3, minimum = 1, maximum = 99)]
    pub capacity: i32,
    #[schema(example = "2022-03-10")]
    pub transport_date: NaiveDate,
}

impl Offer for TransportOffer {
    type Filter = TransportOfferFilter;

    const KIND: OfferKind = OfferKind::Transport;

    fn base(&self) -> &OfferBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut OfferBase {
        &mut self.base
    }
}

/// Query parameters narrowing the transport offer list
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TransportOfferFilter {
    pub origin_region: Option<String>,
    pub origin_city: Option<String>,
    pub destination_region: Option<String>,
    pub destination_city: Option<String>,
    /// Minimum number of free seats
    pub capacity: Option<i32>,
    /// Exact day of travel
    pub transport_date: Option<NaiveDate>,
    /// Text searched in title and description
    pub phrase: Option<String>,
}

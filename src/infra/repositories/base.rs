//! Mapping between SeaORM entities and domain offers.
//!
//! Every offer table implements [`OfferEntity`], which lets a single
//! generic store serve all offer types.

use sea_orm::EntityTrait;

use crate::domain::Offer;
use crate::errors::AppResult;

/// Columns present on every offer table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferColumn {
    Id,
    UserId,
    Title,
    Description,
    ModifiedDate,
}

/// SeaORM entity backing an offer type.
pub trait OfferEntity: EntityTrait {
    type Offer: Offer;

    /// Resolve a shared column to this entity's column
    fn column(column: OfferColumn) -> Self::Column;

    fn to_offer(model: Self::Model) -> AppResult<Self::Offer>;

    /// Build an active model; an unset offer id leaves the key to the database.
    fn to_active_model(offer: &Self::Offer) -> AppResult<Self::ActiveModel>;
}

//! Transport offer database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use crate::domain::{Location, OfferBase, TransportOffer, UserId};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{OfferColumn, OfferEntity};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "transport_offers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub modified_date: DateTime,
    pub origin_region: String,
    pub origin_city: String,
    pub destination_region: String,
    pub destination_city: String,
    pub capacity: i32,
    pub transport_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl OfferEntity for Entity {
    type Offer = TransportOffer;

    fn column(column: OfferColumn) -> Column {
        match column {
            OfferColumn::Id => Column::Id,
            OfferColumn::UserId => Column::UserId,
            OfferColumn::Title => Column::Title,
            OfferColumn::Description => Column::Description,
            OfferColumn::ModifiedDate => Column::ModifiedDate,
        }
    }

    fn to_offer(model: Model) -> AppResult<TransportOffer> {
        Ok(TransportOffer {
            base: OfferBase {
                id: Some(model.id),
                user_id: Some(UserId::new(model.user_id)),
                title: model.title,
                description: model.description,
                modified_date: Some(model.modified_date),
            },
            origin: Location::new(model.origin_region, model.origin_city),
            destination: Location::new(model.destination_region, model.destination_city),
            capacity: model.capacity,
            transport_date: model.transport_date,
        })
    }

    fn to_active_model(offer: &TransportOffer) -> AppResult<ActiveModel> {
        let base = &offer.base;
        Ok(ActiveModel {
            id: base.id.map_or(NotSet, Set),
            user_id: Set(base
                .user_id
                .as_ref()
                .ok_or_else(|| AppError::internal("transport offer saved without owner"))?
                .to_string()),
            title: Set(base.title.clone()),
            description: Set(base.description.clone()),
            modified_date: Set(base
                .modified_date
                .ok_or_else(|| AppError::internal("transport offer saved without modified date"))?),
            origin_region: Set(offer.origin.region.clone()),
            origin_city: Set(offer.origin.city.clone()),
            destination_region: Set(offer.destination.region.clone()),
            destination_city: Set(offer.destination.city.clone()),
            capacity: Set(offer.capacity),
            transport_date: Set(offer.transport_date),
        })
    }
}

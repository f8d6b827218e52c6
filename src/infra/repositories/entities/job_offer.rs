//! Job offer database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use super::{decode_json, encode_json, parse_stored};
use crate::domain::{JobOffer, Location, OfferBase, UserId};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{OfferColumn, OfferEntity};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "job_offers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub modified_date: DateTime,
    pub mode: String,
    pub region: String,
    pub city: String,
    /// JSON array of job type names
    pub types: Json,
    /// JSON array of language codes
    pub languages: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl OfferEntity for Entity {
    type Offer = JobOffer;

    fn column(column: OfferColumn) -> Column {
        match column {
            OfferColumn::Id => Column::Id,
            OfferColumn::UserId => Column::UserId,
            OfferColumn::Title => Column::Title,
            OfferColumn::Description => Column::Description,
            OfferColumn::ModifiedDate => Column::ModifiedDate,
        }
    }

    fn to_offer(model: Model) -> AppResult<JobOffer> {
        Ok(JobOffer {
            base: OfferBase {
                id: Some(model.id),
                user_id: Some(UserId::new(model.user_id)),
                title: model.title,
                description: model.description,
                modified_date: Some(model.modified_date),
            },
            mode: parse_stored(&model.mode)?,
            location: Location::new(model.region, model.city),
            types: decode_json(model.types)?,
            languages: decode_json(model.languages)?,
        })
    }

    fn to_active_model(offer: &JobOffer) -> AppResult<ActiveModel> {
        let base = &offer.base;
        Ok(ActiveModel {
            id: base.id.map_or(NotSet, Set),
            user_id: Set(base
                .user_id
                .as_ref()
                .ok_or_else(|| AppError::internal("job offer saved without owner"))?
                .to_string()),
            title: Set(base.title.clone()),
            description: Set(base.description.clone()),
            modified_date: Set(base
                .modified_date
                .ok_or_else(|| AppError::internal("job offer saved without modified date"))?),
            mode: Set(offer.mode.as_str().to_string()),
            region: Set(offer.location.region.clone()),
            city: Set(offer.location.city.clone()),
            types: Set(encode_json(&offer.types)?),
            languages: Set(encode_json(&offer.languages)?),
        })
    }
}

//! Offer repository: paging, sorting and specification queries plus the
//! ownership-scoped lookup, served by one generic SeaORM store.

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, IntoActiveModel, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use super::base::{OfferColumn, OfferEntity};
use crate::domain::{Offer, UserId};
use crate::errors::{AppError, AppResult};
use crate::types::{Page, PageRequest, SortDirection, SortField};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Offer repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OfferRepository<O: Offer>: Send + Sync {
    /// Find offer by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<O>>;

    /// Find offer by ID only if it belongs to the given user
    async fn find_by_id_and_user_id(&self, id: i64, user_id: &UserId) -> AppResult<Option<O>>;

    /// Find one page of offers matching the condition
    async fn find_all(&self, condition: Condition, page: &PageRequest) -> AppResult<Page<O>>;

    /// Insert a new offer; the database assigns the ID
    async fn insert(&self, offer: O) -> AppResult<O>;

    /// Overwrite an existing offer
    async fn update(&self, offer: O) -> AppResult<O>;

    /// Delete offer by ID, returning whether a row was removed
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// SeaORM implementation of [`OfferRepository`] for any offer entity.
pub struct OfferStore<E> {
    db: DatabaseConnection,
    entity: PhantomData<fn() -> E>,
}

impl<E> OfferStore<E> {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }
}

impl<E: OfferEntity> OfferStore<E> {
    fn by_id(id: i64) -> Select<E> {
        E::find().filter(E::column(OfferColumn::Id).eq(id))
    }
}

#[async_trait]
impl<E> OfferRepository<E::Offer> for OfferStore<E>
where
    E: OfferEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: Send,
{
    async fn find_by_id(&self, id: i64) -> AppResult<Option<E::Offer>> {
        Self::by_id(id)
            .one(&self.db)
            .await?
            .map(E::to_offer)
            .transpose()
    }

    async fn find_by_id_and_user_id(
        &self,
        id: i64,
        user_id: &UserId,
    ) -> AppResult<Option<E::Offer>> {
        Self::by_id(id)
            .filter(E::column(OfferColumn::UserId).eq(user_id.as_str()))
            .one(&self.db)
            .await?
            .map(E::to_offer)
            .transpose()
    }

    async fn find_all(
        &self,
        condition: Condition,
        page: &PageRequest,
    ) -> AppResult<Page<E::Offer>> {
        let sort = page.sort()?;
        let offset = page.offset()?;
        let column = match sort.field {
            SortField::Id => OfferColumn::Id,
            SortField::Title => OfferColumn::Title,
            SortField::ModifiedDate => OfferColumn::ModifiedDate,
        };
        let order = match sort.direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };

        let mut query = E::find()
            .filter(condition)
            .order_by(E::column(column), order);
        // stable order across pages
        if column != OfferColumn::Id {
            query = query.order_by_asc(E::column(OfferColumn::Id));
        }

        let total = query.clone().count(&self.db).await?;
        let models = query
            .limit(page.limit())
            .offset(offset)
            .all(&self.db)
            .await?;

        let offers = models
            .into_iter()
            .map(E::to_offer)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Page::new(offers, page, total))
    }

    async fn insert(&self, offer: E::Offer) -> AppResult<E::Offer> {
        let model = E::to_active_model(&offer)?.insert(&self.db).await?;
        tracing::debug!(kind = %<E::Offer as Offer>::KIND, "Inserted offer");
        E::to_offer(model)
    }

    async fn update(&self, offer: E::Offer) -> AppResult<E::Offer> {
        if offer.id().is_none() {
            return Err(AppError::internal("cannot update an offer without id"));
        }

        let model = E::to_active_model(&offer)?
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => AppError::NotFound,
                other => AppError::from(other),
            })?;

        E::to_offer(model)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = E::delete_many()
            .filter(E::column(OfferColumn::Id).eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

//! Offer service - Handles offer-related business logic.
//!
//! Owner and modification date are always assigned here, never taken from
//! the client.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDateTime, SubsecRound};
use mockable::Clock;

use crate::domain::{Offer, UserId};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{OfferRepository, Specification};
use crate::types::{Page, PageRequest};

/// Offer service trait for dependency injection.
#[async_trait]
pub trait OfferService<O: Offer>: Send + Sync {
    /// Publish a new offer owned by `owner`
    async fn create(&self, owner: &UserId, offer: O) -> AppResult<O>;

    /// Get offer by ID
    async fn get(&self, id: i64) -> AppResult<O>;

    /// List one page of offers matching the filter
    async fn list(&self, filter: O::Filter, page: PageRequest) -> AppResult<Page<O>>;

    /// Replace an offer; only its owner may do so
    async fn update(&self, owner: &UserId, id: i64, offer: O) -> AppResult<O>;

    /// Remove an offer; only its owner may do so
    async fn delete(&self, owner: &UserId, id: i64) -> AppResult<()>;
}

/// Concrete implementation of OfferService over a repository.
pub struct OfferManager<O: Offer> {
    repo: Arc<dyn OfferRepository<O>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl<O: Offer> OfferManager<O> {
    /// Create new offer service instance
    pub fn new(repo: Arc<dyn OfferRepository<O>>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { repo, clock }
    }

    /// Current audit timestamp, whole seconds in UTC
    fn now(&self) -> NaiveDateTime {
        self.clock.utc().naive_utc().trunc_subsecs(0)
    }

    fn stamp(&self, offer: &mut O, id: Option<i64>, owner: &UserId) {
        let base = offer.base_mut();
        base.id = id;
        base.user_id = Some(owner.clone());
        base.modified_date = Some(self.now());
    }
}

#[async_trait]
impl<O> OfferService<O> for OfferManager<O>
where
    O: Offer,
    O::Filter: Specification,
{
    async fn create(&self, owner: &UserId, mut offer: O) -> AppResult<O> {
        if let Some(supplied) = offer.id() {
            tracing::debug!(supplied, "Ignoring client-supplied offer id");
        }
        self.stamp(&mut offer, None, owner);

        let created = self.repo.insert(offer).await?;
        tracing::info!(kind = %O::KIND, id = ?created.id(), owner = %owner, "Offer created");
        Ok(created)
    }

    async fn get(&self, id: i64) -> AppResult<O> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list(&self, filter: O::Filter, page: PageRequest) -> AppResult<Page<O>> {
        tracing::debug!(kind = %O::KIND, ?filter, ?page, "Listing offers");
        self.repo.find_all(filter.to_condition(), &page).await
    }

    async fn update(&self, owner: &UserId, id: i64, mut offer: O) -> AppResult<O> {
        self.repo
            .find_by_id_and_user_id(id, owner)
            .await?
            .ok_or_not_found()?;

        self.stamp(&mut offer, Some(id), owner);
        let updated = self.repo.update(offer).await?;
        tracing::info!(kind = %O::KIND, id, owner = %owner, "Offer updated");
        Ok(updated)
    }

    async fn delete(&self, owner: &UserId, id: i64) -> AppResult<()> {
        self.repo
            .find_by_id_and_user_id(id, owner)
            .await?
            .ok_or_not_found()?;

        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound);
        }
        tracing::info!(kind = %O::KIND, id, owner = %owner, "Offer deleted");
        Ok(())
    }
}

//! Handlers shared by every offer resource.
//!
//! Each offer type exposes thin, documented wrappers around these.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    Extension,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{JobOffer, Offer, TransportOffer};
use crate::errors::AppResult;
use crate::services::OfferService;
use crate::types::{Page, PageRequest};

/// An offer type served over HTTP.
pub trait OfferResource: Offer {
    /// Pick this type's service out of the application state
    fn service(state: &AppState) -> Arc<dyn OfferService<Self>>;
}

impl OfferResource for JobOffer {
    fn service(state: &AppState) -> Arc<dyn OfferService<Self>> {
        state.job_service.clone()
    }
}

impl OfferResource for TransportOffer {
    fn service(state: &AppState) -> Arc<dyn OfferService<Self>> {
        state.transport_service.clone()
    }
}

pub async fn create<O: OfferResource>(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(offer): ValidatedJson<O>,
) -> AppResult<(StatusCode, Json<O>)> {
    let created = O::service(&state).create(&current_user.id, offer).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list<O: OfferResource>(
    State(state): State<AppState>,
    Query(filter): Query<O::Filter>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Page<O>>> {
    let page = O::service(&state).list(filter, page).await?;
    Ok(Json(page))
}

pub async fn get<O: OfferResource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<O>> {
    Ok(Json(O::service(&state).get(id).await?))
}

pub async fn update<O: OfferResource>(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    ValidatedJson(offer): ValidatedJson<O>,
) -> AppResult<Json<O>> {
    let updated = O::service(&state)
        .update(&current_user.id, id, offer)
        .await?;
    Ok(Json(updated))
}

pub async fn delete<O: OfferResource>(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    O::service(&state).delete(&current_user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

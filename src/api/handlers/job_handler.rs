//! Job offer handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Extension, Router,
};

use super::offer_handler;
use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{JobOffer, JobOfferFilter};
use crate::errors::AppResult;
use crate::types::{Page, PageRequest};

/// Routes readable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(list_job_offers))
        .route("/jobs/:id", get(get_job_offer))
}

/// Routes that require a bearer token
pub fn secure_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", post(create_job_offer))
        .route(
            "/jobs/:id",
            put(update_job_offer).delete(delete_job_offer),
        )
}

/// Publish a job offer
#[utoipa::path(
    post,
    path = "/api/secure/jobs",
    tag = "Jobs",
    request_body = JobOffer,
    responses(
        (status = 201, description = "Offer created", body = JobOffer),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_job_offer(
    state: State<AppState>,
    current_user: Extension<CurrentUser>,
    offer: ValidatedJson<JobOffer>,
) -> AppResult<(StatusCode, Json<JobOffer>)> {
    offer_handler::create(state, current_user, offer).await
}

/// List job offers
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = "Jobs",
    params(JobOfferFilter, PageRequest),
    responses(
        (status = 200, description = "One page of job offers", body = JobOfferPage),
        (status = 400, description = "Invalid sort parameter")
    )
)]
pub async fn list_job_offers(
    state: State<AppState>,
    filter: Query<JobOfferFilter>,
    page: Query<PageRequest>,
) -> AppResult<Json<Page<JobOffer>>> {
    offer_handler::list::<JobOffer>(state, filter, page).await
}

/// Get a job offer by ID
#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    tag = "Jobs",
    params(("id" = i64, Path, description = "Offer ID")),
    responses(
        (status = 200, description = "Offer found", body = JobOffer),
        (status = 404, description = "Offer not found")
    )
)]
pub async fn get_job_offer(state: State<AppState>, id: Path<i64>) -> AppResult<Json<JobOffer>> {
    offer_handler::get(state, id).await
}

/// Replace one of the caller's job offers
#[utoipa::path(
    put,
    path = "/api/secure/jobs/{id}",
    tag = "Jobs",
    params(("id" = i64, Path, description = "Offer ID")),
    request_body = JobOffer,
    responses(
        (status = 200, description = "Offer updated", body = JobOffer),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Offer not found or not owned by caller")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_job_offer(
    state: State<AppState>,
    current_user: Extension<CurrentUser>,
    id: Path<i64>,
    offer: ValidatedJson<JobOffer>,
) -> AppResult<Json<JobOffer>> {
    offer_handler::update(state, current_user, id, offer).await
}

/// Delete one of the caller's job offers
#[utoipa::path(
    delete,
    path = "/api/secure/jobs/{id}",
    tag = "Jobs",
    params(("id" = i64, Path, description = "Offer ID")),
    responses(
        (status = 204, description = "Offer deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Offer not found or not owned by caller")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_job_offer(
    state: State<AppState>,
    current_user: Extension<CurrentUser>,
    id: Path<i64>,
) -> AppResult<StatusCode> {
    offer_handler::delete::<JobOffer>(state, current_user, id).await
}

//! Transport offer handlers.
//!
//! Rides between two locations on a given day.

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
use crate::domain::{TransportOffer, TransportOfferFilter};
use crate::errors::AppResult;
use crate::types::{Page, PageRequest};

/// Routes readable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/transport", get(list_transport_offers))
        .route("/transport/:id", get(get_transport_offer))
}

/// Routes that require a bearer token
pub fn secure_routes() -> Router<AppState> {
    Router::new()
        .route("/transport", post(create_transport_offer))
        .route("/transport/:id", put(update_transport_offer).delete(delete_transport_offer))
}

/// Publish a transport offer
#[utoipa::path(
    post,
    path = "/api/secure/transport",
    tag = "Transport",
    request_body = TransportOffer,
    responses(
        (status = 201, description = "Offer created", body = TransportOffer),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_transport_offer(
    state: State<AppState>,
    current_user: Extension<CurrentUser>,
    offer: ValidatedJson<TransportOffer>,
) -> AppResult<(StatusCode, Json<TransportOffer>)> {
    offer_handler::create(state, current_user, offer).await
}

/// List transport offers
#[utoipa::path(
    get,
    path = "/api/transport",
    tag = "Transport",
    params(TransportOfferFilter, PageRequest),
    responses(
        (status = 200, description = "One page of transport offers", body = TransportOfferPage),
        (status = 400, description = "Invalid sort parameter")
    )
)]
pub async fn list_transport_offers(
    state: State<AppState>,
    filter: Query<TransportOfferFilter>,
    page: Query<PageRequest>,
) -> AppResult<Json<Page<TransportOffer>>> {
    offer_handler::list::<TransportOffer>(state, filter, page).await
}

/// Get a transport offer by ID
#[utoipa::path(
    get,
    path = "/api/transport/{id}",
    tag = "Transport",
    params(("id" = i64, Path, description = "Offer ID")),
    responses(
        (status = 200, description = "Offer found", body = TransportOffer),
        (status = 404, description = "Offer not found")
    )
)]
pub async fn get_transport_offer(state: State<AppState>, id: Path<i64>) -> AppResult<Json<TransportOffer>> {
    offer_handler::get(state, id).await
}

/// Replace one of the caller's transport offers
#[utoipa::path(
    put,
    path = "/api/secure/transport/{id}",
    tag = "Transport",
    params(("id" = i64, Path, description = "Offer ID")),
    request_body = TransportOffer,
    responses(
        (status = 200, description = "Offer updated", body = TransportOffer),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Offer not found or not owned by caller")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_transport_offer(
    state: State<AppState>,
    current_user: Extension<CurrentUser>,
    id: Path<i64>,
    offer: ValidatedJson<TransportOffer>,
) -> AppResult<Json<TransportOffer>> {
    offer_handler::update(state, current_user, id, offer).await
}

/// Delete one of the caller's transport offers
#[utoipa::path(
    delete,
    path = "/api/secure/transport/{id}",
    tag = "Transport",
    params(("id" = i64, Path, description = "Offer ID")),
    responses(
        (status = 204, description = "Offer deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Offer not found or not owned by caller")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_transport_offer(
    state: State<AppState>,
    current_user: Extension<CurrentUser>,
    id: Path<i64>,
) -> AppResult<StatusCode> {
    offer_handler::delete::<TransportOffer>(state, current_user, id).await
}

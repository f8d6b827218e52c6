//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{job_handler, transport_handler};
use crate::domain::{
    JobMode, JobOffer, JobType, Language, Location, OfferBase, TransportOffer, UserId,
};
use crate::services::TokenResponse;
use crate::types::{JobOfferPage, TransportOfferPage};

/// OpenAPI documentation for the Classifieds API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Classifieds API",
        version = "0.1.0",
        description = "Publish and browse job and transport offers",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        job_handler::create_job_offer,
        job_handler::list_job_offers,
        job_handler::get_job_offer,
        job_handler::update_job_offer,
        job_handler::delete_job_offer,
        transport_handler::create_transport_offer,
        transport_handler::list_transport_offers,
        transport_handler::get_transport_offer,
        transport_handler::update_transport_offer,
        transport_handler::delete_transport_offer,
    ),
    components(
        schemas(
            // Shared offer parts
            UserId,
            Location,
            OfferBase,
            // Job offers
            JobOffer,
            JobMode,
            JobType,
            Language,
            JobOfferPage,
            // Transport offers
            TransportOffer,
            TransportOfferPage,
            // Token issued by the CLI
            TokenResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Jobs", description = "Job offers"),
        (name = "Transport", description = "Transport offers")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token printed by the `token` command"))
                        .build(),
                ),
            );
        }
    }
}

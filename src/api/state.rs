//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::{JobOffer, TransportOffer};
use crate::infra::Database;
use crate::services::{AuthService, OfferService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Bearer token verification
    pub auth_service: Arc<dyn AuthService>,
    /// Job offer service
    pub job_service: Arc<dyn OfferService<JobOffer>>,
    /// Transport offer service
    pub transport_service: Arc<dyn OfferService<TransportOffer>>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let services = Services::from_connection(database.get_connection(), config);
        Self::from_services(database, &services)
    }

    /// Create application state from any service container.
    pub fn from_services(database: Arc<Database>, services: &dyn ServiceContainer) -> Self {
        Self {
            auth_service: services.auth(),
            job_service: services.jobs(),
            transport_service: services.transport(),
            database,
        }
    }
}

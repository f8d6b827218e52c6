//! Service Container - Centralized service access.
//!
//! Wires repositories, the clock and configuration into the services
//! the HTTP layer depends on.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use sea_orm::DatabaseConnection;

use super::{AuthService, Authenticator, OfferManager, OfferService};
use crate::config::Config;
use crate::domain::{JobOffer, TransportOffer};
use crate::infra::{JobOfferStore, OfferRepository, TransportOfferStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get job offer service
    fn jobs(&self) -> Arc<dyn OfferService<JobOffer>>;

    /// Get transport offer service
    fn transport(&self) -> Arc<dyn OfferService<TransportOffer>>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    job_service: Arc<dyn OfferService<JobOffer>>,
    transport_service: Arc<dyn OfferService<TransportOffer>>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: DatabaseConnection, config: Config) -> Self {
        Self::with_clock(db, config, Arc::new(DefaultClock))
    }

    /// Same as [`Services::from_connection`] with an explicit audit clock
    pub fn with_clock(
        db: DatabaseConnection,
        config: Config,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        let jobs: Arc<dyn OfferRepository<JobOffer>> = Arc::new(JobOfferStore::new(db.clone()));
        let transport: Arc<dyn OfferRepository<TransportOffer>> =
            Arc::new(TransportOfferStore::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(config)),
            job_service: Arc::new(OfferManager::new(jobs, clock.clone())),
            transport_service: Arc::new(OfferManager::new(transport, clock)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn jobs(&self) -> Arc<dyn OfferService<JobOffer>> {
        self.job_service.clone()
    }

    fn transport(&self) -> Arc<dyn OfferService<TransportOffer>> {
        self.transport_service.clone()
    }
}

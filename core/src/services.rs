//! # Application Services
//!
//! The use cases of LifeLine. Each service depends only on ports
//! ([`DocumentStore`], [`Clock`], [`Notifier`]) and never on a concrete
//! adapter.
//!
//! ## Available Services
//! * [`search::SearchService`]: request blood, match donors and nearby banks.
//! * [`registration::RegistrationService`]: donor, hospital and blood bank sign-up.
//! * [`auth::AuthService`]: login, recipient access and logout.
//! * [`dashboard::DashboardService`]: per-role views and stock updates.
//! * [`admin::AdminService`]: counts, donor roster and camp photos.
//! * [`gallery::GalleryService`]: public camp photo gallery.
//! * [`browse::BrowseService`]: bank directory and inventory summary.

use std::sync::Arc;

use lifeline_common::config::Config;
use lifeline_common::ports::clock::Clock;
use lifeline_common::ports::notifier::Notifier;
use lifeline_common::ports::repository::DocumentStore;

pub mod admin;
pub mod auth;
pub mod browse;
pub mod dashboard;
pub mod gallery;
pub mod registration;
pub mod search;

/// Every service wired to the same store and clock.
pub struct Services {
    pub search: search::SearchService,
    pub registration: registration::RegistrationService,
    pub auth: auth::AuthService,
    pub dashboard: dashboard::DashboardService,
    pub admin: admin::AdminService,
    pub gallery: gallery::GalleryService,
    pub browse: browse::BrowseService,
}

impl Services {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
        config: &Config,
    ) -> Self {
        let admin = auth::AdminCredentials {
            email: config.admin_email.clone(),
            password: config.admin_password.clone(),
        };
        Self {
            search: search::SearchService::new(store.clone(), clock.clone(), notifier),
            registration: registration::RegistrationService::new(store.clone(), clock.clone()),
            auth: auth::AuthService::new(store.clone(), clock.clone(), admin),
            dashboard: dashboard::DashboardService::new(
                store.clone(),
                clock.clone(),
                config.stock_target_units,
            ),
            admin: admin::AdminService::new(store.clone(), clock),
            gallery: gallery::GalleryService::new(store.clone()),
            browse: browse::BrowseService::new(store, config.stock_target_units),
        }
    }
}

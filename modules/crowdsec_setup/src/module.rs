//! Module wiring: configuration, collaborators, service, clients and routes

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::SetupApi;
use crate::domain::{ConfigStore, SecretStore, Service, SetupLifecycle};
use crate::infra::store::InMemorySplunkStore;
use std::sync::Arc;

/// Setup module
pub struct SetupModule {
    config: Config,
    service: Arc<Service>,
}

impl SetupModule {
    /// Build the module on top of the given remote collaborators
    pub fn new(
        config: Config,
        secret_store: Arc<dyn SecretStore>,
        config_store: Arc<dyn ConfigStore>,
        lifecycle: Arc<dyn SetupLifecycle>,
    ) -> Self {
        let service = Arc::new(Service::new(secret_store, config_store, lifecycle, &config));

        tracing::info!(
            app = %config.app_name,
            conf_file = %config.conf_file,
            stanza = %config.stanza,
            "Setup module initialized"
        );
        Self { config, service }
    }

    /// Build the module on a fresh in-memory store, returned for inspection
    pub fn in_memory(config: Config) -> (Self, InMemorySplunkStore) {
        let store = InMemorySplunkStore::new();
        let shared = Arc::new(store.clone());
        let module = Self::new(config, shared.clone(), shared.clone(), shared);
        (module, store)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// In-process client
    pub fn client(&self) -> Arc<dyn SetupApi> {
        Arc::new(NativeClient::new(self.service.clone()))
    }

    /// Register REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        tracing::info!("Registering setup REST routes");
        crate::api::rest::routes::register_routes(router, self.service.clone())
    }
}

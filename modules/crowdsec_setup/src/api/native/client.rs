//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{SettingsAction, SettingsValue, SetupApi, SetupError, SubmitOutcome};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SetupApi for NativeClient {
    async fn load_settings(&self) -> SettingsValue {
        self.service.load_settings().await
    }

    async fn api_key_configured(&self) -> bool {
        self.service.api_key_configured().await
    }

    fn import_config(
        &self,
        current: &SettingsValue,
        document: &str,
    ) -> Result<SettingsValue, SetupError> {
        self.service.import_config(current, document)
    }

    fn apply(&self, current: &SettingsValue, action: SettingsAction) -> SettingsValue {
        self.service.apply(current, action)
    }

    async fn submit(&self, settings: SettingsValue) -> Result<SubmitOutcome, SetupError> {
        self.service.submit(settings).await
    }
}

//! Domain service - setup flow orchestration

use super::importer;
use super::reconciler;
use super::remote::{ConfigStore, SecretStore, SetupLifecycle};
use super::secrets::SecretStoreAdapter;
use super::settings_store::SettingsStoreAdapter;
use crate::config::Config;
use crate::contract::{SettingsAction, SettingsValue, SetupError, SubmitOutcome};
use std::sync::Arc;

/// Message shown after a successful submit
pub const SAVED_MESSAGE: &str = "Saved successfully.";

/// Domain service for the setup form
///
/// Each call is one sequential flow; remote calls are awaited one after the
/// other and never retried.
pub struct Service {
    secrets: SecretStoreAdapter,
    settings: SettingsStoreAdapter,
    lifecycle: Arc<dyn SetupLifecycle>,
    app_name: String,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        secret_store: Arc<dyn SecretStore>,
        config_store: Arc<dyn ConfigStore>,
        lifecycle: Arc<dyn SetupLifecycle>,
        config: &Config,
    ) -> Self {
        Self {
            secrets: SecretStoreAdapter::new(
                secret_store,
                config.secret_realm.clone(),
                config.secret_name.clone(),
            ),
            settings: SettingsStoreAdapter::new(
                config_store,
                config.conf_file.clone(),
                config.stanza.clone(),
            ),
            lifecycle,
            app_name: config.app_name.clone(),
        }
    }

    /// Load persisted settings (defaults on any failure)
    pub async fn load_settings(&self) -> SettingsValue {
        self.settings.load().await
    }

    /// Whether an API key is already stored
    pub async fn api_key_configured(&self) -> bool {
        self.secrets.has_api_key().await
    }

    /// Stored API key, if any
    pub async fn stored_api_key(&self) -> Option<String> {
        self.secrets.load_api_key().await
    }

    /// Merge an import document over `current`. No remote call is made
    pub fn import_config(
        &self,
        current: &SettingsValue,
        document: &str,
    ) -> Result<SettingsValue, SetupError> {
        importer::import_document(current, document)
    }

    /// Apply a single form edit
    pub fn apply(&self, current: &SettingsValue, action: SettingsAction) -> SettingsValue {
        reconciler::reduce(current, action)
    }

    /// Persist settings and finalize the setup
    ///
    /// Steps run in order and the first failure aborts the rest: API key,
    /// settings stanza, then setup completion, app reload and redirect.
    /// A settings failure after the key was written leaves the new key in
    /// place; the whole call is safe to retry.
    pub async fn submit(&self, settings: SettingsValue) -> Result<SubmitOutcome, SetupError> {
        let (api_key, settings) = reconciler::normalize(settings).into_parts();

        tracing::info!(
            api_key_supplied = api_key.as_deref().is_some_and(|key| !key.trim().is_empty()),
            mode = ?settings.delivery_mode(),
            "Submitting CrowdSec settings"
        );

        let api_key_written = self.secrets.upsert_api_key(api_key.as_deref()).await?;
        let written = self.settings.save(&settings).await?;
        self.finalize().await?;

        Ok(SubmitOutcome {
            api_key_written,
            written,
            message: SAVED_MESSAGE.to_string(),
        })
    }

    async fn finalize(&self) -> Result<(), SetupError> {
        let lifecycle_error = |step: &str, e: super::remote::RemoteError| {
            tracing::error!(step, error = %e, "Setup finalization failed");
            SetupError::Lifecycle {
                message: e.message(),
            }
        };

        self.lifecycle
            .complete_setup()
            .await
            .map_err(|e| lifecycle_error("complete_setup", e))?;
        self.lifecycle
            .reload_app(&self.app_name)
            .await
            .map_err(|e| lifecycle_error("reload_app", e))?;
        self.lifecycle
            .redirect_to_home(&self.app_name)
            .await
            .map_err(|e| lifecycle_error("redirect_to_home", e))?;

        tracing::info!(app = %self.app_name, "Setup completed");
        Ok(())
    }
}

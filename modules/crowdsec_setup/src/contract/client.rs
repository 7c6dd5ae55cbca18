//! Native client trait for in-process callers
//!
//! This trait defines the API that the setup page backend (or any other
//! module) uses to drive the form. NO HTTP - direct function calls.

use super::{
    error::SetupError,
    model::{SettingsAction, SettingsValue, SubmitOutcome},
};
use async_trait::async_trait;

/// Setup form API
#[async_trait]
pub trait SetupApi: Send + Sync {
    /// Load persisted settings, falling back to defaults on any read failure
    async fn load_settings(&self) -> SettingsValue;

    /// Whether an API key is already stored
    async fn api_key_configured(&self) -> bool;

    /// Merge an import document (raw JSON text) over `current`
    fn import_config(
        &self,
        current: &SettingsValue,
        document: &str,
    ) -> Result<SettingsValue, SetupError>;

    /// Apply a single form edit
    fn apply(&self, current: &SettingsValue, action: SettingsAction) -> SettingsValue;

    /// Persist settings and finalize the setup
    async fn submit(&self, settings: SettingsValue) -> Result<SubmitOutcome, SetupError>;
}

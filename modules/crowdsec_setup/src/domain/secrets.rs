//! API key persistence in the secret store
//!
//! The secret store has no upsert: the adapter lists entries, updates the one
//! matching the fixed realm/name identity, and creates it otherwise.

use super::remote::{SecretEntry, SecretStore};
use crate::contract::SetupError;
use std::sync::Arc;

/// Secret store adapter for the CTI API key
pub struct SecretStoreAdapter {
    store: Arc<dyn SecretStore>,
    realm: String,
    name: String,
}

impl SecretStoreAdapter {
    pub fn new(store: Arc<dyn SecretStore>, realm: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            store,
            realm: realm.into(),
            name: name.into(),
        }
    }

    /// Composite identity of the API key entry
    pub fn identity(&self) -> String {
        format!("{}:{}:", self.realm, self.name)
    }

    /// Create or update the API key
    ///
    /// A missing or blank key leaves the stored secret untouched and makes no
    /// remote call. Returns whether a secret was written.
    pub async fn upsert_api_key(&self, api_key: Option<&str>) -> Result<bool, SetupError> {
        let Some(api_key) = api_key.filter(|key| !key.trim().is_empty()) else {
            tracing::debug!("No API key supplied, keeping stored secret");
            return Ok(false);
        };

        let existing = self.find_entry().await?;

        let result = match existing {
            Some(entry) => {
                tracing::info!(identity = %entry.identity, "Updating stored API key");
                self.store.update_at(&entry.location, api_key).await
            }
            None => {
                tracing::info!(realm = %self.realm, name = %self.name, "Creating API key secret");
                self.store.create(&self.name, &self.realm, api_key).await
            }
        };

        result.map_err(|e| {
            tracing::error!(error = %e, "Failed to write API key");
            SetupError::RemoteStore {
                message: e.message(),
            }
        })?;

        Ok(true)
    }

    /// Stored API key, if any. Read failures yield `None`
    pub async fn load_api_key(&self) -> Option<String> {
        match self.find_entry().await {
            Ok(entry) => entry.and_then(|entry| entry.clear_password),
            Err(e) => {
                tracing::warn!(error = %e, "Unable to load API key");
                None
            }
        }
    }

    /// Whether an API key entry exists. Read failures yield `false`
    pub async fn has_api_key(&self) -> bool {
        match self.find_entry().await {
            Ok(entry) => entry.is_some(),
            Err(e) => {
                tracing::warn!(error = %e, "Unable to list secrets");
                false
            }
        }
    }

    async fn find_entry(&self) -> Result<Option<SecretEntry>, SetupError> {
        let identity = self.identity();
        let entries = self.store.list().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list secrets");
            SetupError::RemoteStore {
                message: e.message(),
            }
        })?;

        Ok(entries.into_iter().find(|entry| entry.identity == identity))
    }
}

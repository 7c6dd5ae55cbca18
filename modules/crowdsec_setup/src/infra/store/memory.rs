//! In-memory Splunk management store
//!
//! Implements the secret store, the configuration store and the setup
//! lifecycle against process memory. Used for local runs and tests.

use crate::domain::remote::{
    ConfigStore, RemoteError, SecretEntry, SecretStore, SetupLifecycle, StanzaProperties,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

const PASSWORDS_ENDPOINT: &str = "storage/passwords";

type StanzaKey = (String, String); // (conf_file, stanza)

#[derive(Debug, Default)]
struct LifecycleState {
    configured: bool,
    reloads: Vec<String>,
    redirects: Vec<String>,
}

/// In-memory implementation of every remote collaborator
#[derive(Clone, Default)]
pub struct InMemorySplunkStore {
    secrets: Arc<RwLock<Vec<SecretEntry>>>,
    stanzas: Arc<RwLock<HashMap<StanzaKey, StanzaProperties>>>,
    lifecycle: Arc<RwLock<LifecycleState>>,
}

impl InMemorySplunkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a stanza
    pub fn with_stanza(self, file: &str, stanza: &str, properties: StanzaProperties) -> Self {
        self.stanzas
            .write()
            .insert((file.to_string(), stanza.to_string()), properties);
        self
    }

    /// Current content of a stanza
    pub fn stanza(&self, file: &str, stanza: &str) -> Option<StanzaProperties> {
        self.stanzas
            .read()
            .get(&(file.to_string(), stanza.to_string()))
            .cloned()
    }

    /// Clear secret stored under `identity`
    pub fn secret(&self, identity: &str) -> Option<String> {
        self.secrets
            .read()
            .iter()
            .find(|entry| entry.identity == identity)
            .and_then(|entry| entry.clear_password.clone())
    }

    /// Number of stored secrets
    pub fn secret_count(&self) -> usize {
        self.secrets.read().len()
    }

    /// Whether setup was marked complete
    pub fn is_configured(&self) -> bool {
        self.lifecycle.read().configured
    }

    /// Apps reloaded so far, in order
    pub fn reloads(&self) -> Vec<String> {
        self.lifecycle.read().reloads.clone()
    }

    /// Redirect targets so far, in order
    pub fn redirects(&self) -> Vec<String> {
        self.lifecycle.read().redirects.clone()
    }

    fn location(identity: &str) -> String {
        format!("{}/{}", PASSWORDS_ENDPOINT, identity)
    }
}

#[async_trait]
impl SecretStore for InMemorySplunkStore {
    async fn list(&self) -> Result<Vec<SecretEntry>, RemoteError> {
        Ok(self.secrets.read().clone())
    }

    async fn create(&self, name: &str, realm: &str, secret: &str) -> Result<(), RemoteError> {
        let identity = format!("{}:{}:", realm, name);
        let mut secrets = self.secrets.write();
        if secrets.iter().any(|entry| entry.identity == identity) {
            return Err(RemoteError::new(
                Some(409),
                format!(
                    r#"{{"messages":[{{"type":"ERROR","text":"An object with name={} already exists"}}]}}"#,
                    name
                ),
            ));
        }
        secrets.push(SecretEntry {
            location: Self::location(&identity),
            identity,
            clear_password: Some(secret.to_string()),
        });
        Ok(())
    }

    async fn update_at(&self, location: &str, secret: &str) -> Result<(), RemoteError> {
        let mut secrets = self.secrets.write();
        let entry = secrets
            .iter_mut()
            .find(|entry| entry.location == location)
            .ok_or_else(|| {
                RemoteError::new(
                    Some(404),
                    format!(
                        r#"{{"messages":[{{"type":"ERROR","text":"Could not find object id={}"}}]}}"#,
                        location
                    ),
                )
            })?;
        entry.clear_password = Some(secret.to_string());
        Ok(())
    }
}

#[async_trait]
impl ConfigStore for InMemorySplunkStore {
    async fn read_stanza(
        &self,
        file: &str,
        stanza: &str,
    ) -> Result<Option<StanzaProperties>, RemoteError> {
        Ok(self.stanza(file, stanza))
    }

    async fn write_stanza(
        &self,
        file: &str,
        stanza: &str,
        properties: &StanzaProperties,
    ) -> Result<(), RemoteError> {
        let mut stanzas = self.stanzas.write();
        let current = stanzas
            .entry((file.to_string(), stanza.to_string()))
            .or_default();
        for (key, value) in properties {
            current.insert(key.clone(), value.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl SetupLifecycle for InMemorySplunkStore {
    async fn complete_setup(&self) -> Result<(), RemoteError> {
        self.lifecycle.write().configured = true;
        Ok(())
    }

    async fn reload_app(&self, app_id: &str) -> Result<(), RemoteError> {
        self.lifecycle.write().reloads.push(app_id.to_string());
        Ok(())
    }

    async fn redirect_to_home(&self, app_id: &str) -> Result<(), RemoteError> {
        self.lifecycle.write().redirects.push(app_id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_stanza_merges() {
        let store = InMemorySplunkStore::new().with_stanza(
            "crowdsec_settings",
            "settings",
            [("local_dump".to_string(), "1".to_string())].into(),
        );

        let payload: StanzaProperties = [("batching".to_string(), "false".to_string())].into();
        store
            .write_stanza("crowdsec_settings", "settings", &payload)
            .await
            .unwrap();

        let stanza = store.stanza("crowdsec_settings", "settings").unwrap();
        assert_eq!(stanza.get("local_dump").map(String::as_str), Some("1"));
        assert_eq!(stanza.get("batching").map(String::as_str), Some("false"));
    }

    #[tokio::test]
    async fn test_missing_stanza_reads_none() {
        let store = InMemorySplunkStore::new();
        assert_eq!(store.read_stanza("crowdsec_settings", "settings").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_create_conflicts() {
        let store = InMemorySplunkStore::new();
        store.create("api_key", "realm", "a").await.unwrap();
        let err = store.create("api_key", "realm", "b").await.unwrap_err();
        assert_eq!(err.status, Some(409));
        assert_eq!(err.message(), "An object with name=api_key already exists");
        assert_eq!(store.secret("realm:api_key:").as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn test_update_unknown_location() {
        let store = InMemorySplunkStore::new();
        let err = store.update_at("storage/passwords/nope", "x").await.unwrap_err();
        assert_eq!(err.status, Some(404));
    }
}

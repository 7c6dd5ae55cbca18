//! Remote collaborator traits
//!
//! These traits define the narrow interface to the Splunk management
//! endpoints. Implementations live in infra/store.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// String-encoded stanza properties
pub type StanzaProperties = BTreeMap<String, String>;

/// Failure reported by a remote collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("remote call failed{}: {message}", status_suffix(.status))]
pub struct RemoteError {
    /// HTTP status, when the failure came from a response
    pub status: Option<u16>,
    /// Raw response body or transport error text
    pub body: String,
    message: String,
}

impl RemoteError {
    /// Error built from a remote response
    pub fn new(status: Option<u16>, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = match extract_message(&body) {
            Some(message) => message,
            None => match status {
                Some(status) => format!("HTTP {}", status),
                None => "unknown remote error".to_string(),
            },
        };
        Self {
            status,
            body,
            message,
        }
    }

    /// Error raised before any response was received
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }

    /// Best-effort human readable message
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|status| format!(" ({})", status)).unwrap_or_default()
}

/// Pull the message out of a remote error payload
///
/// Understands the splunkd shape `{"messages":[{"type":..,"text":..}]}` and
/// plain `{"message":..}` / `{"error":..}` objects. Anything else is returned
/// as trimmed raw text; blank input yields `None`.
pub fn extract_message(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(payload) = serde_json::from_str::<Value>(raw) {
        let structured = payload
            .get("messages")
            .and_then(Value::as_array)
            .and_then(|messages| messages.first())
            .and_then(|message| message.get("text"))
            .or_else(|| payload.get("message"))
            .or_else(|| payload.get("error"))
            .and_then(Value::as_str);

        if let Some(message) = structured {
            return Some(message.to_string());
        }
    }

    Some(raw.to_string())
}

/// Entry listed by the secret store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretEntry {
    /// Composite identity, `"<realm>:<name>:"`
    pub identity: String,
    /// Location used to update this entry
    pub location: String,
    /// Clear secret, when the listing exposes it
    pub clear_password: Option<String>,
}

/// Secret store (storage/passwords)
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// List all stored secrets visible to the app
    async fn list(&self) -> Result<Vec<SecretEntry>, RemoteError>;

    /// Create a new secret
    async fn create(&self, name: &str, realm: &str, secret: &str) -> Result<(), RemoteError>;

    /// Replace the secret stored at `location`
    async fn update_at(&self, location: &str, secret: &str) -> Result<(), RemoteError>;
}

/// Configuration store (configs/conf-*)
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read a stanza. `None` when the file or the stanza does not exist
    async fn read_stanza(
        &self,
        file: &str,
        stanza: &str,
    ) -> Result<Option<StanzaProperties>, RemoteError>;

    /// Merge-write properties into a stanza, creating it if needed
    async fn write_stanza(
        &self,
        file: &str,
        stanza: &str,
        properties: &StanzaProperties,
    ) -> Result<(), RemoteError>;
}

/// Setup completion and app lifecycle
#[async_trait]
pub trait SetupLifecycle: Send + Sync {
    /// Mark the app as configured
    async fn complete_setup(&self) -> Result<(), RemoteError>;

    /// Reload the app so the new settings take effect
    async fn reload_app(&self, app_id: &str) -> Result<(), RemoteError>;

    /// Send the operator to the app home page
    async fn redirect_to_home(&self, app_id: &str) -> Result<(), RemoteError>;
}

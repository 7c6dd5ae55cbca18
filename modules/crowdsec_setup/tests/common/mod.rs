//! Common test utilities: a recording Splunk store with failure injection

#![allow(dead_code)]

use async_trait::async_trait;
use crowdsec_setup::domain::remote::{
    ConfigStore, RemoteError, SecretEntry, SecretStore, SetupLifecycle, StanzaProperties,
};
use crowdsec_setup::domain::Service;
use crowdsec_setup::infra::store::InMemorySplunkStore;
use crowdsec_setup::Config;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

pub const CONF_FILE: &str = "crowdsec_settings";
pub const STANZA: &str = "settings";
pub const REALM: &str = "crowdsec-splunk-app_realm";
pub const SECRET_NAME: &str = "api_key";
pub const IDENTITY: &str = "crowdsec-splunk-app_realm:api_key:";
pub const APP: &str = "crowdsec-splunk-app";

/// Remote operation, used to inject failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    ListSecrets,
    CreateSecret,
    UpdateSecret,
    ReadStanza,
    WriteStanza,
    CompleteSetup,
    ReloadApp,
    RedirectToHome,
}

/// Recorded remote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListSecrets,
    CreateSecret { name: String, realm: String },
    UpdateSecret { location: String },
    ReadStanza { file: String, stanza: String },
    WriteStanza { file: String, stanza: String, properties: StanzaProperties },
    CompleteSetup,
    ReloadApp(String),
    RedirectToHome(String),
}

impl Call {
    fn op(&self) -> Op {
        match self {
            Call::ListSecrets => Op::ListSecrets,
            Call::CreateSecret { .. } => Op::CreateSecret,
            Call::UpdateSecret { .. } => Op::UpdateSecret,
            Call::ReadStanza { .. } => Op::ReadStanza,
            Call::WriteStanza { .. } => Op::WriteStanza,
            Call::CompleteSetup => Op::CompleteSetup,
            Call::ReloadApp(_) => Op::ReloadApp,
            Call::RedirectToHome(_) => Op::RedirectToHome,
        }
    }
}

/// In-memory store that records every call and can fail on demand
#[derive(Clone, Default)]
pub struct RecordingStore {
    pub inner: InMemorySplunkStore,
    calls: Arc<Mutex<Vec<Call>>>,
    failures: Arc<Mutex<HashSet<Op>>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stanza(mut self, pairs: &[(&str, &str)]) -> Self {
        let properties = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.inner = self.inner.with_stanza(CONF_FILE, STANZA, properties);
        self
    }

    /// Seed the API key secret without recording the call
    pub async fn with_api_key(self, api_key: &str) -> Self {
        self.inner
            .create(SECRET_NAME, REALM, api_key)
            .await
            .expect("seed secret");
        self
    }

    pub fn fail_on(&self, op: Op) {
        self.failures.lock().insert(op);
    }

    pub fn clear_failures(&self) {
        self.failures.lock().clear();
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Calls that touched the secret store
    pub fn secret_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| {
                matches!(
                    call,
                    Call::ListSecrets | Call::CreateSecret { .. } | Call::UpdateSecret { .. }
                )
            })
            .collect()
    }

    pub fn stanza(&self) -> Option<StanzaProperties> {
        self.inner.stanza(CONF_FILE, STANZA)
    }

    fn record(&self, call: Call) -> Result<(), RemoteError> {
        let op = call.op();
        self.calls.lock().push(call);
        if self.failures.lock().contains(&op) {
            return Err(RemoteError::new(
                Some(500),
                format!(
                    r#"{{"messages":[{{"type":"ERROR","text":"{:?} failed"}}]}}"#,
                    op
                ),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl SecretStore for RecordingStore {
    async fn list(&self) -> Result<Vec<SecretEntry>, RemoteError> {
        self.record(Call::ListSecrets)?;
        self.inner.list().await
    }

    async fn create(&self, name: &str, realm: &str, secret: &str) -> Result<(), RemoteError> {
        self.record(Call::CreateSecret {
            name: name.to_string(),
            realm: realm.to_string(),
        })?;
        self.inner.create(name, realm, secret).await
    }

    async fn update_at(&self, location: &str, secret: &str) -> Result<(), RemoteError> {
        self.record(Call::UpdateSecret {
            location: location.to_string(),
        })?;
        self.inner.update_at(location, secret).await
    }
}

#[async_trait]
impl ConfigStore for RecordingStore {
    async fn read_stanza(
        &self,
        file: &str,
        stanza: &str,
    ) -> Result<Option<StanzaProperties>, RemoteError> {
        self.record(Call::ReadStanza {
            file: file.to_string(),
            stanza: stanza.to_string(),
        })?;
        self.inner.read_stanza(file, stanza).await
    }

    async fn write_stanza(
        &self,
        file: &str,
        stanza: &str,
        properties: &StanzaProperties,
    ) -> Result<(), RemoteError> {
        self.record(Call::WriteStanza {
            file: file.to_string(),
            stanza: stanza.to_string(),
            properties: properties.clone(),
        })?;
        self.inner.write_stanza(file, stanza, properties).await
    }
}

#[async_trait]
impl SetupLifecycle for RecordingStore {
    async fn complete_setup(&self) -> Result<(), RemoteError> {
        self.record(Call::CompleteSetup)?;
        self.inner.complete_setup().await
    }

    async fn reload_app(&self, app_id: &str) -> Result<(), RemoteError> {
        self.record(Call::ReloadApp(app_id.to_string()))?;
        self.inner.reload_app(app_id).await
    }

    async fn redirect_to_home(&self, app_id: &str) -> Result<(), RemoteError> {
        self.record(Call::RedirectToHome(app_id.to_string()))?;
        self.inner.redirect_to_home(app_id).await
    }
}

/// Service wired to a recording store
pub fn create_test_service(store: &RecordingStore) -> Service {
    let shared = Arc::new(store.clone());
    Service::new(shared.clone(), shared.clone(), shared, &Config::default())
}

pub fn props(pairs: &[(&str, &str)]) -> StanzaProperties {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

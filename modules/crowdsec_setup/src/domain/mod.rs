//! Domain layer - reconciliation rules, store adapters and services

pub mod coercion;
pub mod importer;
pub mod reconciler;
pub mod remote;
pub mod secrets;
pub mod service;
pub mod settings_store;

pub use remote::{ConfigStore, RemoteError, SecretEntry, SecretStore, SetupLifecycle, StanzaProperties};
pub use secrets::SecretStoreAdapter;
pub use service::Service;
pub use settings_store::SettingsStoreAdapter;

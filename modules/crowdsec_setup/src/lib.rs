//! CrowdSec Setup Module
//!
//! Settings reconciliation and persistence behind the CrowdSec Splunk app
//! setup page: the operator supplies a CTI API key and picks a delivery mode
//! (batched CTI calls or a full local dump). The API key goes to the secret
//! store, everything else to the `crowdsec_settings` configuration file.

// Public exports
pub mod contract;
pub use contract::{
    client::SetupApi, error::SetupError, DeliveryMode, SettingsAction, SettingsValue,
    SubmitOutcome,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::SetupModule;

pub mod domain;
pub mod infra;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;

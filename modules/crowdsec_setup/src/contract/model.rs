//! Contract models for the setup form
//!
//! These models are transport-agnostic and shared by the native client and
//! the REST layer. NO serde derives - these are pure domain models.

use std::collections::BTreeMap;

/// Batch size used when nothing valid was supplied
pub const DEFAULT_BATCH_SIZE: u32 = 10;

/// Batch sizes offered by the form
pub const SUPPORTED_BATCH_SIZES: [u32; 4] = [10, 20, 50, 100];

/// Whether `size` is one of the batch sizes offered by the form
pub fn is_supported_batch_size(size: u32) -> bool {
    SUPPORTED_BATCH_SIZES.contains(&size)
}

/// Settings edited by the setup form
///
/// `batching` and local dump are never enabled at the same time once a value
/// has gone through the reducer or the settings store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsValue {
    /// CTI API key. `None` or blank means "keep the stored key"
    pub api_key: Option<String>,
    /// Query the CTI API in batches
    pub batching: bool,
    /// Batch size, only meaningful while `batching` is on
    pub batch_size: u32,
    /// Full local dump. `None` = never set, and never written to the store
    pub local_dump: Option<bool>,
}

impl Default for SettingsValue {
    fn default() -> Self {
        Self {
            api_key: None,
            batching: false,
            batch_size: DEFAULT_BATCH_SIZE,
            local_dump: None,
        }
    }
}

impl SettingsValue {
    /// Boolean view of the local dump flag
    pub fn local_dump_enabled(&self) -> bool {
        self.local_dump.unwrap_or(false)
    }

    /// Delivery mode the lookup command will run with
    pub fn delivery_mode(&self) -> DeliveryMode {
        if self.local_dump_enabled() {
            DeliveryMode::LocalDump
        } else if self.batching {
            DeliveryMode::Batched(self.batch_size)
        } else {
            DeliveryMode::Single
        }
    }

    /// Number of IPs sent per CTI request (1 when not batching)
    pub fn effective_batch_size(&self) -> u32 {
        match self.delivery_mode() {
            DeliveryMode::Batched(size) => size,
            DeliveryMode::Single | DeliveryMode::LocalDump => 1,
        }
    }

    /// Split into the secret part and the non-secret part
    pub fn into_parts(self) -> (Option<String>, SettingsValue) {
        let api_key = self.api_key;
        (
            api_key,
            SettingsValue {
                api_key: None,
                ..self
            },
        )
    }
}

/// How events are enriched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// One CTI request per event
    Single,
    /// Grouped CTI requests of the given size
    Batched(u32),
    /// Lookups against a local dump of the CTI database
    LocalDump,
}

/// A single edit applied to [`SettingsValue`]
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsAction {
    /// API key field changed
    SetApiKey(Option<String>),
    /// Batching checkbox toggled
    SetBatching(bool),
    /// Local dump checkbox toggled
    SetLocalDump(bool),
    /// Batch size select changed (raw form value)
    SetBatchSize(String),
    /// Parsed import document merged over the current value
    ImportMerge(serde_json::Value),
}

/// Result of a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Whether the API key was created or updated
    pub api_key_written: bool,
    /// Properties written to the settings stanza
    pub written: BTreeMap<String, String>,
    /// Message shown to the operator
    pub message: String,
}

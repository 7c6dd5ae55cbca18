//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Settings as exchanged with the setup page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsDto {
    /// API key typed or imported in the form; never returned by GET
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default)]
    pub batching: bool,

    #[serde(default = "default_batch_size")]
    pub batch_size: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_dump: Option<bool>,
}

fn default_batch_size() -> u32 {
    crate::contract::DEFAULT_BATCH_SIZE
}

/// Response of `GET /settings`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub settings: SettingsDto,
    /// Whether an API key is already stored
    pub api_key_configured: bool,
    /// Batch sizes offered by the form
    pub supported_batch_sizes: Vec<u32>,
}

/// Import request: current form state plus the raw file content
#[derive(Debug, Clone, Deserialize)]
pub struct ImportRequest {
    pub current: SettingsDto,
    pub document: String,
}

/// Form edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ActionDto {
    SetApiKey(Option<String>),
    SetBatching(bool),
    SetLocalDump(bool),
    SetBatchSize(String),
    ImportMerge(serde_json::Value),
}

/// Action request: current form state plus one edit
#[derive(Debug, Clone, Deserialize)]
pub struct ActionRequest {
    pub current: SettingsDto,
    pub action: ActionDto,
}

/// Response of a successful `PUT /settings`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Always "ok"
    pub status: String,
    pub message: String,
    pub api_key_written: bool,
    pub written: BTreeMap<String, String>,
}

//! Config file import
//!
//! An import document pre-fills the form. Recognised fields:
//! `api_key` (string), `batching` (boolean), `batch_size` (number) and
//! `local_dump` (boolean). A field that is missing or has another type keeps
//! the current value; unknown fields are ignored.

use super::{coercion, reconciler};
use crate::contract::{error::INVALID_CONFIG_FILE, SettingsValue, SetupError};
use serde_json::Value;

/// Parse `text` as JSON and merge it over `current`
///
/// On error `current` is untouched and nothing is merged.
pub fn import_document(current: &SettingsValue, text: &str) -> Result<SettingsValue, SetupError> {
    let document: Value = serde_json::from_str(text).map_err(|e| {
        tracing::warn!(error = %e, "Rejected config import");
        SetupError::Parse {
            message: format!("{} ({})", INVALID_CONFIG_FILE, e),
        }
    })?;

    Ok(merge(current, &document))
}

/// Merge an already parsed document over `current`
pub fn merge(current: &SettingsValue, document: &Value) -> SettingsValue {
    let local_dump = match document.get("local_dump") {
        Some(Value::Bool(enabled)) => Some(*enabled),
        _ => current.local_dump,
    };
    let batching = document
        .get("batching")
        .and_then(Value::as_bool)
        .unwrap_or(current.batching);
    let batch_size = document
        .get("batch_size")
        .and_then(coercion::batch_size_from_json)
        .unwrap_or(current.batch_size);
    let api_key = match document.get("api_key") {
        Some(Value::String(api_key)) => Some(api_key.clone()),
        _ => current.api_key.clone(),
    };

    reconciler::resolve_conflict(SettingsValue {
        api_key,
        batching,
        batch_size,
        local_dump,
    })
}

//! Settings reducer
//!
//! Every change to a [`SettingsValue`] goes through [`reduce`], which keeps
//! batching and local dump mutually exclusive:
//! - enabling local dump turns batching off
//! - enabling batching turns local dump off
//! - when both arrive enabled at once (import), local dump wins

use super::{coercion, importer};
use crate::contract::{
    is_supported_batch_size, SettingsAction, SettingsValue, DEFAULT_BATCH_SIZE,
};

/// Apply one action and return the next settings value
pub fn reduce(current: &SettingsValue, action: SettingsAction) -> SettingsValue {
    let mut next = current.clone();

    match action {
        SettingsAction::SetApiKey(api_key) => {
            next.api_key = api_key;
        }
        SettingsAction::SetLocalDump(enabled) => {
            next.local_dump = Some(enabled);
            if enabled {
                next.batching = false;
            }
        }
        SettingsAction::SetBatching(enabled) => {
            next.batching = enabled;
            if enabled {
                next.local_dump = disabled(next.local_dump);
            }
        }
        SettingsAction::SetBatchSize(raw) => {
            next.batch_size = coercion::coerce_batch_size(&raw);
            if !is_supported_batch_size(next.batch_size) {
                tracing::debug!(batch_size = next.batch_size, "Batch size not offered by the form");
            }
        }
        SettingsAction::ImportMerge(document) => {
            return importer::merge(current, &document);
        }
    }

    next
}

/// Resolve a value where both modes are enabled in favour of local dump
pub fn resolve_conflict(mut value: SettingsValue) -> SettingsValue {
    if value.batching && value.local_dump_enabled() {
        tracing::debug!("Both batching and local_dump enabled, keeping local_dump");
        value.batching = false;
    }
    value
}

/// Bring a value built outside the reducer back within its invariants
///
/// A zero batch size becomes the default and conflicting modes resolve in
/// favour of local dump.
pub fn normalize(mut value: SettingsValue) -> SettingsValue {
    if value.batch_size == 0 {
        tracing::debug!("Zero batch_size, using default");
        value.batch_size = DEFAULT_BATCH_SIZE;
    }
    resolve_conflict(value)
}

// An unset flag is already off and stays unset.
fn disabled(local_dump: Option<bool>) -> Option<bool> {
    local_dump.map(|_| false)
}

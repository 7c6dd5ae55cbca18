//! Settings persistence in the `crowdsec_settings` configuration file

use super::coercion::{coerce_batch_size, encode_batching, encode_local_dump, parse_remote_bool};
use super::reconciler;
use super::remote::{ConfigStore, StanzaProperties};
use crate::contract::{SettingsValue, SetupError};
use std::sync::Arc;

const BATCHING: &str = "batching";
const BATCH_SIZE: &str = "batch_size";
const LOCAL_DUMP: &str = "local_dump";

/// Configuration store adapter for the non-secret settings
pub struct SettingsStoreAdapter {
    store: Arc<dyn ConfigStore>,
    conf_file: String,
    stanza: String,
}

impl SettingsStoreAdapter {
    pub fn new(store: Arc<dyn ConfigStore>, conf_file: impl Into<String>, stanza: impl Into<String>) -> Self {
        Self {
            store,
            conf_file: conf_file.into(),
            stanza: stanza.into(),
        }
    }

    /// Read settings, substituting defaults for anything missing
    ///
    /// Never fails: a read error yields the defaults so the form can render.
    pub async fn load(&self) -> SettingsValue {
        match self.store.read_stanza(&self.conf_file, &self.stanza).await {
            Ok(Some(properties)) => {
                let settings = from_properties(&properties);
                tracing::info!(
                    batching = settings.batching,
                    batch_size = settings.batch_size,
                    local_dump = ?settings.local_dump,
                    "Loaded CrowdSec settings"
                );
                settings
            }
            Ok(None) => {
                tracing::info!(
                    conf_file = %self.conf_file,
                    stanza = %self.stanza,
                    "No settings stanza yet, using defaults"
                );
                SettingsValue::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Unable to load settings, using defaults");
                SettingsValue::default()
            }
        }
    }

    /// Merge-write the settings that differ from the stored stanza
    ///
    /// The stanza is re-read first. A property is written only when its
    /// decoded stored value (or the default, when absent) differs from
    /// `settings`, so unchanged fields keep their stored encoding and absent
    /// fields stay absent. Nothing is written when nothing changed. The API
    /// key is never part of the payload. Returns the written properties.
    pub async fn save(&self, settings: &SettingsValue) -> Result<StanzaProperties, SetupError> {
        let stored = self
            .store
            .read_stanza(&self.conf_file, &self.stanza)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to read settings before save");
                SetupError::RemoteStore {
                    message: e.message(),
                }
            })?
            .unwrap_or_default();

        let properties = changed_properties(settings, &stored);
        if properties.is_empty() {
            tracing::info!("CrowdSec settings unchanged, nothing to write");
            return Ok(properties);
        }

        self.store
            .write_stanza(&self.conf_file, &self.stanza, &properties)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to save settings");
                SetupError::RemoteStore {
                    message: e.message(),
                }
            })?;

        tracing::info!(?properties, "Saved CrowdSec settings");
        Ok(properties)
    }
}

/// Decode stanza properties
pub fn from_properties(properties: &StanzaProperties) -> SettingsValue {
    reconciler::resolve_conflict(from_raw(properties))
}

// Field-wise decode, without resolving conflicting modes.
fn from_raw(properties: &StanzaProperties) -> SettingsValue {
    SettingsValue {
        api_key: None,
        batching: properties
            .get(BATCHING)
            .map(|raw| parse_remote_bool(raw))
            .unwrap_or(false),
        batch_size: properties
            .get(BATCH_SIZE)
            .map(|raw| coerce_batch_size(raw))
            .unwrap_or(crate::contract::DEFAULT_BATCH_SIZE),
        local_dump: properties.get(LOCAL_DUMP).map(|raw| parse_remote_bool(raw)),
    }
}

/// Encode settings as stanza properties, omitting unset fields
pub fn to_properties(settings: &SettingsValue) -> StanzaProperties {
    let mut properties = StanzaProperties::new();
    properties.insert(BATCHING.to_string(), encode_batching(settings.batching).to_string());
    properties.insert(BATCH_SIZE.to_string(), settings.batch_size.to_string());
    if let Some(local_dump) = settings.local_dump {
        properties.insert(LOCAL_DUMP.to_string(), encode_local_dump(local_dump).to_string());
    }
    properties
}

/// Properties of `settings` whose value differs from `stored`
///
/// Absent stored properties compare as their defaults.
pub fn changed_properties(settings: &SettingsValue, stored: &StanzaProperties) -> StanzaProperties {
    let current = from_raw(stored);

    to_properties(settings)
        .into_iter()
        .filter(|(key, _)| match key.as_str() {
            BATCHING => settings.batching != current.batching,
            BATCH_SIZE => settings.batch_size != current.batch_size,
            LOCAL_DUMP => settings.local_dump_enabled() != current.local_dump_enabled(),
            _ => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> StanzaProperties {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_empty_properties() {
        assert_eq!(from_properties(&StanzaProperties::new()), SettingsValue::default());
    }

    #[test]
    fn test_from_legacy_encodings() {
        let settings = from_properties(&props(&[("batching", "1"), ("batch_size", "50")]));
        assert!(settings.batching);
        assert_eq!(settings.batch_size, 50);
        assert_eq!(settings.local_dump, None);

        let settings = from_properties(&props(&[("batching", "True"), ("batch_size", "x")]));
        assert!(settings.batching);
        assert_eq!(settings.batch_size, 10);
    }

    #[test]
    fn test_from_conflicting_properties() {
        let settings = from_properties(&props(&[("batching", "true"), ("local_dump", "1")]));
        assert!(!settings.batching);
        assert_eq!(settings.local_dump, Some(true));
    }

    #[test]
    fn test_to_properties_omits_unset_local_dump() {
        let settings = SettingsValue {
            api_key: Some("secret".to_string()),
            batching: true,
            batch_size: 20,
            local_dump: None,
        };
        assert_eq!(
            to_properties(&settings),
            props(&[("batching", "true"), ("batch_size", "20")])
        );
    }

    #[test]
    fn test_to_properties_with_local_dump() {
        let settings = SettingsValue {
            local_dump: Some(true),
            ..SettingsValue::default()
        };
        assert_eq!(
            to_properties(&settings),
            props(&[("batching", "false"), ("batch_size", "10"), ("local_dump", "1")])
        );
    }

    #[test]
    fn test_changed_properties_keeps_partial_stanza() {
        let stored = props(&[("batching", "1")]);
        assert!(changed_properties(&from_properties(&stored), &stored).is_empty());
        assert!(changed_properties(&SettingsValue::default(), &StanzaProperties::new()).is_empty());
    }

    #[test]
    fn test_changed_properties_writes_edits_only() {
        let stored = props(&[("batching", "1")]);
        let settings = SettingsValue {
            batching: true,
            batch_size: 50,
            ..SettingsValue::default()
        };
        assert_eq!(changed_properties(&settings, &stored), props(&[("batch_size", "50")]));

        let settings = SettingsValue {
            local_dump: Some(true),
            ..SettingsValue::default()
        };
        assert_eq!(
            changed_properties(&settings, &stored),
            props(&[("batching", "false"), ("local_dump", "1")])
        );
    }

    #[test]
    fn test_changed_properties_rewrites_conflicting_stanza() {
        let stored = props(&[("batching", "true"), ("local_dump", "1")]);
        assert_eq!(
            changed_properties(&from_properties(&stored), &stored),
            props(&[("batching", "false")])
        );
    }

    #[test]
    fn test_properties_round_trip() {
        let stored = props(&[("batching", "false"), ("batch_size", "100"), ("local_dump", "0")]);
        assert_eq!(to_properties(&from_properties(&stored)), stored);
    }
}

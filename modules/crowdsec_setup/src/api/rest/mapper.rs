//! Conversions between REST DTOs and contract models

use super::dto::*;
use crate::contract::{SettingsAction, SettingsValue, SubmitOutcome, DEFAULT_BATCH_SIZE};

impl From<SettingsValue> for SettingsDto {
    fn from(settings: SettingsValue) -> Self {
        Self {
            api_key: settings.api_key,
            batching: settings.batching,
            batch_size: settings.batch_size,
            local_dump: settings.local_dump,
        }
    }
}

impl From<SettingsDto> for SettingsValue {
    fn from(dto: SettingsDto) -> Self {
        Self {
            api_key: dto.api_key,
            batching: dto.batching,
            // zero is not a batch size
            batch_size: match dto.batch_size {
                0 => DEFAULT_BATCH_SIZE,
                size => size,
            },
            local_dump: dto.local_dump,
        }
    }
}

impl From<ActionDto> for SettingsAction {
    fn from(action: ActionDto) -> Self {
        match action {
            ActionDto::SetApiKey(api_key) => SettingsAction::SetApiKey(api_key),
            ActionDto::SetBatching(enabled) => SettingsAction::SetBatching(enabled),
            ActionDto::SetLocalDump(enabled) => SettingsAction::SetLocalDump(enabled),
            ActionDto::SetBatchSize(raw) => SettingsAction::SetBatchSize(raw),
            ActionDto::ImportMerge(document) => SettingsAction::ImportMerge(document),
        }
    }
}

impl From<SubmitOutcome> for SubmitResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        Self {
            status: "ok".to_string(),
            message: outcome.message,
            api_key_written: outcome.api_key_written,
            written: outcome.written,
        }
    }
}

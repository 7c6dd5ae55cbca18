//! Coercion of raw form, import and stanza values

use crate::contract::DEFAULT_BATCH_SIZE;
use serde_json::Value;

/// Coerce a raw batch size (form select or stanza property)
///
/// Reads the leading integer like the form's `parseInt`: surrounding
/// whitespace is skipped and trailing characters are ignored, so `"20abc"`
/// and `"20.0"` both give 20. Any positive integer is accepted; everything
/// else falls back to [`DEFAULT_BATCH_SIZE`].
pub fn coerce_batch_size(raw: &str) -> u32 {
    match leading_integer(raw) {
        Some(size) if size > 0 => u32::try_from(size).unwrap_or(DEFAULT_BATCH_SIZE),
        _ => {
            tracing::debug!(raw, "Invalid batch_size, using default");
            DEFAULT_BATCH_SIZE
        }
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let sign_len = usize::from(raw.starts_with(['+', '-']));
    let digits_len = raw[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len() - sign_len);
    raw[..sign_len + digits_len].parse().ok()
}

/// Batch size from an import document field
///
/// Returns `None` when the field is not a JSON number, so the caller keeps
/// its current value. Fractions are truncated.
pub fn batch_size_from_json(value: &Value) -> Option<u32> {
    let Value::Number(number) = value else {
        return None;
    };
    let size = if let Some(size) = number.as_u64() {
        size
    } else {
        // negative integers and floats
        let float = number.as_f64().unwrap_or(0.0);
        if float.is_finite() && float >= 1.0 {
            float.trunc() as u64
        } else {
            0
        }
    };

    if size == 0 {
        tracing::debug!(%number, "Non-positive batch_size in import, using default");
        return Some(DEFAULT_BATCH_SIZE);
    }
    Some(u32::try_from(size).unwrap_or(DEFAULT_BATCH_SIZE))
}

/// Decode a boolean stanza property
///
/// `"1"` and `"true"` (any case) are true, anything else is false.
pub fn parse_remote_bool(raw: &str) -> bool {
    let raw = raw.trim();
    raw == "1" || raw.eq_ignore_ascii_case("true")
}

/// Stanza encoding of the batching flag
pub fn encode_batching(enabled: bool) -> &'static str {
    if enabled {
        "true"
    } else {
        "false"
    }
}

/// Stanza encoding of the local dump flag
pub fn encode_local_dump(enabled: bool) -> &'static str {
    if enabled {
        "1"
    } else {
        "0"
    }
}

//! Persisted value shapes for the key/value entries.
//!
//! `checked` is a JSON array of booleans, one per question id.
//! `showPatterns` is a JSON array containing a single boolean.
//!
//! Decoding is deliberately forgiving: completion flags are non-critical
//! convenience data, so a malformed value decodes to `None` and callers
//! fall back to the documented default instead of surfacing an error.

/// Key for the per-question completion flags.
pub const CHECKED_KEY: &str = "checked";

/// Key for the pattern-column visibility flag.
pub const SHOW_PATTERNS_KEY: &str = "showPatterns";

/// Decodes the `checked` value. Malformed input reads as absent.
#[must_use]
pub fn decode_checked(raw: &str) -> Option<Vec<bool>> {
    serde_json::from_str(raw).ok()
}

/// Encodes the `checked` value.
#[must_use]
pub fn encode_checked(flags: &[bool]) -> String {
    serde_json::to_string(flags).unwrap_or_else(|_| "[]".to_string())
}

/// Decodes the `showPatterns` value. Malformed or empty input reads as
/// absent.
#[must_use]
pub fn decode_show_patterns(raw: &str) -> Option<bool> {
    let values: Vec<bool> = serde_json::from_str(raw).ok()?;
    values.first().copied()
}

/// Encodes the `showPatterns` value as a one-element array.
#[must_use]
pub fn encode_show_patterns(visible: bool) -> String {
    serde_json::to_string(&[visible]).unwrap_or_else(|_| "[true]".to_string())
}

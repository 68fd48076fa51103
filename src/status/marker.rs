//! Marker-delimited embedding of the status record in an issue body.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use super::record::StatusRecord;

/// Opens the marker block holding the encoded record.
pub const STATUS_MARKER: &str = "<!-- status.quarkus.io/status:";

/// Closes the marker block.
pub const END_OF_MARKER: &str = "-->";

// Non-greedy across newlines; tolerates CRLF bodies.
static STATUS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!-- status\.quarkus\.io/status:\r?\n(.*?)\r?\n-->")
        .expect("constant regex pattern is valid")
});

/// Extracts the status record embedded in `body`.
///
/// Returns `Ok(None)` when the body is blank or carries no marker block.
///
/// # Errors
///
/// Returns a decode error when a marker block is present but its contents
/// do not parse; callers treat this as "no prior record" after warning.
pub fn extract_record(body: &str) -> Result<Option<StatusRecord>, serde_yaml::Error> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let Some(captures) = STATUS_PATTERN.captures(body) else {
        return Ok(None);
    };
    serde_yaml::from_str(&captures[1]).map(Some)
}

/// Rewrites `body` so it carries exactly `record` in its marker block.
///
/// Replaces the first existing marker block in place, or appends a new one
/// after a blank line when the body has none.
///
/// # Errors
///
/// Returns an encode error if the record cannot be serialized; the caller
/// must treat this as fatal rather than dropping the status history.
pub fn embed_record(body: &str, record: &StatusRecord) -> Result<String, serde_yaml::Error> {
    let encoded = serde_yaml::to_string(record)?;
    let block = format!("{STATUS_MARKER}\n{encoded}{END_OF_MARKER}");

    if !body.contains(STATUS_MARKER) {
        return Ok(format!("{body}\n\n{block}"));
    }

    Ok(STATUS_PATTERN.replace(body, NoExpand(&block)).into_owned())
}

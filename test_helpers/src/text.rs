//! Text helpers for comparing emitted documents.

use anyhow::{Context, Result};
use serde_json::Value;

/// Parses `text` as JSON, attaching the text to any failure.
///
/// # Errors
///
/// Returns an error if `text` is not valid JSON.
pub fn parse_json(text: &str) -> Result<Value> {
    serde_json::from_str(text).with_context(|| format!("invalid JSON:\n{text}"))
}

/// Collects the member names of `value` in storage order.
///
/// Non-object values yield no names.
#[must_use]
pub fn member_names(value: &Value) -> Vec<String> {
    value
        .as_object()
        .map(|members| members.keys().cloned().collect())
        .unwrap_or_default()
}

/// Counts the leading spaces of every indented line in `text`.
#[must_use]
pub fn indentation_widths(text: &str) -> Vec<usize> {
    text.lines()
        .map(|line| line.len() - line.trim_start_matches(' ').len())
        .filter(|width| *width > 0)
        .collect()
}

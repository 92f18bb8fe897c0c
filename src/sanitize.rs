//! Pulls a JSON object out of free-form model output.
//!
//! Models are asked to return bare JSON but routinely wrap it in a fenced
//! code block. Only that wrapping is undone here; anything else that is not a
//! single JSON object is rejected.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::constants::EXCERPT_CHARS;

const FENCE: &str = "```";

#[allow(clippy::expect_used)]
static FIRST_FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```").expect("fenced block pattern is valid")
});

#[allow(clippy::expect_used)]
static ANY_FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("fence strip pattern is valid"));

/// Reasons a model reply could not be turned into JSON.
#[derive(Debug, Error)]
pub enum SanitizeError {
    /// The cleaned text is not delimited by `{` and `}`.
    #[error("Response doesn't appear to be JSON. Got: {excerpt}...")]
    NotJson {
        /// Leading characters of the cleaned text.
        excerpt: String,
    },
    /// The cleaned text looked like an object but failed to parse.
    #[error("{0}")]
    ParseError(#[from] serde_json::Error),
}

/// Returns at most `max` leading characters of `text`, never splitting a char.
pub fn excerpt(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Strips fenced block markup and returns the text that should hold the object.
pub fn strip_fences(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.contains(FENCE) {
        return trimmed.to_string();
    }

    match FIRST_FENCED_BLOCK.captures(trimmed) {
        Some(captures) => captures
            .get(1)
            .map(|inner| inner.as_str().trim().to_string())
            .unwrap_or_default(),
        None => ANY_FENCED_BLOCK.replace_all(trimmed, "").trim().to_string(),
    }
}

/// Extracts and parses the JSON object carried by a model reply.
///
/// The value is returned as parsed; no fields are checked or defaulted.
pub fn extract_json(raw: &str) -> Result<Value, SanitizeError> {
    let candidate = strip_fences(raw);
    debug!("Cleaned text: {}", candidate);

    if !candidate.starts_with('{') || !candidate.ends_with('}') {
        return Err(SanitizeError::NotJson {
            excerpt: excerpt(&candidate, EXCERPT_CHARS),
        });
    }

    Ok(serde_json::from_str(&candidate)?)
}

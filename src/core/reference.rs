//! Google Drive reference normalization.
//!
//! Users may pass a bare file/folder ID or any of several historical link
//! shapes. [`extract`] reduces all of them to the canonical identifier: a run
//! of 25 or more characters from `[A-Za-z0-9_-]`.
//!
//! Matching is two ordered predicates:
//!
//! 1. [`match_link`] searches for a known link prefix (or a word boundary)
//!    followed by an identifier and returns the captured identifier.
//! 2. [`match_bare`] accepts the whole input only if it is an identifier from
//!    end to end.
//!
//! Word boundaries are ASCII-only, so a non-ASCII letter next to an
//! identifier neither hides it nor cuts it short.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::error::ReferenceError;

lazy_static! {
    static ref LINK_PATTERN: Regex = Regex::new(
        r"(?:(?:https?://drive\.google\.com/(?:file/d/|open\?id=|drive/folders/|folderview\?id=))|(?:(?-u:\b)))([a-zA-Z0-9_-]{25,})(?:(?-u:\b)|\?|$)"
    )
    .unwrap();
    static ref BARE_PATTERN: Regex = Regex::new(r"^[a-zA-Z0-9_-]{25,}$").unwrap();
}

/// Extract the canonical Drive identifier from an ID or link.
///
/// # Errors
///
/// Returns `ReferenceError::Unrecognized` carrying the original input when
/// neither predicate matches.
pub fn extract(input: &str) -> Result<String, ReferenceError> {
    if let Some(id) = match_link(input) {
        debug!(id, "matched drive link");
        return Ok(id.to_string());
    }

    if let Some(id) = match_bare(input) {
        debug!(id, "matched bare drive id");
        return Ok(id.to_string());
    }

    Err(ReferenceError::Unrecognized(input.to_string()))
}

/// Find an identifier embedded in a known link shape or standing as a word.
pub fn match_link(input: &str) -> Option<&str> {
    LINK_PATTERN
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|id| !id.is_empty())
}

/// Accept the input only when all of it is an identifier.
pub fn match_bare(input: &str) -> Option<&str> {
    BARE_PATTERN.is_match(input).then_some(input)
}

/// Whether `s` is already a canonical identifier.
pub fn is_canonical(s: &str) -> bool {
    match_bare(s).is_some()
}

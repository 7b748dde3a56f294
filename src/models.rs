//! Delete Models
//!
//! Task identity, per-item visual state and request results.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;

use crate::error::DeleteError;

/// Characters that would break out of a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Opaque task identifier as rendered by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    /// Build from a raw attribute value. Blank values are rejected.
    pub fn parse(raw: &str) -> Result<Self, DeleteError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DeleteError::MissingTaskId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Percent-encoded form, safe to append to a path
    pub fn path_segment(&self) -> String {
        utf8_percent_encode(&self.0, PATH_SEGMENT).to_string()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visual lifecycle of one list item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Normal,
    PendingDelete,
    Removed,
    /// Request failed; the pending style is left in place
    StuckPending,
}

/// Inline style applied while a delete is in flight
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PendingStyle {
    pub transition: String,
    pub background_color: String,
    pub opacity: String,
}

impl Default for PendingStyle {
    fn default() -> Self {
        Self {
            transition: "background-color 0.5s, opacity 0.5s".to_string(),
            background_color: "#f8d7da".to_string(),
            opacity: "0.6".to_string(),
        }
    }
}

/// What the server collaborator reported back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteResponse {
    pub status: u16,
}

impl DeleteResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Final result of one activation
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Removed,
    Stuck(DeleteError),
}

impl DeleteOutcome {
    pub fn state(&self) -> ItemState {
        match self {
            DeleteOutcome::Removed => ItemState::Removed,
            DeleteOutcome::Stuck(_) => ItemState::StuckPending,
        }
    }
}

//! Append-only journals: the simulated git log and the AI message history.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Classification of a simulated commit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GitEntryKind {
    /// Commit recorded when an activity completes
    ActivityComplete,

    /// Commit recorded when a decision is taken
    Decision,

    /// Commit recorded when a break-and-fix repair lands
    Fix,
}

impl FromStr for GitEntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "activity_complete" => Ok(GitEntryKind::ActivityComplete),
            "decision" => Ok(GitEntryKind::Decision),
            "fix" => Ok(GitEntryKind::Fix),
            _ => Err(format!("Invalid git entry kind: {s}")),
        }
    }
}

impl GitEntryKind {
    /// Convert to the catalog string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            GitEntryKind::ActivityComplete => "activity_complete",
            GitEntryKind::Decision => "decision",
            GitEntryKind::Fix => "fix",
        }
    }
}

/// One entry in the simulated commit journal.
///
/// The journal is append-only and ordered newest-first; ids are assigned
/// by the session from a monotonic counter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GitLogEntry {
    /// Session-assigned entry id (e.g. `log-3`)
    pub id: String,

    /// ID of the activity that produced the entry
    pub activity_id: String,

    /// Conventional-commit style message
    pub message: String,

    /// Timestamp when the entry was appended (UTC)
    pub timestamp: Timestamp,

    /// Paths of the files the simulated commit touched
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files_changed: Vec<String>,

    /// Classification of the entry
    pub kind: GitEntryKind,
}

/// One message in the AI feedback history.
///
/// Append-only, ordered by insertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiMessage {
    /// ID of the activity the feedback belongs to
    pub activity_id: String,

    /// Title of that activity
    pub activity_title: String,

    /// 1-based order of that activity within the lesson
    pub activity_order: u32,

    /// Full feedback text
    pub text: String,

    /// Whether the feedback accompanied a success outcome
    pub is_success: bool,

    /// Timestamp when the message was appended (UTC)
    pub timestamp: Timestamp,
}

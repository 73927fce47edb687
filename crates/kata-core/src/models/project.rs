//! Mock project state: virtual files, build status and the decision log.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::BuildStatus;

/// The simulated target project a lesson builds.
///
/// Created once at session start from catalog seed data and discarded on
/// teardown; there is no persistence. File paths are unique within
/// `files` (validated on catalog load).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectState {
    /// Unique identifier for the project
    pub id: String,

    /// Display name of the project
    pub name: String,

    /// Simulated build status
    pub status: BuildStatus,

    /// Ordered list of virtual source files
    pub files: Vec<ProjectFile>,

    /// Append-only log of decisions taken during the lesson
    #[serde(default)]
    pub decisions: Vec<Decision>,
}

impl ProjectState {
    /// Looks up a file by path.
    pub fn file(&self, path: &str) -> Option<&ProjectFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Replaces the content of the file at `path`.
    ///
    /// Returns `true` if a file matched. An unmatched path leaves the
    /// file list unchanged; callers are expected to only update known
    /// target files, so this is a guarded no-op rather than an error.
    pub fn update_file(&mut self, path: &str, content: impl Into<String>) -> bool {
        match self.files.iter_mut().find(|f| f.path == path) {
            Some(file) => {
                file.content = content.into();
                true
            }
            None => false,
        }
    }
}

/// A virtual source file in the mock project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectFile {
    /// Project-relative path (unique within the project)
    pub path: String,

    /// File name without the directory part
    pub name: String,

    /// Language tag for editor highlighting
    pub language: String,

    /// Current file content
    pub content: String,
}

/// A record of a user choice at a decision fork or read-and-choose.
///
/// Append-only: created by the resolver, never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Decision {
    /// ID of the activity the choice was made at
    pub activity_id: String,

    /// Title of that activity
    pub activity_title: String,

    /// Chosen option identifier, when the activity had discrete options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice: Option<String>,

    /// Timestamp when the choice was made (UTC)
    pub timestamp: Timestamp,

    /// Human-readable impact description
    pub description: String,
}

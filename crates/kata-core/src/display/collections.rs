//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers give collections a Display implementation with
//! consistent structure and graceful empty-collection handling.

use std::{fmt, ops::Index};

use super::datetime::LocalDateTime;
use crate::models::{Activity, AiMessage, GitLogEntry};

/// Newtype wrapper for displaying the activity roadmap.
///
/// Formats each activity as one numbered line with its status icon, the
/// compact view shown in the sidebar and the `status` command.
///
/// # Examples
///
/// ```rust
/// use kata_core::{display::ActivityList, Catalog};
///
/// let list = ActivityList(Catalog::builtin().activities_for("lesson-1"));
/// let output = format!("{list}");
/// assert!(output.contains("➤ Current"));
/// ```
pub struct ActivityList(pub Vec<Activity>);

impl ActivityList {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of activities in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the activities.
    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.0.iter()
    }
}

impl Index<usize> for ActivityList {
    type Output = Activity;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a ActivityList {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ActivityList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No activities found.")
        } else {
            for activity in &self.0 {
                writeln!(
                    f,
                    "{}. {} — {} ({})",
                    activity.order,
                    activity.title,
                    activity.kind_label(),
                    activity.status.with_icon()
                )?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the simulated commit journal.
///
/// Entries are expected newest-first, as the session stores them.
pub struct GitLog(pub Vec<GitLogEntry>);

impl GitLog {
    /// Check if the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of entries in the journal.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for GitLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No commits yet.")
        } else {
            for entry in &self.0 {
                writeln!(
                    f,
                    "`{}` {} ({})",
                    entry.id,
                    entry.message,
                    LocalDateTime(&entry.timestamp)
                )?;
                if !entry.files_changed.is_empty() {
                    writeln!(f, "    {}", entry.files_changed.join(", "))?;
                }
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the AI feedback history.
pub struct AiHistory(pub Vec<AiMessage>);

impl AiHistory {
    /// Check if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of messages in the history.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for AiHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No feedback yet.")
        } else {
            for message in &self.0 {
                let icon = if message.is_success { "✓" } else { "✗" };
                writeln!(
                    f,
                    "{icon} [{}] {} ({})",
                    message.activity_order,
                    message.activity_title,
                    LocalDateTime(&message.timestamp)
                )?;
                writeln!(f)?;
                writeln!(f, "{}", message.text)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::GitEntryKind;
    use jiff::Timestamp;

    #[test]
    fn test_activity_list_shows_icons_and_order() {
        let list = ActivityList(Catalog::builtin().activities_for("lesson-1"));
        let output = format!("{list}");
        assert!(output.starts_with("1. "));
        assert!(output.contains("➤ Current"));
        assert!(output.contains("🔒 Locked"));
    }

    #[test]
    fn test_empty_collections_have_placeholders() {
        assert_eq!(format!("{}", ActivityList(vec![])), "No activities found.\n");
        assert_eq!(format!("{}", GitLog(vec![])), "No commits yet.\n");
        assert_eq!(format!("{}", AiHistory(vec![])), "No feedback yet.\n");
    }

    #[test]
    fn test_git_log_lists_files_changed() {
        let log = GitLog(vec![GitLogEntry {
            id: "log-0".to_string(),
            activity_id: "act-1".to_string(),
            message: "feat: style the header".to_string(),
            timestamp: Timestamp::UNIX_EPOCH,
            files_changed: vec!["src/components/Header.tsx".to_string()],
            kind: GitEntryKind::ActivityComplete,
        }]);
        let output = format!("{log}");
        assert!(output.contains("`log-0` feat: style the header"));
        assert!(output.contains("src/components/Header.tsx"));
    }
}

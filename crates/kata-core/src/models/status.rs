//! Status enumerations for activities and the mock project build.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of activity statuses.
///
/// Statuses only ever move forward: `Locked` → `Current` → `Completed`.
/// The progression engine in [`crate::session`] enforces that no
/// transition regresses within a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    /// Activity is not yet reachable; unlocked by its predecessor
    Locked,

    /// Activity is unlocked and actionable
    Current,

    /// Activity has been completed (terminal)
    Completed,
}

impl FromStr for ActivityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "locked" => Ok(ActivityStatus::Locked),
            "current" => Ok(ActivityStatus::Current),
            "completed" => Ok(ActivityStatus::Completed),
            _ => Err(format!("Invalid activity status: {s}")),
        }
    }
}

impl ActivityStatus {
    /// Convert to the catalog string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Locked => "locked",
            ActivityStatus::Current => "current",
            ActivityStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `✓ Completed` - Checkmark for finished activities
    /// - `➤ Current` - Arrow for the actionable activity
    /// - `🔒 Locked` - Padlock for unreachable activities
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kata_core::models::ActivityStatus;
    ///
    /// assert_eq!(ActivityStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(ActivityStatus::Current.with_icon(), "➤ Current");
    /// assert_eq!(ActivityStatus::Locked.with_icon(), "🔒 Locked");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ActivityStatus::Completed => "✓ Completed",
            ActivityStatus::Current => "➤ Current",
            ActivityStatus::Locked => "🔒 Locked",
        }
    }
}

/// Type-safe enumeration of the mock project's build status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatus {
    /// Project builds and runs
    #[default]
    Ok,

    /// Project builds with warnings
    Warning,

    /// Project is broken (break-and-fix activity in progress)
    Broken,
}

impl FromStr for BuildStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ok" => Ok(BuildStatus::Ok),
            "warning" => Ok(BuildStatus::Warning),
            "broken" => Ok(BuildStatus::Broken),
            _ => Err(format!("Invalid build status: {s}")),
        }
    }
}

impl BuildStatus {
    /// Convert to the catalog string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildStatus::Ok => "ok",
            BuildStatus::Warning => "warning",
            BuildStatus::Broken => "broken",
        }
    }

    /// Get status with consistent icon formatting for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            BuildStatus::Ok => "🟢 OK",
            BuildStatus::Warning => "🟡 WARNING",
            BuildStatus::Broken => "🔴 BROKEN",
        }
    }
}

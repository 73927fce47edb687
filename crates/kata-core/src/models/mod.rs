//! Data models for lessons, activities and the mock project.
//!
//! This module contains the core domain models of the lesson session
//! engine. Display implementations live in [`crate::display::models`] to
//! keep data structures separate from presentation logic.
//!
//! # Model Overview
//!
//! - [`Lesson`]: an ordered collection of activities over one mock project
//! - [`Activity`] / [`ActivityKind`]: a step definition with its
//!   type-specific payload as a tagged union over seven variants
//! - [`ProjectState`] / [`ProjectFile`] / [`Decision`]: the simulated
//!   target project and its decision log
//! - [`GitLogEntry`] / [`AiMessage`]: append-only journals derived from
//!   engine events
//! - [`PreviewState`]: the derived, time-travel-aware storefront snapshot
//! - [`Outcome`] / [`SessionStats`]: resolved verdicts and counters
//!
//! All models are serde-serializable so catalogs can be loaded from JSON
//! configuration as well as the built-in lesson.

pub mod activity;
pub mod journal;
pub mod lesson;
pub mod outcome;
pub mod preview;
pub mod project;
pub mod status;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use activity::{
    Activity, ActivityKind, ChoiceOption, DecisionOption, EditableRegion, VideoRef, VisualRef,
};
pub use journal::{AiMessage, GitEntryKind, GitLogEntry};
pub use lesson::Lesson;
pub use outcome::{Outcome, SessionStats, XP_PER_SUCCESS};
pub use preview::{CardStyle, HeaderStyle, PreviewState, StateManagement};
pub use project::{Decision, ProjectFile, ProjectState};
pub use status::{ActivityStatus, BuildStatus};

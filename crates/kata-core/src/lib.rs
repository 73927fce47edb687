//! Core library for the Kata guided-lesson engine.
//!
//! This crate provides the business logic for running gamified coding
//! lessons: the activity progression state machine, the mock project
//! store, the decision and outcome resolver, the time-travel preview
//! calculator and the feedback playback controller. A presentation
//! layer (the `kata` CLI) sits on top of the read-only view surface
//! exposed by [`Session`].
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting
//! output:
//!
//! - **Domain Models** ([`models`]): pure data, no presentation logic
//! - **Display Wrappers** ([`display`]): [`std::fmt::Display`]
//!   implementations and collection newtypes emitting markdown
//! - **Terminal Rendering**: rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use kata_core::{Action, ActionEffect, SessionBuilder};
//!
//! # fn example() -> kata_core::Result<()> {
//! // Start the built-in lesson
//! let mut session = SessionBuilder::new().build()?;
//!
//! // Approve the AI-generated header code
//! let activity_id = session.current_activity().id.clone();
//! let effect = session.apply_action(&activity_id, Action::Approve)?;
//!
//! if let ActionEffect::Resolved(outcome) = effect {
//!     println!("+{} XP: {}", outcome.xp_delta, outcome.feedback_text);
//! }
//!
//! // The next activity is now unlocked
//! assert!(session.go_to_next_activity());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod models;
pub mod playback;
pub mod session;

// Re-export commonly used types
pub use catalog::{Catalog, FeedbackTemplate, SeedCommit};
pub use display::{ActivityList, AiHistory, GitLog, LocalDateTime};
pub use error::{Result, SessionError};
pub use models::{
    Activity, ActivityKind, ActivityStatus, AiMessage, BuildStatus, Decision, GitEntryKind,
    GitLogEntry, Lesson, Outcome, PreviewState, ProjectFile, ProjectState, SessionStats,
};
pub use playback::{FeedbackPlayback, PlaybackSnapshot};
pub use session::{Action, ActionEffect, Session, SessionBuilder, DEFAULT_LIVES};

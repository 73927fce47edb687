//! Display formatting for the session view model.
//!
//! Domain models stay presentation-free; everything user-facing goes
//! through the Display implementations and newtype wrappers in this
//! module. The output is markdown, rendered by the CLI's terminal
//! renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrapper │    │   Formatted     │
//! │ (Activity, ...) │───▶│     Types       │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - [`collections`]: collection wrappers (ActivityList, GitLog, AiHistory)
//! - [`models`]: Display implementations for individual domain models
//! - [`datetime`]: date/time formatting utilities
//!
//! # Usage Examples
//!
//! ```rust
//! use kata_core::display::ActivityList;
//! use kata_core::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let list = ActivityList(catalog.activities_for("lesson-1"));
//! let output = format!("{list}");
//! assert!(output.contains("🔒"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;

pub use collections::{ActivityList, AiHistory, GitLog};
pub use datetime::LocalDateTime;

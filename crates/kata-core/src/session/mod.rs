//! The lesson session: single owner of all mutable engine state.
//!
//! A [`Session`] is constructed from an immutable [`Catalog`] at lesson
//! start and discarded at teardown; nothing is persisted. It owns the
//! activity list and their statuses, the mock project, the journals and
//! the gamification counters, and exposes a read-only view surface for
//! presentation layers.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌───────────────┐
//! │   Actions    │   │ Progression  │   │ Project state │
//! │ (resolve.rs) │──▶│ (progress.rs)│──▶│  & journals   │
//! └──────────────┘   └──────────────┘   └───────────────┘
//!    user intent       status machine       mutations
//! ```
//!
//! All mutation is synchronous; the only asynchronous behavior is the
//! cosmetic [`FeedbackPlayback`] stream, which is decoupled from state:
//! outcomes are fully applied before any feedback starts streaming.
//!
//! ## Submodules
//!
//! - [`builder`]: factory for creating [`Session`] instances
//! - `progress`: the Locked → Current → Completed state machine
//! - `resolve`: mapping user actions to outcomes and side effects
//! - `preview`: the pure time-travel preview calculator

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use jiff::Timestamp;
use log::warn;

use crate::catalog::{FeedbackTemplate, SeedCommit};
use crate::models::{
    Activity, ActivityStatus, AiMessage, BuildStatus, Decision, GitEntryKind, GitLogEntry, Lesson,
    PreviewState, ProjectState, SessionStats,
};
use crate::playback::FeedbackPlayback;

pub mod builder;
mod preview;
mod progress;
mod resolve;


pub use builder::SessionBuilder;
pub use resolve::{Action, ActionEffect};

/// Default number of lives a session starts with.
pub const DEFAULT_LIVES: u32 = 3;

/// A single-user, in-memory lesson session.
#[derive(Debug)]
pub struct Session {
    pub(crate) lesson: Lesson,
    pub(crate) activities: Vec<Activity>,
    pub(crate) viewed_index: usize,
    pub(crate) project: ProjectState,
    /// Newest-first simulated commit journal.
    pub(crate) git_log: Vec<GitLogEntry>,
    /// Insertion-ordered AI feedback journal.
    pub(crate) ai_history: Vec<AiMessage>,
    pub(crate) feedback: BTreeMap<String, FeedbackTemplate>,
    pub(crate) playback: FeedbackPlayback,
    pub(crate) xp: u32,
    pub(crate) lives: u32,
    pub(crate) streak_days: u32,
    pub(crate) started_at: Timestamp,
    next_log_id: u64,
}

impl Session {
    pub(crate) fn new(
        lesson: Lesson,
        activities: Vec<Activity>,
        project: ProjectState,
        seed_commit: &SeedCommit,
        feedback: BTreeMap<String, FeedbackTemplate>,
        lives: u32,
    ) -> Self {
        let mut session = Self {
            lesson,
            activities,
            viewed_index: 0,
            project,
            git_log: Vec::new(),
            ai_history: Vec::new(),
            feedback,
            playback: FeedbackPlayback::new(),
            xp: 0,
            lives,
            streak_days: 1,
            started_at: Timestamp::now(),
            next_log_id: 0,
        };
        session.push_git_entry(
            &seed_commit.activity_id,
            seed_commit.message.clone(),
            seed_commit.files_changed.clone(),
            seed_commit.kind,
        );
        session.sync_build_status();
        session
    }

    // ------------------------------------------------------------------
    // Read-only view surface
    // ------------------------------------------------------------------

    /// The lesson this session runs.
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    /// All activities with their current statuses, in lesson order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Index of the activity currently being viewed.
    pub fn viewed_index(&self) -> usize {
        self.viewed_index
    }

    /// The activity currently being viewed.
    pub fn current_activity(&self) -> &Activity {
        &self.activities[self.viewed_index]
    }

    /// The mock project state.
    pub fn project(&self) -> &ProjectState {
        &self.project
    }

    /// The simulated commit journal, newest first.
    pub fn git_log(&self) -> &[GitLogEntry] {
        &self.git_log
    }

    /// The AI feedback journal, in insertion order.
    pub fn ai_history(&self) -> &[AiMessage] {
        &self.ai_history
    }

    /// The feedback playback controller.
    pub fn playback(&self) -> &FeedbackPlayback {
        &self.playback
    }

    /// Total XP earned so far.
    pub fn xp(&self) -> u32 {
        self.xp
    }

    /// Lives remaining (floored at 0; reaching 0 does not lock the
    /// session).
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Aggregate counters for the lesson-complete screen.
    pub fn stats(&self) -> SessionStats {
        let elapsed = Timestamp::now().duration_since(self.started_at);
        SessionStats {
            xp_earned: self.xp,
            lives_remaining: self.lives,
            streak_days: self.streak_days,
            elapsed_minutes: (elapsed.as_secs() / 60) as u32,
        }
    }

    /// Derived storefront preview for the current viewing position.
    ///
    /// Recomputed on every read; see [`preview::compute_preview`].
    pub fn preview_state(&self) -> PreviewState {
        preview::compute_preview(
            self.viewed_index,
            &self.completed_indices(),
            &self.project.decisions,
        )
    }

    /// Indices of all completed activities.
    pub fn completed_indices(&self) -> BTreeSet<usize> {
        self.activities
            .iter()
            .enumerate()
            .filter(|(_, a)| a.status == ActivityStatus::Completed)
            .map(|(i, _)| i)
            .collect()
    }

    // ------------------------------------------------------------------
    // Project store operations
    // ------------------------------------------------------------------

    /// Replaces the content of the virtual file at `path`.
    ///
    /// An unmatched path is a logged no-op, never an error; callers only
    /// update the target files declared on the activity.
    pub fn update_file(&mut self, path: &str, content: impl Into<String>) {
        if !self.project.update_file(path, content) {
            warn!("update_file: no project file matches path '{path}'");
        }
    }

    /// Overwrites the simulated build status.
    pub fn set_build_status(&mut self, status: BuildStatus) {
        self.project.status = status;
    }

    /// Appends a decision record. Never deduplicates; replay protection
    /// is the progression engine's Completed gate, not a store invariant.
    pub fn add_decision(&mut self, decision: Decision) {
        self.project.decisions.push(decision);
    }

    /// Appends a simulated commit, newest first, with a session-assigned
    /// id and the current timestamp.
    pub fn push_git_entry(
        &mut self,
        activity_id: &str,
        message: String,
        files_changed: Vec<String>,
        kind: GitEntryKind,
    ) {
        let entry = GitLogEntry {
            id: format!("log-{}", self.next_log_id),
            activity_id: activity_id.to_string(),
            message,
            timestamp: Timestamp::now(),
            files_changed,
            kind,
        };
        self.next_log_id += 1;
        self.git_log.insert(0, entry);
    }

    pub(crate) fn push_ai_message(&mut self, index: usize, text: String, is_success: bool) {
        let activity = &self.activities[index];
        self.ai_history.push(AiMessage {
            activity_id: activity.id.clone(),
            activity_title: activity.title.clone(),
            activity_order: activity.order,
            text,
            is_success,
            timestamp: Timestamp::now(),
        });
    }
}

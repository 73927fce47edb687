//! The decision & outcome resolver.
//!
//! Maps a user's in-activity action to a success/failure [`Outcome`]
//! plus its side effects: file/status mutations, journal appends, the
//! XP/lives bookkeeping and the progression transition. The per-kind
//! success rules are concentrated here in one dispatch rather than
//! scattered across the activity variants.
//!
//! Outcome application is eager: all mutations land before the caller
//! starts streaming the feedback text, so an aborted stream can never
//! corrupt session state.

use jiff::Timestamp;
use log::{debug, info};

use crate::catalog::{DEFAULT_FAILURE_KEY, DEFAULT_SUCCESS_KEY};
use crate::error::{Result, SessionError};
use crate::models::{
    ActivityKind, ActivityStatus, BuildStatus, Decision, GitEntryKind, Outcome, XP_PER_SUCCESS,
};
use crate::session::Session;

/// A user action at the rendering boundary.
///
/// Each variant mirrors one presentation-layer callback; all of them are
/// pure triggers into the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Approve AI-generated code as-is (quality review)
    Approve,

    /// Ask the assistant to regenerate its code (quality review)
    Regenerate,

    /// Replace the generated code with a hand edit (quality review)
    Edit { code: String },

    /// Submit code for a constrained edit, video or visual activity
    Submit { code: String },

    /// Choose an option at a decision fork or read-and-choose
    Decide { option_id: String },

    /// Submit a repair attempt for a break-and-fix activity
    Fix { code: String },

    /// Report a failed attempt without submitting code
    ReportError,

    /// Ask for a hint
    RequestHint,
}

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::Approve => "approve",
            Action::Regenerate => "regenerate",
            Action::Edit { .. } => "edit",
            Action::Submit { .. } => "submit",
            Action::Decide { .. } => "decide",
            Action::Fix { .. } => "fix",
            Action::ReportError => "error",
            Action::RequestHint => "hint",
        }
    }
}

/// What an applied action produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEffect {
    /// The action counted as an attempt and resolved to a verdict
    Resolved(Outcome),

    /// The action only produced feedback text to stream (hints,
    /// regeneration); no verdict, no XP or lives change
    Feedback { text: String },
}

/// Substring patterns accepted as a defensive access on the iterated
/// array. A heuristic for the simulated environment, not static
/// analysis.
const DEFENSIVE_PATTERNS: &[&str] = &["?.", "|| []", "?? []"];

fn looks_defensive(code: &str) -> bool {
    DEFENSIVE_PATTERNS.iter().any(|p| code.contains(p))
}

impl Session {
    /// Applies a user action to the named activity.
    ///
    /// Completed activities are terminal: replaying an action against
    /// one is rejected, so a finished decision fork can never grow a
    /// second decision record and no activity awards XP twice.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown activity ids, already-completed
    /// activities, options that do not exist, or actions that do not
    /// apply to the activity's kind. Wrong answers are not errors; they
    /// resolve to failure outcomes.
    pub fn apply_action(&mut self, activity_id: &str, action: Action) -> Result<ActionEffect> {
        let index = self.activity_index(activity_id)?;
        if self.activities[index].status == ActivityStatus::Completed {
            return Err(SessionError::ActivityCompleted {
                id: activity_id.to_string(),
            });
        }
        debug!(
            "applying action '{}' to activity '{activity_id}'",
            action.label()
        );

        match (&self.activities[index].kind, action) {
            (ActivityKind::QualityReview { .. }, Action::Approve) => {
                self.commit_target_files(index);
                self.finish_success(index, "quality-review.approve")
            }
            (ActivityKind::QualityReview { .. }, Action::Edit { code }) => {
                self.submit_to_primary_target(index, &code);
                self.commit_target_files(index);
                self.finish_success(index, "quality-review.edit")
            }
            (ActivityKind::QualityReview { .. }, Action::Regenerate) => {
                Ok(self.feedback_only("quality-review.generate"))
            }

            (ActivityKind::ConstrainedEdit { .. }, Action::Submit { code }) => {
                self.submit_to_primary_target(index, &code);
                self.commit_target_files(index);
                self.finish_success(index, "constrained-edit.success")
            }
            (ActivityKind::ConstrainedEdit { .. }, Action::RequestHint) => {
                Ok(self.feedback_only("constrained-edit.hint"))
            }

            (ActivityKind::DecisionFork { options }, Action::Decide { option_id }) => {
                let option = options
                    .iter()
                    .find(|o| o.id == option_id)
                    .ok_or_else(|| SessionError::UnknownOption {
                        activity_id: activity_id.to_string(),
                        option_id: option_id.clone(),
                    })?
                    .clone();

                self.record_decision(index, Some(option.id.clone()), option.impact.clone());
                let activity = &self.activities[index];
                let (id, files) = (activity.id.clone(), activity.target_files.clone());
                self.push_git_entry(
                    &id,
                    format!("decision: {} chosen", option.label),
                    files,
                    GitEntryKind::Decision,
                );

                // Every fork option is a success; only the feedback
                // differs per chosen option.
                let key = format!("decision.{}", option.id.trim_start_matches("opt-"));
                self.finish_success(index, &key)
            }

            (ActivityKind::BreakAndFix { .. }, Action::Fix { code }) => {
                if looks_defensive(&code) {
                    self.submit_to_primary_target(index, &code);
                    self.set_build_status(BuildStatus::Ok);
                    let activity = &self.activities[index];
                    let id = activity.id.clone();
                    let target = activity.primary_target().unwrap_or_default().to_string();
                    self.push_git_entry(
                        &id,
                        format!("fix: resolve crash in {target}"),
                        vec![target.clone()],
                        GitEntryKind::Fix,
                    );
                    self.finish_success(index, "break-fix.success")
                } else {
                    self.finish_failure(index, "break-fix.failure")
                }
            }
            (ActivityKind::BreakAndFix { .. }, Action::RequestHint) => {
                Ok(self.feedback_only("break-fix.hint"))
            }

            (ActivityKind::VideoChallenge { .. }, Action::Submit { code }) => {
                self.activities[index].ensure_payload()?;
                self.submit_to_primary_target(index, &code);
                self.commit_target_files(index);
                self.finish_success(index, "video-challenge.success")
            }
            (ActivityKind::VisualImplementation { .. }, Action::Submit { code }) => {
                self.activities[index].ensure_payload()?;
                self.submit_to_primary_target(index, &code);
                self.commit_target_files(index);
                self.finish_success(index, "visual-implementation.success")
            }

            (
                ActivityKind::ReadAndChoose {
                    choices,
                    correct_choice,
                    ..
                },
                Action::Decide { option_id },
            ) => {
                let choice = choices
                    .iter()
                    .find(|c| c.id == option_id)
                    .ok_or_else(|| SessionError::UnknownOption {
                        activity_id: activity_id.to_string(),
                        option_id: option_id.clone(),
                    })?
                    .clone();

                if choice.id == *correct_choice {
                    self.record_decision(index, Some(choice.id.clone()), choice.description);
                    let activity = &self.activities[index];
                    let (id, files) = (activity.id.clone(), activity.target_files.clone());
                    self.push_git_entry(
                        &id,
                        format!("decision: {} confirmed", choice.id),
                        files,
                        GitEntryKind::Decision,
                    );
                    self.finish_success(index, "read-choose.success")
                } else {
                    self.finish_failure(index, "read-choose.failure")
                }
            }

            // An explicit failure report resolves against the default
            // failure template regardless of kind.
            (_, Action::ReportError) => self.finish_failure(index, DEFAULT_FAILURE_KEY),

            (_, action) => Err(SessionError::UnsupportedAction {
                action: action.label(),
                kind: self.activities[index].kind_label(),
            }),
        }
    }

    /// Looks up feedback text with the documented fallback chain:
    /// explicit key, then the default template for the verdict.
    pub(crate) fn feedback_text(&self, key: &str, is_success: bool) -> String {
        if let Some(template) = self.feedback.get(key) {
            return template.message.clone();
        }
        let fallback = if is_success {
            DEFAULT_SUCCESS_KEY
        } else {
            DEFAULT_FAILURE_KEY
        };
        match self.feedback.get(fallback) {
            Some(template) => template.message.clone(),
            None if is_success => "Activity complete.".to_string(),
            None => "Try again.".to_string(),
        }
    }

    fn feedback_only(&self, key: &str) -> ActionEffect {
        ActionEffect::Feedback {
            text: self.feedback_text(key, true),
        }
    }

    /// Success path: award XP, commit journal entries, advance the
    /// progression machine.
    fn finish_success(&mut self, index: usize, template_key: &str) -> Result<ActionEffect> {
        let text = self.feedback_text(template_key, true);
        self.xp += XP_PER_SUCCESS;
        self.push_ai_message(index, text.clone(), true);

        let (id, title) = {
            let activity = &self.activities[index];
            (activity.id.clone(), activity.title.clone())
        };
        self.complete_activity(&id)?;

        info!("activity '{id}' succeeded (+{XP_PER_SUCCESS} XP)");
        Ok(ActionEffect::Resolved(Outcome {
            is_success: true,
            xp_delta: XP_PER_SUCCESS,
            feedback_text: text,
            activity_title: title,
            lesson_complete: index + 1 == self.activities.len(),
        }))
    }

    /// Failure path: decrement lives (floored at 0), journal the
    /// feedback, leave the progression machine untouched.
    fn finish_failure(&mut self, index: usize, template_key: &str) -> Result<ActionEffect> {
        let text = self.feedback_text(template_key, false);
        self.lives = self.lives.saturating_sub(1);
        self.push_ai_message(index, text.clone(), false);

        let title = self.activities[index].title.clone();
        info!(
            "activity '{}' attempt failed ({} lives left)",
            self.activities[index].id, self.lives
        );
        Ok(ActionEffect::Resolved(Outcome {
            is_success: false,
            xp_delta: 0,
            feedback_text: text,
            activity_title: title,
            lesson_complete: false,
        }))
    }

    fn submit_to_primary_target(&mut self, index: usize, code: &str) {
        if let Some(path) = self.activities[index].primary_target().map(str::to_string) {
            self.update_file(&path, code);
        }
    }

    /// Appends the conventional activity-complete commit for the
    /// activity's declared target files.
    fn commit_target_files(&mut self, index: usize) {
        let activity = &self.activities[index];
        let (id, title, files) = (
            activity.id.clone(),
            activity.title.clone(),
            activity.target_files.clone(),
        );
        self.push_git_entry(
            &id,
            format!("feat: {title} completed"),
            files,
            GitEntryKind::ActivityComplete,
        );
    }

    fn record_decision(&mut self, index: usize, choice: Option<String>, description: String) {
        let activity = &self.activities[index];
        let decision = Decision {
            activity_id: activity.id.clone(),
            activity_title: activity.title.clone(),
            choice,
            timestamp: Timestamp::now(),
            description,
        };
        self.add_decision(decision);
    }
}

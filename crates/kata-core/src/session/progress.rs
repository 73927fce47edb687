//! The activity progression state machine.
//!
//! Per-activity states are `Locked`, `Current` and `Completed`; the only
//! transitions are Locked → Current (triggered by the predecessor's
//! completion, or by being the first activity at initialization) and
//! Current → Completed (triggered by a success outcome). No transition
//! ever regresses.

use log::{debug, info};

use crate::error::{Result, SessionError};
use crate::models::{ActivityKind, ActivityStatus, BuildStatus};
use crate::session::Session;

impl Session {
    /// Marks the named activity `Completed` and promotes its immediate
    /// successor from `Locked` to `Current`.
    ///
    /// Idempotent on an already-completed activity (the successor's
    /// unlock is reconfirmed). Activities beyond the immediate successor
    /// are never touched; completing the last activity unlocks nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ActivityNotFound`] for an unknown id.
    pub fn complete_activity(&mut self, activity_id: &str) -> Result<()> {
        let index = self.activity_index(activity_id)?;

        if self.activities[index].status != ActivityStatus::Completed {
            self.activities[index].status = ActivityStatus::Completed;
            info!(
                "activity '{}' completed ({}/{})",
                activity_id,
                index + 1,
                self.activities.len()
            );
        }

        if let Some(next) = self.activities.get_mut(index + 1) {
            if next.status == ActivityStatus::Locked {
                next.status = ActivityStatus::Current;
                info!("activity '{}' unlocked", next.id);
            }
        }

        self.sync_build_status();
        Ok(())
    }

    /// Moves the viewed pointer to `index` iff that activity is not
    /// `Locked` and the index is in range.
    ///
    /// A rejected jump is a deliberate UX guard, not an error: the viewed
    /// index is left unchanged and in-flight feedback keeps playing.
    /// Returns whether the pointer moved.
    pub fn go_to_activity(&mut self, index: usize) -> bool {
        let Some(target) = self.activities.get(index) else {
            debug!("go_to_activity: index {index} out of range");
            return false;
        };
        if target.status == ActivityStatus::Locked {
            debug!("go_to_activity: activity '{}' is locked", target.id);
            return false;
        }
        self.move_viewed_index(index);
        true
    }

    /// Moves the viewed pointer one position forward, clamped to the last
    /// activity. Returns whether the pointer moved.
    pub fn go_to_next_activity(&mut self) -> bool {
        if self.viewed_index + 1 >= self.activities.len() {
            return false;
        }
        self.move_viewed_index(self.viewed_index + 1);
        true
    }

    /// Moves the viewed pointer one position back, clamped to the first
    /// activity. Returns whether the pointer moved.
    pub fn go_to_previous_activity(&mut self) -> bool {
        if self.viewed_index == 0 {
            return false;
        }
        self.move_viewed_index(self.viewed_index - 1);
        true
    }

    /// Whether the viewed activity is completed, i.e. the learner may
    /// advance past it.
    pub fn can_advance(&self) -> bool {
        self.current_activity().status == ActivityStatus::Completed
    }

    /// Whether the viewed activity is the last one and completed.
    pub fn is_lesson_complete(&self) -> bool {
        self.viewed_index + 1 == self.activities.len() && self.can_advance()
    }

    pub(crate) fn activity_index(&self, activity_id: &str) -> Result<usize> {
        self.activities
            .iter()
            .position(|a| a.id == activity_id)
            .ok_or_else(|| SessionError::ActivityNotFound {
                id: activity_id.to_string(),
            })
    }

    /// Any move of the viewed pointer cancels in-flight feedback so no
    /// partial text leaks into the next activity's view.
    fn move_viewed_index(&mut self, index: usize) {
        self.viewed_index = index;
        self.playback.reset();
        self.sync_build_status();
    }

    /// Entering an incomplete break-and-fix activity breaks the mock
    /// build; leaving it (or completing it) restores OK.
    pub(crate) fn sync_build_status(&mut self) {
        let viewing_broken_fix = {
            let activity = &self.activities[self.viewed_index];
            matches!(activity.kind, ActivityKind::BreakAndFix { .. })
                && activity.status != ActivityStatus::Completed
        };

        if viewing_broken_fix {
            self.project.status = BuildStatus::Broken;
        } else if self.project.status == BuildStatus::Broken {
            self.project.status = BuildStatus::Ok;
        }
    }
}

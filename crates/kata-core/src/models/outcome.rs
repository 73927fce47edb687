//! Resolved outcomes and session statistics.

use serde::{Deserialize, Serialize};

/// XP awarded for every successful activity.
///
/// A flat reward rather than one proportional to difficulty; a deliberate
/// simplification inherited from the lesson design.
pub const XP_PER_SUCCESS: u32 = 25;

/// The resolved verdict for a user action that counts as an attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the attempt succeeded
    pub is_success: bool,

    /// XP awarded (always [`XP_PER_SUCCESS`] on success, 0 on failure)
    pub xp_delta: u32,

    /// Canned feedback text for playback
    pub feedback_text: String,

    /// Title of the activity the outcome belongs to
    pub activity_title: String,

    /// Whether this outcome completed the final activity of the lesson
    pub lesson_complete: bool,
}

/// Aggregate counters surfaced on the lesson-complete screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionStats {
    /// Total XP earned this session
    pub xp_earned: u32,

    /// Lives remaining (floored at 0, never negative)
    pub lives_remaining: u32,

    /// Streak in days (cosmetic; the engine does no calendar tracking)
    pub streak_days: u32,

    /// Minutes elapsed since the session started
    pub elapsed_minutes: u32,
}

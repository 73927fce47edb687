//! Display implementations for domain models.
//!
//! All implementations emit markdown for rich terminal rendering, with
//! status icons and structured sections.

use std::fmt;

use crate::models::{
    Activity, ActivityKind, ActivityStatus, BuildStatus, GitEntryKind, Lesson, Outcome,
    PreviewState, ProjectState, SessionStats, StateManagement,
};

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for GitEntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- Project: {}", self.project_name)?;
        writeln!(f, "- Activities: {}", self.total_activities)?;
        writeln!(f, "- Estimated: {} min", self.estimated_minutes)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        Ok(())
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {}. {} ({})",
            self.order,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Type: {}", self.kind_label())?;
        if !self.target_files.is_empty() {
            writeln!(f, "- Files: {}", self.target_files.join(", "))?;
        }
        writeln!(f)?;
        writeln!(f, "**Objective:** {}", self.objective)?;
        writeln!(f)?;
        writeln!(f, "{}", self.instructions)?;

        match &self.kind {
            ActivityKind::DecisionFork { options } => {
                writeln!(f)?;
                for option in options {
                    writeln!(f, "- `{}` — {}: {}", option.id, option.label, option.description)?;
                }
            }
            ActivityKind::ReadAndChoose {
                snippet, choices, ..
            } => {
                writeln!(f)?;
                writeln!(f, "```\n{snippet}\n```")?;
                writeln!(f)?;
                for choice in choices {
                    writeln!(f, "- `{}` — {}", choice.id, choice.description)?;
                }
            }
            ActivityKind::BreakAndFix { error_message, .. } => {
                writeln!(f)?;
                writeln!(f, "```\n{error_message}\n```")?;
            }
            _ => {}
        }

        Ok(())
    }
}

impl fmt::Display for ProjectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.name, self.status.with_icon())?;
        writeln!(f)?;
        for file in &self.files {
            writeln!(f, "- {}", file.path)?;
        }
        Ok(())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success {
            writeln!(f, "✓ **{}** complete (+{} XP)", self.activity_title, self.xp_delta)?;
        } else {
            writeln!(f, "✗ **{}** attempt failed", self.activity_title)?;
        }
        if self.lesson_complete {
            writeln!(f)?;
            writeln!(f, "🏆 Lesson complete!")?;
        }
        Ok(())
    }
}

impl fmt::Display for PreviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Preview")?;
        writeln!(f)?;
        if let Some(badge) = &self.update_badge {
            writeln!(f, "> {badge}")?;
            writeln!(f)?;
        }
        writeln!(
            f,
            "- Header: {}",
            match self.header_style {
                crate::models::HeaderStyle::Basic => "basic",
                crate::models::HeaderStyle::Styled => "styled",
            }
        )?;
        writeln!(
            f,
            "- Cards: {}",
            match self.card_style {
                crate::models::CardStyle::Basic => "basic",
                crate::models::CardStyle::Enhanced => "enhanced",
            }
        )?;
        writeln!(
            f,
            "- State: {}",
            match self.state_management {
                StateManagement::None => "none",
                StateManagement::Context => "context + reducer",
                StateManagement::Zustand => "zustand",
                StateManagement::LocalStorage => "localStorage hook",
            }
        )?;
        writeln!(
            f,
            "- Checkout: {}",
            if self.checkout_working {
                "working"
            } else {
                "not wired"
            }
        )?;
        writeln!(f, "- Cart: {} item(s)", self.cart_count)?;
        Ok(())
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- XP earned: {}", self.xp_earned)?;
        writeln!(f, "- Lives remaining: {}", self.lives_remaining)?;
        writeln!(f, "- Streak: {} day(s)", self.streak_days)?;
        writeln!(f, "- Elapsed: {} min", self.elapsed_minutes)?;
        Ok(())
    }
}

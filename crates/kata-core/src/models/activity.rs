//! Activity model and the tagged union over activity kinds.

use serde::{Deserialize, Serialize};

use super::ActivityStatus;

/// One discrete step in a lesson.
///
/// The type-specific payload lives in [`ActivityKind`], a sum type over
/// the seven supported activity variants. The per-kind success rules are
/// concentrated in the resolver's dispatch table rather than scattered
/// per variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Unique identifier for the activity
    pub id: String,

    /// ID of the parent lesson
    pub lesson_id: String,

    /// Order of the activity within the lesson (1-based)
    pub order: u32,

    /// Brief title of the activity
    pub title: String,

    /// One-line statement of what the learner should achieve
    pub objective: String,

    /// Detailed multi-line instructions
    pub instructions: String,

    /// Paths of the virtual project files this activity touches
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_files: Vec<String>,

    /// Current status of the activity
    pub status: ActivityStatus,

    /// Type-specific payload
    #[serde(flatten)]
    pub kind: ActivityKind,
}

impl Activity {
    /// Name of the activity kind, for journals and display.
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            ActivityKind::QualityReview { .. } => "Quality Review",
            ActivityKind::ConstrainedEdit { .. } => "Constrained Edit",
            ActivityKind::DecisionFork { .. } => "Decision Fork",
            ActivityKind::BreakAndFix { .. } => "Break & Fix",
            ActivityKind::VideoChallenge { .. } => "Video Challenge",
            ActivityKind::VisualImplementation { .. } => "Visual Implementation",
            ActivityKind::ReadAndChoose { .. } => "Read & Choose",
        }
    }

    /// Primary target file for code submissions, if the activity has one.
    pub fn primary_target(&self) -> Option<&str> {
        self.target_files.first().map(String::as_str)
    }

    /// Checks that the kind-specific payload the presentation layer needs
    /// is actually present.
    ///
    /// A missing video or visual reference is a non-fatal configuration
    /// gap: the caller gets an explicit signal and can render a
    /// placeholder instead of crashing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SessionError::MissingPayload`] when a required
    /// reference is absent.
    pub fn ensure_payload(&self) -> crate::error::Result<()> {
        match &self.kind {
            ActivityKind::VideoChallenge { video: None, .. } => {
                Err(crate::error::SessionError::MissingPayload {
                    activity_id: self.id.clone(),
                    expected: "video reference",
                })
            }
            ActivityKind::VisualImplementation { visual: None, .. } => {
                Err(crate::error::SessionError::MissingPayload {
                    activity_id: self.id.clone(),
                    expected: "visual reference",
                })
            }
            _ => Ok(()),
        }
    }
}

/// Tagged union over the seven activity variants and their payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivityKind {
    /// Review AI-authored code and approve, regenerate or hand-edit it.
    QualityReview {
        /// The code the simulated assistant produced
        generated_code: String,
        /// Issues the learner is expected to spot
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        expected_issues: Vec<String>,
    },

    /// Edit only the designated regions of an existing file.
    ConstrainedEdit {
        /// Code presented in the editor
        starter_code: String,
        /// Line ranges the learner may touch
        editable_regions: Vec<EditableRegion>,
    },

    /// Pick one of several equally valid architectural options.
    DecisionFork {
        /// The options on offer; every one resolves to a success
        options: Vec<DecisionOption>,
    },

    /// Repair deliberately broken code until the heuristic check passes.
    BreakAndFix {
        /// The broken code presented in the editor
        broken_code: String,
        /// Simulated runtime error shown in the console panel
        error_message: String,
    },

    /// Watch a reference video, then apply the demonstrated pattern.
    VideoChallenge {
        /// Code presented in the editor
        starter_code: String,
        /// Reference video; absent reference is a configuration gap
        video: Option<VideoRef>,
    },

    /// Replicate a visual design from a reference image.
    VisualImplementation {
        /// Code presented in the editor
        starter_code: String,
        /// Reference image; absent reference is a configuration gap
        visual: Option<VisualRef>,
    },

    /// Read a snippet and pick the one correct interpretation.
    ReadAndChoose {
        /// Read-only snippet shown above the choices
        snippet: String,
        /// The candidate answers
        choices: Vec<ChoiceOption>,
        /// ID of the single correct choice
        correct_choice: String,
    },
}

/// One selectable option at a decision fork.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecisionOption {
    /// Stable option identifier (e.g. `opt-zustand`)
    pub id: String,

    /// Short label shown on the option card
    pub label: String,

    /// Longer description of the approach
    pub description: String,

    /// Human-readable impact recorded on the decision log
    pub impact: String,
}

/// One candidate answer at a read-and-choose activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Stable choice identifier
    pub id: String,

    /// Answer text shown on the card
    pub description: String,
}

/// A line range the learner is allowed to edit in a constrained edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditableRegion {
    /// First editable line (1-based, inclusive)
    pub start_line: u32,

    /// Last editable line (1-based, inclusive)
    pub end_line: u32,

    /// Optional hint shown next to the region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Reference video for a video challenge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoRef {
    /// Hosting-site video identifier
    pub video_id: String,

    /// Video title
    pub title: String,

    /// Duration as displayed (e.g. `10:38`)
    pub duration: String,
}

/// Reference image for a visual implementation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VisualRef {
    /// Image URL
    pub image_url: String,

    /// Optional caption under the image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Description of the expected result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
}

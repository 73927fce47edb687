//! Lesson model definition.

use serde::{Deserialize, Serialize};

/// An ordered collection of activities sharing a mock target project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lesson {
    /// Unique identifier for the lesson
    pub id: String,

    /// Title of the lesson
    pub title: String,

    /// Short description shown on the lesson list
    pub description: String,

    /// Name of the mock project the lesson builds
    pub project_name: String,

    /// Number of activities in the lesson
    pub total_activities: usize,

    /// Estimated completion time in minutes
    pub estimated_minutes: u32,
}

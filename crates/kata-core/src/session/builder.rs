//! Factory for creating [`Session`] instances.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::session::{Session, DEFAULT_LIVES};

/// Builder for configuring and creating a [`Session`].
///
/// # Examples
///
/// ```rust
/// use kata_core::SessionBuilder;
///
/// # fn example() -> kata_core::Result<()> {
/// // Run the built-in lesson with default lives
/// let session = SessionBuilder::new().build()?;
///
/// // Or pick a lesson from a custom catalog
/// let catalog = kata_core::Catalog::builtin();
/// let session = SessionBuilder::new()
///     .with_catalog(catalog)
///     .with_lesson("lesson-1")
///     .with_lives(5)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SessionBuilder {
    catalog: Option<Catalog>,
    lesson_id: Option<String>,
    lives: Option<u32>,
}

impl SessionBuilder {
    /// Creates a builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the given catalog instead of the built-in one.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Selects the lesson to run. Defaults to the catalog's first lesson.
    pub fn with_lesson(mut self, lesson_id: impl Into<String>) -> Self {
        self.lesson_id = Some(lesson_id.into());
        self
    }

    /// Overrides the starting number of lives.
    pub fn with_lives(mut self, lives: u32) -> Self {
        self.lives = Some(lives);
        self
    }

    /// Validates the catalog and constructs the session.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SessionError::Catalog`] when the catalog violates
    /// a structural invariant, or [`crate::SessionError::LessonNotFound`]
    /// when the selected lesson does not exist.
    pub fn build(self) -> Result<Session> {
        let catalog = self.catalog.unwrap_or_else(Catalog::builtin);
        catalog.validate()?;

        let lesson = match &self.lesson_id {
            Some(id) => catalog.lesson(id)?.clone(),
            None => catalog
                .lessons
                .first()
                .ok_or_else(|| crate::error::SessionError::catalog("catalog has no lessons"))?
                .clone(),
        };
        let activities = catalog.activities_for(&lesson.id);

        Ok(Session::new(
            lesson,
            activities,
            catalog.project.clone(),
            &catalog.seed_commit,
            catalog.feedback.clone(),
            self.lives.unwrap_or(DEFAULT_LIVES),
        ))
    }
}

//! Task value type.

use super::{TaskDomainError, TaskId};
use serde::{Deserialize, Serialize};

/// A single entry of the task list.
///
/// Tasks are immutable values: toggling completion produces a new task via
/// [`Task::toggled`] and leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: String,
    done: bool,
}

impl Task {
    /// Creates a pending task.
    ///
    /// No validation is applied; use [`Task::validate_description`] before
    /// constructing tasks from user input.
    #[must_use]
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self::from_parts(id, description, false)
    }

    /// Creates a task with an explicit completion flag.
    #[must_use]
    pub fn from_parts(id: TaskId, description: impl Into<String>, done: bool) -> Self {
        Self {
            id,
            description: description.into(),
            done,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the task is complete.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Returns a copy of this task with the completion flag inverted.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }

    /// Checks that a description has at least `min_chars` characters once
    /// surrounding whitespace is removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyDescription`] for blank input when
    /// `min_chars` is positive and [`TaskDomainError::DescriptionTooShort`]
    /// when the trimmed text is shorter than `min_chars`. A minimum of zero
    /// accepts any input.
    pub fn validate_description(description: &str, min_chars: usize) -> Result<(), TaskDomainError> {
        let actual = description.trim().chars().count();
        if actual == 0 && min_chars > 0 {
            return Err(TaskDomainError::EmptyDescription);
        }
        if actual < min_chars {
            return Err(TaskDomainError::DescriptionTooShort {
                min: min_chars,
                actual,
            });
        }
        Ok(())
    }
}

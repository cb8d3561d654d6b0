//! Error types for task input validation.

use thiserror::Error;

/// Errors returned while validating task input before dispatch.
///
/// The reducer itself never fails; these errors are raised by callers that
/// check user input before constructing an `add` action.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The description is shorter than the configured minimum.
    #[error("task description must have at least {min} characters, found {actual}")]
    DescriptionTooShort {
        /// Minimum number of characters after trimming.
        min: usize,
        /// Number of characters found after trimming.
        actual: usize,
    },
}

//! Task identifier generation port.

use crate::task::domain::TaskId;

/// Source of fresh task identifiers.
///
/// Implementations must never hand out the same identifier twice within a
/// process.
#[cfg_attr(test, mockall::automock)]
pub trait TaskIdGenerator: Send + Sync {
    /// Returns the next unused identifier.
    fn next_id(&self) -> TaskId;
}

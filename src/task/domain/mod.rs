//! Domain model for the task list.
//!
//! The task domain holds the task value, the action vocabulary and the pure
//! reducer that maps a task sequence and an action to the next sequence. All
//! storage and identifier concerns stay outside of the domain boundary.

mod action;
mod error;
mod ids;
mod reducer;
mod task;

pub use action::{ActionEnvelope, TaskAction};
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use reducer::dispatch;
pub use task::Task;

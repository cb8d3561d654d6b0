//! Pure reducer over the ordered task sequence.

use super::{Task, TaskAction};

/// Computes the task list that results from applying `action` to `state`.
///
/// The function is pure: the input slice is never modified and equal inputs
/// always produce equal outputs. List order is insertion order; no action
/// reorders existing tasks.
///
/// - `Add` appends its task. No validation is performed here.
/// - `Delete` drops the task with a matching identifier.
/// - `Toggle` inverts `done` on the matching task.
/// - `Unrecognized` returns the list unchanged.
///
/// `Delete` and `Toggle` with an identifier that is not present return a
/// list equal to the input.
///
/// # Examples
///
/// ```
/// use todo_state::task::domain::{Task, TaskAction, TaskId, dispatch};
///
/// let task = Task::new(TaskId::new(1), "Learn Rust");
/// let state = dispatch(&[], &TaskAction::Add(task.clone()));
/// assert_eq!(state, vec![task]);
///
/// let state = dispatch(&state, &TaskAction::Toggle(TaskId::new(1)));
/// assert!(state.iter().all(Task::is_done));
/// ```
#[must_use]
pub fn dispatch(state: &[Task], action: &TaskAction) -> Vec<Task> {
    match action {
        TaskAction::Add(task) => state.iter().chain(std::iter::once(task)).cloned().collect(),
        TaskAction::Delete(id) => state.iter().filter(|task| task.id() != *id).cloned().collect(),
        TaskAction::Toggle(id) => state
            .iter()
            .map(|task| {
                if task.id() == *id {
                    task.toggled()
                } else {
                    task.clone()
                }
            })
            .collect(),
        TaskAction::Unrecognized => state.to_vec(),
    }
}

//! To-do screen flow: an add form feeding the task-list store.

use tracing::debug;

use super::{PersistenceBridge, TaskListStore};
use crate::controller::FormController;
use crate::task::{
    domain::{Task, TaskAction, TaskDomainError, TaskId},
    ports::{KeyValueStore, TaskIdGenerator},
};

/// Name of the form field holding the new task's description.
pub const DESCRIPTION_FIELD: &str = "description";

/// Input rules for the add form.
///
/// # Examples
///
/// ```
/// use todo_state::task::services::SessionConfig;
///
/// assert_eq!(SessionConfig::default().min_description_chars, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Minimum number of characters a description needs once trimmed.
    pub min_description_chars: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_description_chars: 2,
        }
    }
}

/// One user's to-do screen: the task list, the add form and an identifier
/// source.
///
/// Input is validated here, before an `add` action is built; the reducer
/// underneath accepts whatever it is given.
#[derive(Debug)]
pub struct TodoSession<S, G> {
    store: TaskListStore<S>,
    form: FormController,
    ids: G,
    config: SessionConfig,
}

impl<S, G> TodoSession<S, G>
where
    S: KeyValueStore,
    G: TaskIdGenerator,
{
    /// Opens a session whose list is hydrated through `bridge`.
    ///
    /// `ids` builds the identifier source from the hydrated list, so new
    /// tasks never reuse an identifier that is already stored. Storage is
    /// read once.
    #[must_use]
    pub fn open<F>(bridge: PersistenceBridge<S>, ids: F, config: SessionConfig) -> Self
    where
        F: FnOnce(&[Task]) -> G,
    {
        let store = TaskListStore::new(bridge);
        let ids = ids(store.state());
        Self::from_store(store, ids, config)
    }

    /// Opens a session over an existing store.
    ///
    /// `ids` must not hand out identifiers already present in the store.
    #[must_use]
    pub fn from_store(store: TaskListStore<S>, ids: G, config: SessionConfig) -> Self {
        Self {
            store,
            form: FormController::new([(DESCRIPTION_FIELD, "")]),
            ids,
            config,
        }
    }

    /// Returns the current task list.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.store.state()
    }

    /// Returns the number of tasks in the list.
    #[must_use]
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Returns the add form.
    #[must_use]
    pub const fn form(&self) -> &FormController {
        &self.form
    }

    /// Returns the description currently typed into the add form.
    #[must_use]
    pub fn description(&self) -> &str {
        self.form.value(DESCRIPTION_FIELD).unwrap_or_default()
    }

    /// Records a change to the description field.
    pub fn on_description_change(&mut self, value: impl Into<String>) {
        self.form = self.form.on_change(DESCRIPTION_FIELD, value);
    }

    /// Adds the described task and clears the form.
    ///
    /// The stored description is kept exactly as typed; only the length
    /// check ignores surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the description is blank or shorter
    /// than [`SessionConfig::min_description_chars`]. Nothing is dispatched
    /// and the form keeps its contents.
    pub fn submit(&mut self) -> Result<Task, TaskDomainError> {
        let description = self.description();
        if let Err(err) = Task::validate_description(description, self.config.min_description_chars)
        {
            debug!(error = %err, "rejected task description");
            return Err(err);
        }
        let task = Task::new(self.ids.next_id(), description);
        self.store.dispatch(&TaskAction::Add(task.clone()));
        self.form = self.form.reset();
        Ok(task)
    }

    /// Appends an already built task.
    pub fn add(&mut self, task: Task) -> &[Task] {
        self.store.dispatch(&TaskAction::Add(task))
    }

    /// Removes the task with the given identifier.
    pub fn delete(&mut self, id: TaskId) -> &[Task] {
        self.store.dispatch(&TaskAction::Delete(id))
    }

    /// Flips the completion flag of the task with the given identifier.
    pub fn toggle(&mut self, id: TaskId) -> &[Task] {
        self.store.dispatch(&TaskAction::Toggle(id))
    }
}

//! Stateful holder that commits reduced task lists and keeps them durable.

use tracing::debug;

use super::PersistenceBridge;
use crate::task::{
    domain::{Task, TaskAction, dispatch},
    ports::KeyValueStore,
};

/// Owns the current task list and routes every change through the reducer.
///
/// The list can only change through [`TaskListStore::dispatch`]. Every
/// dispatch that changes the list's content is written through the
/// persistence bridge before `dispatch` returns; dispatches that leave the
/// list unchanged do not touch storage.
#[derive(Debug)]
pub struct TaskListStore<S> {
    tasks: Vec<Task>,
    bridge: PersistenceBridge<S>,
}

impl<S> TaskListStore<S>
where
    S: KeyValueStore,
{
    /// Creates a store whose initial list is hydrated from storage.
    #[must_use]
    pub fn new(bridge: PersistenceBridge<S>) -> Self {
        let tasks = bridge.hydrate();
        Self { tasks, bridge }
    }

    /// Creates a store with an explicit initial list, without reading
    /// storage. The seeded list is written through the bridge immediately.
    #[must_use]
    pub fn with_state(bridge: PersistenceBridge<S>, tasks: Vec<Task>) -> Self {
        bridge.persist(&tasks);
        Self { tasks, bridge }
    }

    /// Returns the current task list.
    #[must_use]
    pub fn state(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the persistence bridge.
    #[must_use]
    pub const fn bridge(&self) -> &PersistenceBridge<S> {
        &self.bridge
    }

    /// Applies `action` and returns the committed list.
    pub fn dispatch(&mut self, action: &TaskAction) -> &[Task] {
        let next = dispatch(&self.tasks, action);
        if next == self.tasks {
            debug!(action = action.kind(), "dispatch left task list unchanged");
            return &self.tasks;
        }
        self.tasks = next;
        debug!(action = action.kind(), count = self.tasks.len(), "committed task list");
        self.bridge.persist(&self.tasks);
        &self.tasks
    }
}

//! Shared world state for task list BDD scenarios.

use rstest::fixture;
use todo_state::task::{
    adapters::{ids::SequentialIdGenerator, memory::InMemoryStore},
    domain::{Task, TaskDomainError, TaskId},
    services::{PersistenceBridge, PersistenceConfig, SessionConfig, TodoSession},
};

/// Session type used by the BDD world.
pub type TestSession = TodoSession<InMemoryStore, SequentialIdGenerator>;

/// Scenario world for task list behaviour tests.
pub struct TaskListWorld {
    pub storage: InMemoryStore,
    pub session: Option<TestSession>,
    pub last_submit_result: Option<Result<Task, TaskDomainError>>,
}

impl TaskListWorld {
    /// Creates a world over empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: InMemoryStore::new(),
            session: None,
            last_submit_result: None,
        }
    }

    /// Opens a fresh session over the world's storage.
    #[must_use]
    pub fn open_session(&self) -> TestSession {
        let bridge = PersistenceBridge::new(self.storage.clone(), PersistenceConfig::default());
        TodoSession::open(
            bridge,
            SequentialIdGenerator::starting_after,
            SessionConfig::default(),
        )
    }

    /// Returns the open session.
    ///
    /// # Errors
    ///
    /// Returns an error when no session has been opened yet.
    pub fn session(&self) -> Result<&TestSession, eyre::Report> {
        self.session
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no task list session opened in scenario world"))
    }

    /// Returns the open session mutably.
    ///
    /// # Errors
    ///
    /// Returns an error when no session has been opened yet.
    pub fn session_mut(&mut self) -> Result<&mut TestSession, eyre::Report> {
        self.session
            .as_mut()
            .ok_or_else(|| eyre::eyre!("no task list session opened in scenario world"))
    }

    /// Finds the identifier of the task with the given description.
    ///
    /// # Errors
    ///
    /// Returns an error when no session is open or no task matches.
    pub fn task_id(&self, description: &str) -> Result<TaskId, eyre::Report> {
        self.session()?
            .tasks()
            .iter()
            .find(|task| task.description() == description)
            .map(Task::id)
            .ok_or_else(|| eyre::eyre!("no task described as '{description}'"))
    }
}

impl Default for TaskListWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskListWorld {
    TaskListWorld::default()
}

//! Application services wiring the task reducer to its collaborators.

mod persistence;
mod session;
mod store;

pub use persistence::{DEFAULT_STORAGE_KEY, PersistenceBridge, PersistenceConfig};
pub use session::{DESCRIPTION_FIELD, SessionConfig, TodoSession};
pub use store::TaskListStore;

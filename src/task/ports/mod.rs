//! Port contracts for task-list persistence and identifier generation.
//!
//! Ports define infrastructure-agnostic interfaces injected into the task
//! services, so tests can substitute in-memory or mocked collaborators.

pub mod diagnostics;
pub mod ids;
pub mod storage;

pub use diagnostics::{NoopDiagnostics, PersistenceDiagnostics, PersistenceError};
pub use ids::TaskIdGenerator;
pub use storage::{KeyValueStore, StorageError, StorageResult};

#[cfg(test)]
pub use diagnostics::MockPersistenceDiagnostics;
#[cfg(test)]
pub use ids::MockTaskIdGenerator;
#[cfg(test)]
pub use storage::MockKeyValueStore;

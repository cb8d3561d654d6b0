//! Synchronization between the in-memory task list and durable storage.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::task::{
    domain::Task,
    ports::{KeyValueStore, NoopDiagnostics, PersistenceDiagnostics, PersistenceError},
};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Configuration for the persistence bridge.
///
/// # Examples
///
/// ```
/// use todo_state::task::services::PersistenceConfig;
///
/// assert_eq!(PersistenceConfig::default().storage_key(), "todos");
/// assert_eq!(PersistenceConfig::with_key("inbox").storage_key(), "inbox");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceConfig {
    storage_key: String,
}

impl PersistenceConfig {
    /// Creates a configuration writing under a custom key.
    #[must_use]
    pub fn with_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }

    /// Returns the key the snapshot is stored under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self::with_key(DEFAULT_STORAGE_KEY)
    }
}

/// Reads and writes the whole task list as one JSON snapshot.
///
/// Every write is a full rewrite of the snapshot; there is no delta
/// encoding, which keeps the format trivial at the cost of write volume on
/// large lists.
#[derive(Clone)]
pub struct PersistenceBridge<S> {
    storage: S,
    config: PersistenceConfig,
    diagnostics: Arc<dyn PersistenceDiagnostics>,
}

impl<S> PersistenceBridge<S>
where
    S: KeyValueStore,
{
    /// Creates a bridge over the given storage capability.
    #[must_use]
    pub fn new(storage: S, config: PersistenceConfig) -> Self {
        Self {
            storage,
            config,
            diagnostics: Arc::new(NoopDiagnostics),
        }
    }

    /// Installs an observer for degraded reads and dropped writes.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn PersistenceDiagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Returns the storage key in use.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        self.config.storage_key()
    }

    /// Returns the underlying storage capability.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads the persisted task list.
    ///
    /// A missing key or a stored `null` yields an empty list. Unreadable
    /// storage or a malformed snapshot also yields an empty list, after the
    /// failure has been logged and reported to the diagnostics hook.
    #[must_use]
    pub fn hydrate(&self) -> Vec<Task> {
        let key = self.storage_key();
        match self.try_hydrate() {
            Ok(Some(tasks)) => {
                debug!(key, count = tasks.len(), "hydrated task list");
                tasks
            }
            Ok(None) => {
                debug!(key, "no persisted task list, starting empty");
                Vec::new()
            }
            Err(err) => {
                warn!(key, error = %err, "discarding unreadable task snapshot");
                self.diagnostics.hydration_degraded(key, &err);
                Vec::new()
            }
        }
    }

    /// Loads the persisted task list, surfacing failures.
    ///
    /// Returns `Ok(None)` when nothing usable is stored: the key is absent or
    /// holds a JSON `null`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Storage`] when the read fails and
    /// [`PersistenceError::Decode`] when the snapshot is not a task list.
    pub fn try_hydrate(&self) -> Result<Option<Vec<Task>>, PersistenceError> {
        let Some(raw) = self.storage.get(self.storage_key())? else {
            return Ok(None);
        };
        serde_json::from_str::<Option<Vec<Task>>>(&raw).map_err(PersistenceError::decode)
    }

    /// Overwrites the snapshot with `tasks`.
    ///
    /// Fire-and-forget: failures are logged and reported to the diagnostics
    /// hook but never returned.
    pub fn persist(&self, tasks: &[Task]) {
        if let Err(err) = self.try_persist(tasks) {
            let key = self.storage_key();
            warn!(key, error = %err, "dropping task snapshot write");
            self.diagnostics.persist_failed(key, &err);
        }
    }

    /// Overwrites the snapshot with `tasks`, surfacing failures.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Encode`] when serialization fails and
    /// [`PersistenceError::Storage`] when the write fails.
    pub fn try_persist(&self, tasks: &[Task]) -> Result<(), PersistenceError> {
        let encoded = serde_json::to_string(tasks).map_err(PersistenceError::encode)?;
        self.storage.set(self.storage_key(), &encoded)?;
        debug!(key = self.storage_key(), count = tasks.len(), "persisted task list");
        Ok(())
    }
}

impl<S> std::fmt::Debug for PersistenceBridge<S>
where
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceBridge")
            .field("storage", &self.storage)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

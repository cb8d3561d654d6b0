//! Diagnostic hook for degraded persistence.
//!
//! Hydration and persistence never fail their callers: malformed snapshots
//! become an empty list and failed writes are dropped. This port lets a
//! caller observe those degradations instead of having them disappear.

use super::StorageError;
use std::sync::Arc;
use thiserror::Error;

/// Failures encountered while reading or writing the task snapshot.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    /// The storage capability failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The task list could not be encoded.
    #[error("failed to encode task snapshot: {0}")]
    Encode(Arc<serde_json::Error>),

    /// The stored snapshot is not a valid task list.
    #[error("failed to decode task snapshot: {0}")]
    Decode(Arc<serde_json::Error>),
}

impl PersistenceError {
    /// Wraps an encoding failure.
    #[must_use]
    pub fn encode(err: serde_json::Error) -> Self {
        Self::Encode(Arc::new(err))
    }

    /// Wraps a decoding failure.
    #[must_use]
    pub fn decode(err: serde_json::Error) -> Self {
        Self::Decode(Arc::new(err))
    }
}

/// Observer notified when persistence degrades.
///
/// Both methods default to doing nothing.
#[cfg_attr(test, mockall::automock)]
pub trait PersistenceDiagnostics: Send + Sync {
    /// Called when hydration fell back to an empty list.
    fn hydration_degraded(&self, _key: &str, _error: &PersistenceError) {}

    /// Called when a snapshot write was dropped.
    fn persist_failed(&self, _key: &str, _error: &PersistenceError) {}
}

/// Diagnostics sink that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl PersistenceDiagnostics for NoopDiagnostics {}

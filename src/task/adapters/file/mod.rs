//! Filesystem adapters for task ports.

mod store;

pub use store::FileStore;

//! Adapter implementations for task ports.

pub mod file;
pub mod ids;
pub mod memory;

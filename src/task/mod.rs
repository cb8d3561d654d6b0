//! Task-list state management.
//!
//! A task list is an ordered sequence of tasks changed only by dispatching
//! actions through a pure reducer. The store commits each reduced list and
//! writes it through a persistence bridge so the list survives restarts. The
//! module follows hexagonal architecture:
//!
//! - Domain types and the reducer in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

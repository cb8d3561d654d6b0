//! todo-state: client-side state management for a persistent task list.
//!
//! This crate provides an action-driven task-list store, two generic
//! controllers (form fields and a counter) and the synchronization that keeps
//! the task list durable across sessions.
//!
//! # Architecture
//!
//! The task module follows hexagonal architecture principles:
//!
//! - **Domain**: the task value, actions and the pure reducer
//! - **Ports**: storage, identifier generation and diagnostics traits
//! - **Adapters**: in-memory and filesystem storage, identifier generators
//! - **Services**: persistence bridge, stateful store and the to-do session
//!
//! Every transition runs synchronously to completion; there is no async
//! runtime involved.
//!
//! # Modules
//!
//! - [`controller`]: generic form and counter controllers
//! - [`task`]: task-list reducer, store and persistence

pub mod controller;
pub mod task;

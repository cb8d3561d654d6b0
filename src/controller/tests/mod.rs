//! Unit tests for the generic controllers.

//! Generic reusable state controllers.
//!
//! A controller is a small value type exposing a closed set of operations.
//! Every operation returns a new controller and leaves the receiver
//! untouched, so a caller holding the previous value can compare the two to
//! detect a change.
//!
//! - [`FormController`] tracks named string fields and resets to the values
//!   it was created with.
//! - [`CounterController`] steps an integer up and down and resets to its
//!   creation-time value.

mod counter;
mod form;

pub use counter::{CounterController, DEFAULT_COUNTER_START};
pub use form::{FormController, FormValues};

#[cfg(test)]
mod tests;

//! Integer counter state.

/// Starting value used by [`CounterController::default`].
pub const DEFAULT_COUNTER_START: i64 = 10;

/// Counter stepping by one in either direction.
///
/// No bound is enforced; the value saturates at the limits of `i64` instead
/// of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterController {
    counter: i64,
    initial: i64,
}

impl CounterController {
    /// Creates a counter starting at `initial`.
    #[must_use]
    pub const fn new(initial: i64) -> Self {
        Self {
            counter: initial,
            initial,
        }
    }

    /// Returns the current value.
    #[must_use]
    pub const fn counter(self) -> i64 {
        self.counter
    }

    /// Returns the value the counter was created with.
    #[must_use]
    pub const fn initial(self) -> i64 {
        self.initial
    }

    /// Returns a counter one higher.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self {
            counter: self.counter.saturating_add(1),
            ..self
        }
    }

    /// Returns a counter one lower.
    #[must_use]
    pub const fn decrement(self) -> Self {
        Self {
            counter: self.counter.saturating_sub(1),
            ..self
        }
    }

    /// Returns a counter back at its creation-time value.
    #[must_use]
    pub const fn reset(self) -> Self {
        Self::new(self.initial)
    }
}

impl Default for CounterController {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTER_START)
    }
}

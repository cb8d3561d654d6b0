//! Task identifier generators.

use std::sync::atomic::{AtomicU64, Ordering};

use mockable::Clock;

use crate::task::{
    domain::{Task, TaskId},
    ports::TaskIdGenerator,
};

fn highest_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|task| task.id().value()).max().unwrap_or(0)
}

/// Hands out `1, 2, 3, ...`, or continues after an existing list.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    last: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first identifier is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// Creates a generator that never repeats an identifier in `tasks`.
    #[must_use]
    pub fn starting_after(tasks: &[Task]) -> Self {
        Self {
            last: AtomicU64::new(highest_id(tasks)),
        }
    }
}

impl TaskIdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> TaskId {
        let (Ok(previous) | Err(previous)) =
            self.last
                .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
                    Some(last.saturating_add(1))
                });
        TaskId::new(previous.saturating_add(1))
    }
}

/// Derives identifiers from the clock's UTC milliseconds.
///
/// Two calls inside the same millisecond, or a clock that steps backwards,
/// would collide, so each identifier is bumped to at least one past the
/// previous one.
#[derive(Debug)]
pub struct ClockIdGenerator<C> {
    clock: C,
    last: AtomicU64,
}

impl<C> ClockIdGenerator<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a generator reading the given clock.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            last: AtomicU64::new(0),
        }
    }

    /// Creates a generator that never repeats an identifier in `tasks`.
    #[must_use]
    pub fn starting_after(clock: C, tasks: &[Task]) -> Self {
        Self {
            clock,
            last: AtomicU64::new(highest_id(tasks)),
        }
    }

    fn now_millis(&self) -> u64 {
        u64::try_from(self.clock.utc().timestamp_millis()).unwrap_or(0)
    }
}

impl<C> TaskIdGenerator for ClockIdGenerator<C>
where
    C: Clock + Send + Sync,
{
    fn next_id(&self) -> TaskId {
        let now = self.now_millis();
        let advance = |last: u64| now.max(last.saturating_add(1));
        let (Ok(previous) | Err(previous)) =
            self.last
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(advance(last)));
        TaskId::new(advance(previous))
    }
}

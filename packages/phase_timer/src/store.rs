//! Grow-only storage for timer and counter slots.

use std::time::Duration;

use tracing::debug;

use crate::{Error, Instant, Result, accumulate};

/// Whether a timer is currently between a start and a stop.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum TimerState {
    #[default]
    Off,
    On {
        since: Instant,
    },
}

/// Storage for one timer.
#[derive(Clone, Debug, Default)]
pub(crate) struct TimerSlot {
    state: TimerState,

    // Sum of all completed intervals. Only an explicit reset brings this back down.
    accumulated: Duration,

    // Empty means unnamed.
    name: String,
}

impl TimerSlot {
    /// Does nothing if the timer is already running.
    pub(crate) fn start(&mut self, now: Instant) {
        if self.state == TimerState::Off {
            self.state = TimerState::On { since: now };
        }
    }

    /// Does nothing if the timer is not running.
    pub(crate) fn stop(&mut self, now: Instant) {
        if let TimerState::On { since } = self.state {
            self.accumulated = accumulate(self.accumulated, now.saturating_duration_since(since));
            self.state = TimerState::Off;
        }
    }

    pub(crate) fn reset(&mut self) {
        self.state = TimerState::Off;
        self.accumulated = Duration::ZERO;
    }

    pub(crate) fn is_running(&self) -> bool {
        matches!(self.state, TimerState::On { .. })
    }

    /// Completed intervals only. A running interval is not included until it is stopped.
    pub(crate) fn accumulated(&self) -> Duration {
        self.accumulated
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// Storage for one counter.
#[derive(Clone, Debug, Default)]
pub(crate) struct CounterSlot {
    value: u64,

    // Empty means unnamed.
    name: String,
}

impl CounterSlot {
    pub(crate) fn add(&mut self, n: u64) {
        self.value = self.value.saturating_add(n);
    }

    pub(crate) fn reset(&mut self) {
        self.value = 0;
    }

    pub(crate) fn value(&self) -> u64 {
        self.value
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// Index-addressed timer and counter slots.
///
/// Slot counts only ever grow. Requests for zero slots or for fewer slots than currently
/// exist are accepted and ignored, so callers can size the store speculatively.
#[derive(Debug)]
pub(crate) struct Store {
    timers: Vec<TimerSlot>,
    counters: Vec<CounterSlot>,
}

impl Store {
    pub(crate) fn new(timer_count: usize, counter_count: usize) -> Self {
        let mut store = Self {
            timers: Vec::new(),
            counters: Vec::new(),
        };

        store.set_timer_count(timer_count);
        store.set_counter_count(counter_count);
        store
    }

    pub(crate) fn timer_count(&self) -> usize {
        self.timers.len()
    }

    pub(crate) fn counter_count(&self) -> usize {
        self.counters.len()
    }

    /// Grows the timer slots to `count`, returning the resulting number of slots.
    ///
    /// Existing slots keep their state. New slots start stopped, unnamed and at zero.
    pub(crate) fn set_timer_count(&mut self, count: usize) -> usize {
        grow(&mut self.timers, count, "timer");
        self.timers.len()
    }

    /// Grows the counter slots to `count`, returning the resulting number of slots.
    ///
    /// Existing slots keep their values. New slots start at zero.
    pub(crate) fn set_counter_count(&mut self, count: usize) -> usize {
        grow(&mut self.counters, count, "counter");
        self.counters.len()
    }

    pub(crate) fn timer(&self, id: usize) -> Result<&TimerSlot> {
        let count = self.timers.len();
        self.timers
            .get(id)
            .ok_or(Error::TimerOutOfRange { id, count })
    }

    pub(crate) fn timer_mut(&mut self, id: usize) -> Result<&mut TimerSlot> {
        let count = self.timers.len();
        self.timers
            .get_mut(id)
            .ok_or(Error::TimerOutOfRange { id, count })
    }

    pub(crate) fn counter(&self, id: usize) -> Result<&CounterSlot> {
        let count = self.counters.len();
        self.counters
            .get(id)
            .ok_or(Error::CounterOutOfRange { id, count })
    }

    pub(crate) fn counter_mut(&mut self, id: usize) -> Result<&mut CounterSlot> {
        let count = self.counters.len();
        self.counters
            .get_mut(id)
            .ok_or(Error::CounterOutOfRange { id, count })
    }

    pub(crate) fn timers(&self) -> &[TimerSlot] {
        &self.timers
    }

    pub(crate) fn counters(&self) -> &[CounterSlot] {
        &self.counters
    }

    pub(crate) fn timers_mut(&mut self) -> impl Iterator<Item = &mut TimerSlot> {
        self.timers.iter_mut()
    }

    pub(crate) fn counters_mut(&mut self) -> impl Iterator<Item = &mut CounterSlot> {
        self.counters.iter_mut()
    }
}

/// Extends `slots` with default values up to `count`. Never shrinks.
///
/// # Panics
///
/// Panics if memory for `count` slots cannot be reserved.
fn grow<T: Default>(slots: &mut Vec<T>, count: usize, kind: &str) {
    let Some(additional) = count.checked_sub(slots.len()).filter(|n| *n > 0) else {
        return;
    };

    debug!(from = slots.len(), to = count, kind, "growing slots");

    if let Err(e) = slots.try_reserve_exact(additional) {
        panic!("cannot grow to {count} {kind} slots: {e}");
    }

    slots.resize_with(count, T::default);
}

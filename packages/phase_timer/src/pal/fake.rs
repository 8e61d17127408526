//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::pal::{Platform, TimeSource};

/// Fake platform whose clock only moves when a test advances it.
///
/// Clones share the same elapsed time, so a test can keep one handle and move time forward
/// while a `PhaseTimer` holds a time source created from another clone.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    epoch: Instant,
    elapsed: Arc<Mutex<Duration>>,
}

impl FakePlatform {
    pub(crate) fn new() -> Self {
        Self {
            epoch: Instant::now(),
            elapsed: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Moves the fake clock forward for all clones of this platform.
    pub(crate) fn advance(&self, by: Duration) {
        let mut elapsed = self
            .elapsed
            .lock()
            .expect("FakePlatform state lock should not be poisoned");

        *elapsed = elapsed.saturating_add(by);
    }
}

impl Platform for FakePlatform {
    type TimeSource = Self;

    fn new_time_source(&self) -> Self {
        self.clone()
    }
}

impl TimeSource for FakePlatform {
    fn now(&self) -> Instant {
        let elapsed = *self
            .elapsed
            .lock()
            .expect("FakePlatform state lock should not be poisoned");

        self.epoch
            .checked_add(elapsed)
            .expect("fake time advanced beyond what Instant can represent")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn does_not_move_on_its_own() {
        let platform = FakePlatform::new();

        assert_eq!(platform.now(), platform.now());
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        let before = platform2.now();
        platform1.advance(Duration::from_millis(100));

        assert_eq!(
            platform2.now().saturating_duration_since(before),
            Duration::from_millis(100)
        );
    }
}

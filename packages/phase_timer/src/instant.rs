use std::time::Duration;

use crate::Clock;

/// A point in time captured from a [`Clock`].
///
/// Instants are only meaningful relative to other instants from the same process. Use
/// [`saturating_duration_since()`](Self::saturating_duration_since) to measure the gap
/// between two of them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Instant {
    inner: std::time::Instant,
}

impl Instant {
    /// Time elapsed since this instant, according to the provided clock.
    #[must_use]
    pub fn elapsed(&self, clock: &Clock) -> Duration {
        clock.now().saturating_duration_since(*self)
    }

    /// Time between `earlier` and this instant, or zero if `earlier` is actually later.
    #[must_use]
    pub fn saturating_duration_since(&self, earlier: Self) -> Duration {
        self.inner.saturating_duration_since(earlier.inner)
    }
}

impl From<std::time::Instant> for Instant {
    fn from(inner: std::time::Instant) -> Self {
        Self { inner }
    }
}

impl From<Instant> for std::time::Instant {
    fn from(instant: Instant) -> Self {
        instant.inner
    }
}

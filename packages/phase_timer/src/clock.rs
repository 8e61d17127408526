use std::time::Duration;

use crate::Instant;
use crate::pal::{Platform, PlatformFacade, TimeSource, TimeSourceFacade};

const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// A monotonic clock with at least microsecond resolution on every supported platform.
///
/// The clock hides the native time representation of the build target (performance counter
/// ticks on Windows, `clock_gettime` on Unix) and only hands out opaque [`Instant`]s. Durations
/// between them are plain [`Duration`]s that can be summed with [`accumulate()`] and converted
/// for display with [`to_millis()`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use phase_timer::{Clock, to_millis};
///
/// let clock = Clock::new();
/// let start = clock.now();
///
/// std::thread::sleep(Duration::from_millis(2));
///
/// let elapsed = start.elapsed(&clock);
/// assert!(to_millis(elapsed) >= 2.0);
/// ```
#[derive(Debug)]
pub struct Clock {
    inner: TimeSourceFacade,
}

impl Clock {
    /// Creates a clock backed by the monotonic time source of the build target.
    #[must_use]
    pub fn new() -> Self {
        Self::from_pal(&PlatformFacade::real())
    }

    #[must_use]
    pub(crate) fn from_pal(pal: &PlatformFacade) -> Self {
        Self {
            inner: pal.new_time_source(),
        }
    }

    /// Captures the current time. Never goes backward for the same clock.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.inner.now().into()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a duration into fractional milliseconds.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use phase_timer::to_millis;
///
/// assert_eq!(to_millis(Duration::from_micros(1500)), 1.5);
/// ```
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "exact below 2^53 nanoseconds (about 104 days), far beyond any measured phase"
)]
pub fn to_millis(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / NANOS_PER_MILLI
}

/// Adds a completed interval to a running total.
///
/// Saturates instead of overflowing, which is unreachable for any realistic run time.
#[must_use]
pub fn accumulate(total: Duration, period: Duration) -> Duration {
    total.saturating_add(period)
}

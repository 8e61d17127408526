use std::fmt::Debug;
use std::time::Instant;

/// A platform that can hand out monotonic time sources.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    type TimeSource: TimeSource;

    fn new_time_source(&self) -> Self::TimeSource;
}

/// A monotonic time source.
///
/// Consecutive calls to `now()` on the same time source never go backward.
pub(crate) trait TimeSource: Debug + Send + Sync {
    fn now(&self) -> Instant;
}

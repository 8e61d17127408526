//! Native monotonic counters on Unix and Windows.
//!
//! Both platforms expose a tick counter plus its tick rate, so a single time source converts
//! ticks to durations. Only the raw FFI reads differ per operating system.

mod bindings;
mod time_source;

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

pub(crate) use bindings::*;
pub(crate) use time_source::*;

#[cfg(unix)]
use self::unix::*;
#[cfg(windows)]
use self::windows::*;

use crate::pal::Platform;

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform {
    bindings: BindingsFacade::Real(BuildTargetBindings),
};

#[derive(Debug)]
pub(crate) struct BuildTargetPlatform {
    bindings: BindingsFacade,
}

impl Platform for BuildTargetPlatform {
    type TimeSource = TimeSourceImpl;

    fn new_time_source(&self) -> Self::TimeSource {
        TimeSourceImpl::new(self.bindings.clone())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::pal::TimeSource;

    #[test]
    fn time_sources_share_the_native_clock() {
        let first = BUILD_TARGET_PLATFORM.new_time_source();
        let second = BUILD_TARGET_PLATFORM.new_time_source();

        let a = first.now();
        let b = second.now();

        // Independent epochs, same underlying counter: readings stay close together.
        let gap = b
            .saturating_duration_since(a)
            .max(a.saturating_duration_since(b));
        assert!(gap < Duration::from_secs(1));
    }
}

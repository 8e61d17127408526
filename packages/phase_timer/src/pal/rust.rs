use std::time::Instant;

use crate::pal::{Platform, TimeSource};

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

/// Passthrough to `std::time::Instant`, used where no native binding exists.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

impl Platform for BuildTargetPlatform {
    type TimeSource = TimeSourceImpl;

    fn new_time_source(&self) -> Self::TimeSource {
        TimeSourceImpl
    }
}

#[derive(Debug)]
pub(crate) struct TimeSourceImpl;

impl TimeSource for TimeSourceImpl {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

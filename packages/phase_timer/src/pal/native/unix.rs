use std::time::Instant;
use std::{io, mem};

use libc::{CLOCK_MONOTONIC, timespec};

use crate::pal::native::Bindings;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// `clock_gettime` reports nanoseconds, so one tick is one nanosecond.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BuildTargetBindings;

impl Bindings for BuildTargetBindings {
    /// Uses `CLOCK_MONOTONIC` rather than the coarse variant because phase timings must
    /// resolve sub-millisecond regions.
    #[expect(
        clippy::cast_sign_loss,
        clippy::arithmetic_side_effects,
        reason = "u64 nanoseconds cover centuries of uptime and the fields are never negative"
    )]
    fn read_ticks(&self) -> u64 {
        // SAFETY: All-zero is a valid initial value for this type.
        let mut ts: timespec = unsafe { mem::zeroed() };

        // SAFETY: We are passing valid arguments, no other safety requirements.
        let result = unsafe { libc::clock_gettime(CLOCK_MONOTONIC, &raw mut ts) };

        assert!(result == 0, "{}", io::Error::last_os_error());

        ts.tv_sec as u64 * NANOS_PER_SECOND + ts.tv_nsec as u64
    }

    fn ticks_per_second(&self) -> u64 {
        NANOS_PER_SECOND
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}

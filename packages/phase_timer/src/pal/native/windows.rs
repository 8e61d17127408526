use std::time::Instant;

use windows::Win32::System::Performance::{QueryPerformanceCounter, QueryPerformanceFrequency};

use crate::pal::native::Bindings;

/// Reads the performance counter, whose tick rate is fixed at system boot.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BuildTargetBindings;

impl Bindings for BuildTargetBindings {
    fn read_ticks(&self) -> u64 {
        let mut ticks = 0_i64;

        // SAFETY: We are passing a valid pointer to a local, no other safety requirements.
        unsafe { QueryPerformanceCounter(&raw mut ticks) }
            .expect("QueryPerformanceCounter cannot fail on any supported Windows version");

        u64::try_from(ticks).expect("performance counter is never negative")
    }

    fn ticks_per_second(&self) -> u64 {
        let mut ticks_per_second = 0_i64;

        // SAFETY: We are passing a valid pointer to a local, no other safety requirements.
        unsafe { QueryPerformanceFrequency(&raw mut ticks_per_second) }
            .expect("QueryPerformanceFrequency cannot fail on any supported Windows version");

        u64::try_from(ticks_per_second).expect("performance counter frequency is never negative")
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}

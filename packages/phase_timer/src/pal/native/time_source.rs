use std::time::{Duration, Instant};

use crate::pal::TimeSource;
use crate::pal::native::{Bindings, BindingsFacade};

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Monotonic time source backed by the native tick counter, anchored to an `Instant` taken at
/// creation.
#[derive(Debug)]
pub(crate) struct TimeSourceImpl {
    rust_epoch: Instant,
    platform_epoch: u64,
    ticks_per_second: u64,

    bindings: BindingsFacade,
}

impl TimeSourceImpl {
    pub(crate) fn new(bindings: BindingsFacade) -> Self {
        let ticks_per_second = bindings.ticks_per_second();
        assert!(ticks_per_second > 0, "tick rate must be positive");

        Self {
            rust_epoch: bindings.now(),
            platform_epoch: bindings.read_ticks(),
            ticks_per_second,

            bindings,
        }
    }
}

impl TimeSource for TimeSourceImpl {
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division,
        reason = "tick counts fit comfortably in u128 and sub-nanosecond truncation is intended"
    )]
    fn now(&self) -> Instant {
        // A counter that steps backward pins the reading to the epoch.
        let elapsed_ticks = self.bindings.read_ticks().saturating_sub(self.platform_epoch);

        let elapsed_nanos =
            u128::from(elapsed_ticks) * NANOS_PER_SECOND / u128::from(self.ticks_per_second);

        self.rust_epoch
            .checked_add(Duration::from_nanos(u64::try_from(elapsed_nanos).expect(
                "unrealistically long duration, never going to happen with real clocks",
            )))
            .expect("platform timestamp beyond the end of the universe - impossible")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use mockall::Sequence;

    use super::*;
    use crate::pal::native::{BuildTargetBindings, MockBindings};

    fn mock_with_rate(rust_epoch: Instant, ticks_per_second: u64) -> MockBindings {
        let mut bindings = MockBindings::new();
        bindings.expect_now().once().return_const(rust_epoch);
        bindings
            .expect_ticks_per_second()
            .once()
            .return_const(ticks_per_second);
        bindings
    }

    #[test]
    fn nanosecond_ticks_resolve_sub_millisecond_steps() {
        let rust_epoch = Instant::now();
        let mut bindings = mock_with_rate(rust_epoch, 1_000_000_000);

        let mut seq = Sequence::new();
        bindings
            .expect_read_ticks()
            .once()
            .in_sequence(&mut seq)
            .return_const(9_000_000_000_u64);

        // A - one second elapsed.
        bindings
            .expect_read_ticks()
            .once()
            .in_sequence(&mut seq)
            .return_const(10_000_000_000_u64);

        // B - one second and 250 microseconds elapsed.
        bindings
            .expect_read_ticks()
            .once()
            .in_sequence(&mut seq)
            .return_const(10_000_250_000_u64);

        // C - one second, 250 microseconds and 7 nanoseconds elapsed.
        bindings
            .expect_read_ticks()
            .once()
            .in_sequence(&mut seq)
            .return_const(10_000_250_007_u64);

        let time_source = TimeSourceImpl::new(bindings.into());

        let a = time_source.now();
        let b = time_source.now();
        let c = time_source.now();

        assert_eq!(
            a.saturating_duration_since(rust_epoch),
            Duration::from_secs(1)
        );
        assert_eq!(b.saturating_duration_since(a), Duration::from_micros(250));
        assert_eq!(c.saturating_duration_since(b), Duration::from_nanos(7));
    }

    #[test]
    fn coarse_ticks_are_scaled_by_rate() {
        let rust_epoch = Instant::now();

        // 10 MHz, the common performance counter rate: one tick is 100 nanoseconds.
        let mut bindings = mock_with_rate(rust_epoch, 10_000_000);

        let mut seq = Sequence::new();
        bindings
            .expect_read_ticks()
            .once()
            .in_sequence(&mut seq)
            .return_const(90_000_000_u64);
        bindings
            .expect_read_ticks()
            .once()
            .in_sequence(&mut seq)
            .return_const(100_000_000_u64);
        bindings
            .expect_read_ticks()
            .once()
            .in_sequence(&mut seq)
            .return_const(100_000_003_u64);

        let time_source = TimeSourceImpl::new(bindings.into());

        let a = time_source.now();
        let b = time_source.now();

        assert_eq!(
            a.saturating_duration_since(rust_epoch),
            Duration::from_secs(1)
        );
        assert_eq!(b.saturating_duration_since(a), Duration::from_nanos(300));
    }

    #[test]
    fn counter_going_backward_does_not_move_before_epoch() {
        let rust_epoch = Instant::now();
        let mut bindings = mock_with_rate(rust_epoch, 1_000_000_000);

        let mut seq = Sequence::new();
        bindings
            .expect_read_ticks()
            .once()
            .in_sequence(&mut seq)
            .return_const(5_000_u64);
        bindings
            .expect_read_ticks()
            .once()
            .in_sequence(&mut seq)
            .return_const(1_000_u64);

        let time_source = TimeSourceImpl::new(bindings.into());

        assert_eq!(time_source.now(), rust_epoch);
    }

    #[test]
    #[should_panic(expected = "tick rate must be positive")]
    fn zero_tick_rate_is_rejected() {
        let rust_epoch = Instant::now();
        let mut bindings = MockBindings::new();
        bindings.expect_now().return_const(rust_epoch);
        bindings.expect_read_ticks().return_const(0_u64);
        bindings.expect_ticks_per_second().return_const(0_u64);

        let _time_source = TimeSourceImpl::new(bindings.into());
    }

    #[test]
    fn real_bindings_are_monotonic() {
        let time_source = TimeSourceImpl::new(BindingsFacade::Real(BuildTargetBindings));

        let mut previous = time_source.now();
        for _ in 0..1000 {
            let next = time_source.now();
            assert!(next >= previous);
            previous = next;
        }
    }
}

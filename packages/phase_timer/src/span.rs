use tracing::warn;

use crate::PhaseTimer;

/// Stops a timer of a [`PhaseTimer`] when dropped.
///
/// Returned by [`PhaseTimer::measure()`]. The span holds the phase timer exclusively, so the
/// measured region cannot record anything else into it.
///
/// # Examples
///
/// ```
/// use phase_timer::PhaseTimer;
///
/// let mut timer = PhaseTimer::new();
///
/// {
///     let _span = timer.measure(0).unwrap();
///     std::hint::black_box((0..1000).sum::<u64>());
/// }
///
/// assert!(!timer.is_running(0).unwrap());
/// ```
#[derive(Debug)]
#[must_use = "the timer is stopped as soon as the span is dropped"]
pub struct Span<'a> {
    timer: &'a mut PhaseTimer,
    id: usize,
}

impl<'a> Span<'a> {
    pub(crate) fn new(timer: &'a mut PhaseTimer, id: usize) -> Self {
        Self { timer, id }
    }

    /// The id of the timer this span stops.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }
}

impl Drop for Span<'_> {
    fn drop(&mut self) {
        if let Err(error) = self.timer.stop(self.id) {
            warn!(%error, id = self.id, "span could not stop its timer");
        }
    }
}

use crate::PhaseTimer;
use crate::pal::PlatformFacade;

pub(crate) const DEFAULT_TITLE: &str = "PhaseTimer Report";

/// Creates instances of [`PhaseTimer`].
///
/// You can obtain an instance via [`PhaseTimer::builder()`].
///
/// # Examples
///
/// ```
/// use phase_timer::PhaseTimer;
///
/// let timer = PhaseTimer::builder()
///     .timers(4)
///     .counters(2)
///     .title("Render pipeline")
///     .build();
///
/// assert_eq!(timer.timer_count(), 4);
/// assert_eq!(timer.counter_count(), 2);
/// assert!(timer.is_enabled());
/// ```
#[derive(Debug)]
#[must_use]
pub struct PhaseTimerBuilder {
    timer_count: usize,
    counter_count: usize,
    enabled: bool,
    title: String,
    platform: PlatformFacade,
}

impl PhaseTimerBuilder {
    pub(crate) fn new() -> Self {
        Self {
            timer_count: 1,
            counter_count: 1,
            enabled: true,
            title: DEFAULT_TITLE.to_string(),
            platform: PlatformFacade::real(),
        }
    }

    /// Sets the initial number of timer slots. Defaults to 1; zero keeps the default.
    pub fn timers(mut self, count: usize) -> Self {
        if count != 0 {
            self.timer_count = count;
        }

        self
    }

    /// Sets the initial number of counter slots. Defaults to 1; zero keeps the default.
    pub fn counters(mut self, count: usize) -> Self {
        if count != 0 {
            self.counter_count = count;
        }

        self
    }

    /// Sets whether measurement starts enabled. Defaults to `true`.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the title printed at the top of the console report.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[cfg(test)]
    pub(crate) fn platform(mut self, platform: PlatformFacade) -> Self {
        self.platform = platform;
        self
    }

    /// Creates the [`PhaseTimer`] with every slot stopped and at zero.
    ///
    /// # Panics
    ///
    /// Panics if memory for the requested slots cannot be reserved.
    #[must_use]
    pub fn build(self) -> PhaseTimer {
        PhaseTimer::new_inner(
            self.timer_count,
            self.counter_count,
            self.enabled,
            self.title,
            &self.platform,
        )
    }
}

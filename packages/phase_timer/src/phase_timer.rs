use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::pal::PlatformFacade;
use crate::store::Store;
use crate::{
    Clock, DEFAULT_NAMES_FILE, DEFAULT_REPORT_FILE, PhaseTimerBuilder, Report, Result, Span,
    to_millis,
};

/// A fixed set of id-addressed timers and counters with a shared on/off switch.
///
/// Timers accumulate the wall-clock time between matching [`start()`](Self::start) and
/// [`stop()`](Self::stop) calls. Counters accumulate integer event counts. Both are addressed by
/// zero-based ids below [`timer_count()`](Self::timer_count) and
/// [`counter_count()`](Self::counter_count); using any other id is an error.
///
/// # Enabled switch
///
/// While disabled, every call that would record something is a successful no-op, without even
/// checking the id. The switch affects reads differently for the two slot kinds:
///
/// * Timer reads always return the recorded value.
/// * Counter reads return zero while disabled, whatever was recorded before.
///
/// Reports are not produced at all while disabled.
///
/// # Threading
///
/// There is no internal synchronization. Use one instance per thread or wrap it in a lock.
///
/// # Examples
///
/// ```
/// use phase_timer::PhaseTimer;
///
/// # fn main() -> phase_timer::Result<()> {
/// let mut timer = PhaseTimer::builder().timers(2).counters(1).build();
/// timer.set_timer_name(0, "setup")?;
/// timer.set_timer_name(1, "compute")?;
///
/// timer.start(0)?;
/// let items = vec![1, 2, 3];
/// timer.stop(0)?;
///
/// for item in &items {
///     let _span = timer.measure(1)?;
///     std::hint::black_box(item * 2);
/// }
/// timer.add(0, items.len() as u64)?;
///
/// assert_eq!(timer.counter(0)?, 3);
/// timer.print_to_stdout(items.len() as f64);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PhaseTimer {
    store: Store,
    clock: Clock,
    enabled: bool,
    title: String,
}

impl PhaseTimer {
    /// Creates an enabled instance with one timer and one counter.
    ///
    /// Use [`builder()`](Self::builder) to configure anything else.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts configuring a new instance.
    pub fn builder() -> PhaseTimerBuilder {
        PhaseTimerBuilder::new()
    }

    pub(crate) fn new_inner(
        timer_count: usize,
        counter_count: usize,
        enabled: bool,
        title: String,
        platform: &PlatformFacade,
    ) -> Self {
        Self {
            store: Store::new(timer_count, counter_count),
            clock: Clock::from_pal(platform),
            enabled,
            title,
        }
    }

    /// Turns recording on.
    pub fn enable(&mut self) {
        debug!(title = %self.title, "phase timer enabled");
        self.enabled = true;
    }

    /// Turns recording off. Already recorded values are kept.
    pub fn disable(&mut self) {
        debug!(title = %self.title, "phase timer disabled");
        self.enabled = false;
    }

    /// Whether recording is on.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The title printed at the top of the console report.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the title printed at the top of the console report.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Number of timer slots.
    #[must_use]
    pub fn timer_count(&self) -> usize {
        self.store.timer_count()
    }

    /// Number of counter slots.
    #[must_use]
    pub fn counter_count(&self) -> usize {
        self.store.counter_count()
    }

    /// Grows the number of timer slots to `count` and returns the resulting number.
    ///
    /// Zero or a count that is not larger than the current one changes nothing, so this is
    /// safe to call speculatively. Existing timers keep their names, state and totals.
    ///
    /// # Panics
    ///
    /// Panics if memory for `count` timer slots cannot be reserved.
    pub fn set_timer_count(&mut self, count: usize) -> usize {
        self.store.set_timer_count(count)
    }

    /// Grows the number of counter slots to `count` and returns the resulting number.
    ///
    /// Zero or a count that is not larger than the current one changes nothing, so this is
    /// safe to call speculatively. Existing counters keep their names and values.
    ///
    /// # Panics
    ///
    /// Panics if memory for `count` counter slots cannot be reserved.
    pub fn set_counter_count(&mut self, count: usize) -> usize {
        self.store.set_counter_count(count)
    }

    /// Stops the timer without recording the running interval and zeroes its total.
    ///
    /// Works whether or not recording is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimerOutOfRange`](crate::Error::TimerOutOfRange) for an unknown id.
    pub fn reset_timer(&mut self, id: usize) -> Result<()> {
        self.store.timer_mut(id)?.reset();
        Ok(())
    }

    /// Applies [`reset_timer()`](Self::reset_timer) to every timer.
    pub fn reset_all_timers(&mut self) {
        for timer in self.store.timers_mut() {
            timer.reset();
        }
    }

    /// Names a timer for reports. An empty name makes the timer unnamed again.
    ///
    /// Works whether or not recording is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimerOutOfRange`](crate::Error::TimerOutOfRange) for an unknown id.
    pub fn set_timer_name(&mut self, id: usize, name: impl Into<String>) -> Result<()> {
        self.store.timer_mut(id)?.set_name(name.into());
        Ok(())
    }

    /// The name of a timer, empty if it was never named.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimerOutOfRange`](crate::Error::TimerOutOfRange) for an unknown id.
    pub fn timer_name(&self, id: usize) -> Result<&str> {
        Ok(self.store.timer(id)?.name())
    }

    /// Starts a timer. Does nothing if it is already running or recording is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimerOutOfRange`](crate::Error::TimerOutOfRange) for an unknown id.
    pub fn start(&mut self, id: usize) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let now = self.clock.now();
        self.store.timer_mut(id)?.start(now);
        Ok(())
    }

    /// Stops a timer and adds the interval since the matching start to its total.
    ///
    /// Does nothing if the timer is not running or recording is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimerOutOfRange`](crate::Error::TimerOutOfRange) for an unknown id.
    pub fn stop(&mut self, id: usize) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let now = self.clock.now();
        self.store.timer_mut(id)?.stop(now);
        Ok(())
    }

    /// Starts a timer and returns a guard that stops it when dropped.
    ///
    /// If the timer was already running, the guard still stops it on drop.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimerOutOfRange`](crate::Error::TimerOutOfRange) for an unknown id.
    pub fn measure(&mut self, id: usize) -> Result<Span<'_>> {
        self.start(id)?;
        Ok(Span::new(self, id))
    }

    /// Total time of all completed intervals of a timer, in milliseconds.
    ///
    /// An interval that is still running is not included. Available whether or not recording
    /// is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimerOutOfRange`](crate::Error::TimerOutOfRange) for an unknown id.
    pub fn read_ms(&self, id: usize) -> Result<f64> {
        self.elapsed(id).map(to_millis)
    }

    /// Total time of all completed intervals of a timer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimerOutOfRange`](crate::Error::TimerOutOfRange) for an unknown id.
    pub fn elapsed(&self, id: usize) -> Result<Duration> {
        Ok(self.store.timer(id)?.accumulated())
    }

    /// Whether a timer has been started and not yet stopped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimerOutOfRange`](crate::Error::TimerOutOfRange) for an unknown id.
    pub fn is_running(&self, id: usize) -> Result<bool> {
        Ok(self.store.timer(id)?.is_running())
    }

    /// Adds one to a counter. Does nothing while recording is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CounterOutOfRange`](crate::Error::CounterOutOfRange) for an unknown id.
    pub fn increment(&mut self, id: usize) -> Result<()> {
        self.add(id, 1)
    }

    /// Adds `n` to a counter. Does nothing while recording is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CounterOutOfRange`](crate::Error::CounterOutOfRange) for an unknown id.
    pub fn add(&mut self, id: usize, n: u64) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        self.store.counter_mut(id)?.add(n);
        Ok(())
    }

    /// Sets a counter back to zero. Does nothing while recording is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CounterOutOfRange`](crate::Error::CounterOutOfRange) for an unknown id.
    pub fn reset_counter(&mut self, id: usize) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        self.store.counter_mut(id)?.reset();
        Ok(())
    }

    /// Sets every counter back to zero. Does nothing while recording is disabled.
    pub fn reset_all_counters(&mut self) {
        if !self.enabled {
            return;
        }

        for counter in self.store.counters_mut() {
            counter.reset();
        }
    }

    /// The value of a counter, or zero while recording is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CounterOutOfRange`](crate::Error::CounterOutOfRange) for an unknown id.
    pub fn counter(&self, id: usize) -> Result<u64> {
        if !self.enabled {
            return Ok(0);
        }

        Ok(self.store.counter(id)?.value())
    }

    /// Names a counter for file reports. The console report always labels counters by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CounterOutOfRange`](crate::Error::CounterOutOfRange) for an unknown id.
    pub fn set_counter_name(&mut self, id: usize, name: impl Into<String>) -> Result<()> {
        self.store.counter_mut(id)?.set_name(name.into());
        Ok(())
    }

    /// The name of a counter, empty if it was never named.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CounterOutOfRange`](crate::Error::CounterOutOfRange) for an unknown id.
    pub fn counter_name(&self, id: usize) -> Result<&str> {
        Ok(self.store.counter(id)?.name())
    }

    /// Takes a snapshot of every timer and counter.
    #[must_use]
    pub fn to_report(&self) -> Report {
        Report::from_store(&self.title, &self.store)
    }

    /// Prints the console report with every value divided by `divisor`, for example an
    /// iteration count to show per-iteration figures. Prints nothing while disabled.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self, divisor: f64) {
        if let Some(text) = self.console_report(divisor) {
            print!("{text}");
        }
    }

    /// The text `print_to_stdout()` prints, or `None` while disabled.
    fn console_report(&self, divisor: f64) -> Option<String> {
        self.enabled
            .then(|| format!("\n{}", self.to_report().scaled(divisor)))
    }

    /// Appends a value record to the file at `path`, creating it if needed.
    ///
    /// See [`Report::write_record()`] for the format. Writes nothing while disabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened or written.
    pub fn append_to_file(&self, path: impl AsRef<Path>, record_id: Option<u64>) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        self.to_report().append_to_file(path, record_id)
    }

    /// Appends a value record to [`DEFAULT_REPORT_FILE`] in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened or written.
    pub fn append_to_default_file(&self, record_id: Option<u64>) -> Result<()> {
        self.append_to_file(DEFAULT_REPORT_FILE, record_id)
    }

    /// Appends a tab-separated row of all non-empty timer names to the file at `path`,
    /// creating it if needed. Writes nothing while disabled.
    ///
    /// Every call appends another row, so write it once if you want a single header above
    /// the records of [`append_to_file()`](Self::append_to_file).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened or written.
    pub fn append_names_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        self.to_report().append_names_to_file(path)
    }

    /// Appends a row of timer names to [`DEFAULT_NAMES_FILE`] in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened or written.
    pub fn append_names_to_default_file(&self) -> Result<()> {
        self.append_names_to_file(DEFAULT_NAMES_FILE)
    }
}

impl Default for PhaseTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;
    use std::fs;

    use static_assertions::assert_impl_all;

    use super::*;
    use crate::Error;
    use crate::pal::FakePlatform;

    assert_impl_all!(PhaseTimer: Send, Debug);

    fn fake_timer(timers: usize, counters: usize) -> (PhaseTimer, FakePlatform) {
        let platform = FakePlatform::new();
        let timer = PhaseTimer::builder()
            .timers(timers)
            .counters(counters)
            .platform(PlatformFacade::fake(platform.clone()))
            .build();

        (timer, platform)
    }

    fn assert_ms(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected} ms, got {actual} ms"
        );
    }

    #[test]
    fn start_stop_accumulates() {
        let (mut timer, platform) = fake_timer(1, 1);

        timer.start(0).unwrap();
        platform.advance(Duration::from_millis(10));
        timer.stop(0).unwrap();

        platform.advance(Duration::from_millis(500));

        timer.start(0).unwrap();
        platform.advance(Duration::from_micros(2_500));
        timer.stop(0).unwrap();

        assert_ms(timer.read_ms(0).unwrap(), 12.5);
        assert_eq!(timer.elapsed(0).unwrap(), Duration::from_micros(12_500));
    }

    #[test]
    fn double_start_is_single_start() {
        let (mut timer, platform) = fake_timer(1, 1);

        timer.start(0).unwrap();
        platform.advance(Duration::from_millis(5));
        timer.start(0).unwrap();
        platform.advance(Duration::from_millis(5));
        timer.stop(0).unwrap();

        assert_ms(timer.read_ms(0).unwrap(), 10.0);
    }

    #[test]
    fn double_stop_is_single_stop() {
        let (mut timer, platform) = fake_timer(1, 1);

        timer.start(0).unwrap();
        platform.advance(Duration::from_millis(5));
        timer.stop(0).unwrap();
        platform.advance(Duration::from_millis(5));
        timer.stop(0).unwrap();

        assert_ms(timer.read_ms(0).unwrap(), 5.0);
    }

    #[test]
    fn running_timer_reads_completed_intervals_only() {
        let (mut timer, platform) = fake_timer(1, 1);

        timer.start(0).unwrap();
        platform.advance(Duration::from_millis(10));

        assert!(timer.is_running(0).unwrap());
        assert_ms(timer.read_ms(0).unwrap(), 0.0);
    }

    #[test]
    fn growing_keeps_accumulated_time() {
        let (mut timer, platform) = fake_timer(2, 1);

        timer.start(0).unwrap();
        platform.advance(Duration::from_millis(50));
        timer.stop(0).unwrap();

        assert_eq!(timer.set_timer_count(5), 5);

        assert_ms(timer.read_ms(0).unwrap(), 50.0);
        for id in 2..5 {
            assert_ms(timer.read_ms(id).unwrap(), 0.0);
        }
    }

    #[test]
    fn growing_keeps_running_interval() {
        let (mut timer, platform) = fake_timer(1, 1);

        timer.start(0).unwrap();
        platform.advance(Duration::from_millis(4));
        timer.set_timer_count(3);
        platform.advance(Duration::from_millis(4));
        timer.stop(0).unwrap();

        assert_ms(timer.read_ms(0).unwrap(), 8.0);
    }

    #[test]
    fn shrink_and_zero_requests_change_nothing() {
        let (mut timer, _platform) = fake_timer(4, 3);

        assert_eq!(timer.set_timer_count(0), 4);
        assert_eq!(timer.set_timer_count(2), 4);
        assert_eq!(timer.set_counter_count(0), 3);
        assert_eq!(timer.set_counter_count(3), 3);
        assert_eq!(timer.set_counter_count(8), 8);
    }

    #[test]
    fn disabled_timer_records_nothing_but_still_reads() {
        let (mut timer, platform) = fake_timer(1, 1);

        timer.start(0).unwrap();
        platform.advance(Duration::from_millis(3));
        timer.stop(0).unwrap();

        timer.disable();

        timer.start(0).unwrap();
        platform.advance(Duration::from_millis(100));
        timer.stop(0).unwrap();

        assert!(!timer.is_running(0).unwrap());
        assert_ms(timer.read_ms(0).unwrap(), 3.0);
    }

    #[test]
    fn disabled_counter_reads_zero() {
        let (mut timer, _platform) = fake_timer(1, 1);

        timer.add(0, 5).unwrap();
        timer.disable();

        timer.increment(0).unwrap();
        timer.add(0, 10).unwrap();
        assert_eq!(timer.counter(0).unwrap(), 0);

        timer.enable();
        assert_eq!(timer.counter(0).unwrap(), 5);
    }

    #[test]
    fn disabled_calls_do_not_check_ids() {
        let (mut timer, _platform) = fake_timer(1, 1);
        timer.disable();

        timer.start(99).unwrap();
        timer.stop(99).unwrap();
        timer.increment(99).unwrap();
        timer.add(99, 1).unwrap();
        timer.reset_counter(99).unwrap();
        assert_eq!(timer.counter(99).unwrap(), 0);
    }

    #[test]
    fn disabled_counter_reset_is_no_op() {
        let (mut timer, _platform) = fake_timer(1, 2);

        timer.add(0, 4).unwrap();
        timer.add(1, 6).unwrap();

        timer.disable();
        timer.reset_counter(0).unwrap();
        timer.reset_all_counters();
        timer.enable();

        assert_eq!(timer.counter(0).unwrap(), 4);
        assert_eq!(timer.counter(1).unwrap(), 6);
    }

    #[test]
    fn timer_reset_ignores_enabled_switch() {
        let (mut timer, platform) = fake_timer(2, 1);

        for id in 0..2 {
            timer.start(id).unwrap();
        }
        platform.advance(Duration::from_millis(7));
        for id in 0..2 {
            timer.stop(id).unwrap();
        }

        timer.disable();
        timer.reset_timer(0).unwrap();
        assert_ms(timer.read_ms(0).unwrap(), 0.0);
        assert_ms(timer.read_ms(1).unwrap(), 7.0);

        timer.reset_all_timers();
        assert_ms(timer.read_ms(1).unwrap(), 0.0);
    }

    #[test]
    fn counter_arithmetic() {
        let (mut timer, _platform) = fake_timer(1, 1);

        for _ in 0..3 {
            timer.add(0, 7).unwrap();
        }
        timer.increment(0).unwrap();
        assert_eq!(timer.counter(0).unwrap(), 22);

        timer.reset_counter(0).unwrap();
        timer.add(0, 7).unwrap();
        assert_eq!(timer.counter(0).unwrap(), 7);

        timer.reset_all_counters();
        timer.increment(0).unwrap();
        assert_eq!(timer.counter(0).unwrap(), 1);
    }

    #[test]
    fn out_of_range_ids_are_errors() {
        let (mut timer, _platform) = fake_timer(2, 1);

        assert!(matches!(
            timer.start(2),
            Err(Error::TimerOutOfRange { id: 2, count: 2 })
        ));
        assert!(matches!(timer.stop(5), Err(Error::TimerOutOfRange { .. })));
        assert!(matches!(timer.read_ms(2), Err(Error::TimerOutOfRange { .. })));
        assert!(matches!(
            timer.reset_timer(2),
            Err(Error::TimerOutOfRange { .. })
        ));
        assert!(matches!(
            timer.set_timer_name(2, "x"),
            Err(Error::TimerOutOfRange { .. })
        ));
        assert!(matches!(
            timer.increment(1),
            Err(Error::CounterOutOfRange { id: 1, count: 1 })
        ));
        assert!(matches!(
            timer.counter(1),
            Err(Error::CounterOutOfRange { .. })
        ));
        assert!(matches!(
            timer.set_counter_name(1, "x"),
            Err(Error::CounterOutOfRange { .. })
        ));
    }

    #[test]
    fn names_are_allowed_while_disabled() {
        let (mut timer, _platform) = fake_timer(1, 1);
        timer.disable();

        timer.set_timer_name(0, "parse").unwrap();
        timer.set_counter_name(0, "tokens").unwrap();

        assert_eq!(timer.timer_name(0).unwrap(), "parse");
        assert_eq!(timer.counter_name(0).unwrap(), "tokens");
    }

    #[test]
    fn span_stops_timer_on_drop() {
        let (mut timer, platform) = fake_timer(1, 1);

        {
            let span = timer.measure(0).unwrap();
            assert_eq!(span.id(), 0);
            platform.advance(Duration::from_millis(6));
        }

        assert!(!timer.is_running(0).unwrap());
        assert_ms(timer.read_ms(0).unwrap(), 6.0);
    }

    #[test]
    fn span_rejects_unknown_id() {
        let (mut timer, _platform) = fake_timer(1, 1);

        assert!(matches!(
            timer.measure(1),
            Err(Error::TimerOutOfRange { .. })
        ));
    }

    #[test]
    fn report_reflects_named_nonzero_slots() {
        let (mut timer, platform) = fake_timer(3, 2);
        timer.set_title("Stages");
        timer.set_timer_name(1, "solve").unwrap();

        timer.start(1).unwrap();
        platform.advance(Duration::from_millis(2));
        timer.stop(1).unwrap();
        timer.increment(1).unwrap();

        let report = timer.to_report();
        assert_eq!(report.title(), "Stages");

        let timers: Vec<_> = report.timers().collect();
        assert_eq!(timers.len(), 1);
        assert_eq!(timers[0].name(), "solve");

        let rendered = report.to_string();
        assert!(rendered.contains("solve : 2.00000 ms (2.00000 ms)"));
        assert!(!rendered.contains("Timer 1"));
        assert!(rendered.contains("Counter 1 : 1.000 (1)"));
        assert!(!rendered.contains("Counter 0"));
    }

    #[test]
    fn console_report_is_scaled_and_gated() {
        let (mut timer, platform) = fake_timer(1, 1);
        timer.set_timer_name(0, "solve").unwrap();

        timer.start(0).unwrap();
        platform.advance(Duration::from_millis(2));
        timer.stop(0).unwrap();
        timer.add(0, 6).unwrap();

        let text = timer.console_report(4.0).unwrap();
        assert!(text.starts_with("\n*\t PhaseTimer Report \t*\n"));
        assert!(text.contains("solve : 0.50000 ms (2.00000 ms)"));
        assert!(text.contains("Counter 0 : 1.500 (6)"));

        timer.disable();
        assert_eq!(timer.console_report(4.0), None);

        timer.enable();
        assert!(timer.console_report(1.0).is_some());
    }

    #[test]
    fn file_reports_append_records_and_names() {
        let dir = tempfile::tempdir().unwrap();
        let records = dir.path().join("records.txt");
        let names = dir.path().join("names.txt");

        let (mut timer, platform) = fake_timer(2, 1);
        timer.set_timer_name(0, "a").unwrap();
        timer.set_timer_name(1, "b").unwrap();
        timer.set_counter_name(0, "hits").unwrap();

        timer.append_names_to_file(&names).unwrap();

        for run in 0..2 {
            timer.reset_all_timers();
            timer.start(0).unwrap();
            platform.advance(Duration::from_millis(1));
            timer.stop(0).unwrap();
            timer.increment(0).unwrap();

            timer.append_to_file(&records, Some(run)).unwrap();
        }

        assert_eq!(fs::read_to_string(&names).unwrap(), "a\tb\t\n");
        assert_eq!(
            fs::read_to_string(&records).unwrap(),
            "0\ta: 1.000000000\nhits: 1\n\n1\ta: 1.000000000\nhits: 2\n\n"
        );
    }

    #[test]
    fn disabled_file_reports_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let records = dir.path().join("records.txt");
        let names = dir.path().join("names.txt");

        let (mut timer, _platform) = fake_timer(1, 1);
        timer.set_timer_name(0, "a").unwrap();
        timer.disable();

        timer.append_to_file(&records, None).unwrap();
        timer.append_names_to_file(&names).unwrap();

        assert!(!records.exists());
        assert!(!names.exists());
    }
}

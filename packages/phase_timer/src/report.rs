//! Snapshots of timer and counter values and their console and file renderings.

use std::fmt::{self, Display};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::store::Store;
use crate::{Error, Result, to_millis};

/// File that [`PhaseTimer::append_to_default_file()`](crate::PhaseTimer::append_to_default_file)
/// appends value records to.
pub const DEFAULT_REPORT_FILE: &str = "phase_timer_report.txt";

/// File that [`PhaseTimer::append_names_to_default_file()`](crate::PhaseTimer::append_names_to_default_file)
/// appends header rows to.
pub const DEFAULT_NAMES_FILE: &str = "phase_timer_names.txt";

/// A point-in-time copy of every timer and counter of a [`PhaseTimer`](crate::PhaseTimer).
///
/// The `Display` implementation renders the human-readable console report. Slots whose value
/// is zero are left out of both the console report and the file records.
///
/// # Examples
///
/// ```
/// use phase_timer::PhaseTimer;
///
/// let mut timer = PhaseTimer::builder().timers(2).counters(1).build();
/// timer.set_timer_name(0, "parse").unwrap();
///
/// timer.start(0).unwrap();
/// timer.increment(0).unwrap();
/// timer.stop(0).unwrap();
///
/// let report = timer.to_report();
/// assert_eq!(report.timer_count(), 2);
/// assert_eq!(report.counters().next().unwrap().value(), 1);
///
/// println!("{report}");
/// ```
#[derive(Clone, Debug)]
pub struct Report {
    title: String,
    timers: Box<[TimerMetrics]>,
    counters: Box<[CounterMetrics]>,
}

/// The accumulated time of one timer in a [`Report`].
#[derive(Clone, Debug)]
pub struct TimerMetrics {
    id: usize,
    name: String,
    elapsed: Duration,
}

/// The value of one counter in a [`Report`].
#[derive(Clone, Debug)]
pub struct CounterMetrics {
    id: usize,
    name: String,
    value: u64,
}

impl Report {
    pub(crate) fn from_store(title: &str, store: &Store) -> Self {
        let timers = store
            .timers()
            .iter()
            .enumerate()
            .map(|(id, slot)| TimerMetrics {
                id,
                name: slot.name().to_string(),
                elapsed: slot.accumulated(),
            })
            .collect();

        let counters = store
            .counters()
            .iter()
            .enumerate()
            .map(|(id, slot)| CounterMetrics {
                id,
                name: slot.name().to_string(),
                value: slot.value(),
            })
            .collect();

        Self {
            title: title.to_string(),
            timers,
            counters,
        }
    }

    /// The title printed at the top of the console report.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of timer slots at the time of the snapshot, including those with zero time.
    #[must_use]
    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    /// Number of counter slots at the time of the snapshot, including those at zero.
    #[must_use]
    pub fn counter_count(&self) -> usize {
        self.counters.len()
    }

    /// Iterates over the timers with a nonzero accumulated time, in id order.
    pub fn timers(&self) -> impl Iterator<Item = &TimerMetrics> {
        self.timers.iter().filter(|timer| !timer.elapsed.is_zero())
    }

    /// Iterates over the counters with a nonzero value, in id order.
    pub fn counters(&self) -> impl Iterator<Item = &CounterMetrics> {
        self.counters.iter().filter(|counter| counter.value != 0)
    }

    /// Whether every timer and counter in the report is at zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers().next().is_none() && self.counters().next().is_none()
    }

    /// Renders the console report with every value divided by `divisor`.
    ///
    /// Each line shows the divided value followed by the raw value in parentheses, which is
    /// convenient for showing per-iteration figures next to totals.
    #[must_use]
    pub fn scaled(&self, divisor: f64) -> impl Display + '_ {
        Scaled {
            report: self,
            divisor,
        }
    }

    /// Writes one value record: an optional `record_id` column followed by a tab, one
    /// `name: milliseconds` line per nonzero timer, one `name: value` line per nonzero
    /// counter and a terminating blank line.
    ///
    /// Labels are the slot names, without falling back to numeric ids.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `out`.
    pub fn write_record(&self, out: &mut impl Write, record_id: Option<u64>) -> io::Result<()> {
        if let Some(record_id) = record_id {
            write!(out, "{record_id}\t")?;
        }

        for timer in self.timers() {
            writeln!(out, "{}: {:.9}", timer.name, timer.millis())?;
        }

        for counter in self.counters() {
            writeln!(out, "{}: {}", counter.name, counter.value)?;
        }

        writeln!(out)
    }

    /// Writes one header row: every non-empty timer name followed by a tab, then a newline.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `out`.
    pub fn write_names(&self, out: &mut impl Write) -> io::Result<()> {
        for timer in self.timers.iter().filter(|timer| !timer.name.is_empty()) {
            write!(out, "{}\t", timer.name)?;
        }

        writeln!(out)
    }

    /// Appends a value record (see [`write_record()`](Self::write_record)) to the file at
    /// `path`, creating the file if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or written.
    pub fn append_to_file(&self, path: impl AsRef<Path>, record_id: Option<u64>) -> Result<()> {
        append(path.as_ref(), |out| self.write_record(out, record_id))
    }

    /// Appends a header row (see [`write_names()`](Self::write_names)) to the file at `path`,
    /// creating the file if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or written.
    pub fn append_names_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        append(path.as_ref(), |out| self.write_names(out))
    }

    /// Prints the console report to stdout with every value divided by `divisor`.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self, divisor: f64) {
        print!("\n{}", self.scaled(divisor));
    }
}

fn append(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> Result<()> {
    let to_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)?;

    let mut out = BufWriter::new(file);
    write(&mut out).and_then(|()| out.flush()).map_err(to_error)?;

    debug!(path = %path.display(), "appended report");
    Ok(())
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.scaled(1.0).fmt(f)
    }
}

struct Scaled<'a> {
    report: &'a Report,
    divisor: f64,
}

impl Display for Scaled<'_> {
    #[expect(
        clippy::cast_precision_loss,
        reason = "counter values are display-only here, approximate is fine"
    )]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;

        writeln!(f, "*\t {} \t*", report.title)?;
        writeln!(
            f,
            "* The number of timer = {}, counter = {}",
            report.timer_count(),
            report.counter_count()
        )?;

        writeln!(f, "**** Timer report ****")?;
        for timer in report.timers() {
            let millis = timer.millis();

            if timer.name.is_empty() {
                write!(f, "Timer {}", timer.id)?;
            } else {
                write!(f, "{}", timer.name)?;
            }

            writeln!(f, " : {:.5} ms ({millis:.5} ms)", millis / self.divisor)?;
        }

        writeln!(f, "**** Counter report ****")?;
        for counter in report.counters() {
            writeln!(
                f,
                "Counter {} : {:.3} ({})",
                counter.id,
                counter.value as f64 / self.divisor,
                counter.value
            )?;
        }

        writeln!(f, "*\t End of the report \t*")
    }
}

impl TimerMetrics {
    /// The id of the timer slot.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// The display name of the timer, empty if the timer was never named.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total time of all completed intervals.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Total time of all completed intervals, in milliseconds.
    #[must_use]
    pub fn millis(&self) -> f64 {
        to_millis(self.elapsed)
    }
}

impl CounterMetrics {
    /// The id of the counter slot.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// The name of the counter, empty if the counter was never named.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The accumulated count.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }
}

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Named phase timers and event counters for instrumenting performance-sensitive code.
//!
//! A [`PhaseTimer`] owns a fixed, growable set of timers and counters addressed by zero-based
//! ids. Timers accumulate wall-clock time across repeated start/stop cycles using a monotonic
//! [`Clock`] with at least microsecond resolution on every supported platform. Counters
//! accumulate integer event counts. The accumulated values can be printed as a human-readable
//! console report or appended as tab-delimited records to a file.
//!
//! The core types are:
//! - [`PhaseTimer`] - Owns the timers and counters and produces reports
//! - [`PhaseTimerBuilder`] - Configures slot counts, title and the initial enabled state
//! - [`Span`] - Stops a timer when dropped
//! - [`Report`] - A snapshot of all values with console and file renderings
//! - [`Clock`] - The monotonic time source behind the timers
//!
//! This is not a sampling profiler or a tracing system: it records exactly what the caller
//! brackets with start/stop calls and nothing else.
//!
//! # Simple usage
//!
//! ```
//! use phase_timer::PhaseTimer;
//!
//! # fn main() -> phase_timer::Result<()> {
//! let mut timer = PhaseTimer::builder().timers(2).counters(1).build();
//! timer.set_timer_name(0, "prepare")?;
//! timer.set_timer_name(1, "execute")?;
//!
//! timer.start(0)?;
//! let input: Vec<u64> = (0..1000).collect();
//! timer.stop(0)?;
//!
//! timer.start(1)?;
//! let sum: u64 = input.iter().sum();
//! timer.stop(1)?;
//! timer.add(0, input.len() as u64)?;
//!
//! assert_eq!(sum, 499_500);
//! assert!(timer.read_ms(0)? >= 0.0);
//! assert_eq!(timer.counter(0)?, 1000);
//!
//! timer.print_to_stdout(1.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Collecting records across runs
//!
//! File reports are appended, never overwritten. Write the header row once and then one value
//! record per run:
//!
//! ```no_run
//! use phase_timer::PhaseTimer;
//!
//! # fn main() -> phase_timer::Result<()> {
//! let mut timer = PhaseTimer::builder().timers(1).build();
//! timer.set_timer_name(0, "solve")?;
//! timer.append_names_to_file("names.txt")?;
//!
//! for run in 0..10 {
//!     timer.reset_all_timers();
//!     {
//!         let _span = timer.measure(0)?;
//!         // Work being measured.
//!     }
//!     timer.append_to_file("records.txt", Some(run))?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Threading
//!
//! The types in this crate carry no internal synchronization. Use one [`PhaseTimer`] per thread
//! or guard a shared one with a lock.

mod builder;
mod clock;
mod error;
mod instant;
mod pal;
mod phase_timer;
mod report;
mod span;
mod store;

pub use builder::*;
pub use clock::*;
pub use error::*;
pub use instant::*;
pub use phase_timer::*;
pub use report::*;
pub use span::*;

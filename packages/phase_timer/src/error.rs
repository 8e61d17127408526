use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when operating a [`PhaseTimer`](crate::PhaseTimer).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller addressed a timer slot that has not been configured.
    #[error("timer {id} is out of range, only {count} timers are configured")]
    TimerOutOfRange {
        /// The id the caller provided.
        id: usize,

        /// The number of timer slots configured at the time of the call.
        count: usize,
    },

    /// The caller addressed a counter slot that has not been configured.
    #[error("counter {id} is out of range, only {count} counters are configured")]
    CounterOutOfRange {
        /// The id the caller provided.
        id: usize,

        /// The number of counter slots configured at the time of the call.
        count: usize,
    },

    /// A report file could not be opened or written.
    #[error("failed to append report to '{}'", path.display())]
    Io {
        /// The report file that was being written.
        path: PathBuf,

        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// A specialized `Result` type for phase timer operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

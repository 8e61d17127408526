//! Platform abstraction layer for monotonic time.
//!
//! Each target family reads its native monotonic counter and anchors it to a
//! `std::time::Instant` epoch, so the rest of the crate only ever deals with
//! opaque instants and durations.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;

pub(crate) use abstractions::*;
pub(crate) use facade::*;
#[cfg(test)]
pub(crate) use fake::*;

#[cfg(all(any(unix, windows), not(miri)))]
mod native;
#[cfg(all(any(unix, windows), not(miri)))]
pub(crate) use self::native::*;

// Miri cannot talk to a real OS but Rust std time still works.
#[cfg(any(miri, not(any(unix, windows))))]
mod rust;
#[cfg(any(miri, not(any(unix, windows))))]
pub(crate) use self::rust::*;

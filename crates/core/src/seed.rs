//! Minute-granular time seeds.
//!
//! The seed is the only source of randomness for a selection, so two callers
//! reading the clock within the same minute draw the same characters.

use std::fmt;

use chrono::{Local, NaiveDateTime};

/// Lexical form of a seed: wall-clock time truncated to the minute.
pub const SEED_FORMAT: &str = "%Y%m%d%H%M";

/// Source of wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSeed(String);

impl TimeSeed {
    /// Wrap a literal seed value, e.g. `"202501011200"`.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Seed for the minute containing `at`. Seconds and below are dropped.
    pub fn from_datetime(at: NaiveDateTime) -> Self {
        Self(at.format(SEED_FORMAT).to_string())
    }

    /// Seed for the clock's current minute.
    pub fn current(clock: &dyn Clock) -> Self {
        Self::from_datetime(clock.now())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

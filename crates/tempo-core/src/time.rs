//! Time-of-day model.
//!
//! # Design
//!
//! A recurring weekly event only needs a wall-clock time within one day, so
//! time is an `(hour, minute)` pair rather than a timestamp.  All interval
//! arithmetic is done on the derived offset:
//!
//!   offset = hour * 60 + minute        (minutes since midnight)
//!
//! Field order makes the derived `Ord` lexicographic on `(hour, minute)`,
//! which is the same ordering as comparing offsets.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Hours in a day.
pub const DAY_HOURS: u8 = 24;

/// Minutes in an hour.
pub const HOUR_MINS: u16 = 60;

// ── ClockTime ─────────────────────────────────────────────────────────────────

/// A validated wall-clock time, `00:00` through `23:59`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct ClockTime {
    hour:   u8,
    minute: u8,
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0 };

    /// Construct from hour (`0..=23`) and minute (`0..=59`).
    pub fn new(hour: u8, minute: u8) -> Result<Self, CoreError> {
        if hour >= DAY_HOURS {
            return Err(CoreError::InvalidHour(hour));
        }
        if minute as u16 >= HOUR_MINS {
            return Err(CoreError::InvalidMinute(minute));
        }
        Ok(Self { hour, minute })
    }

    #[inline]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes since midnight.
    #[inline]
    pub fn offset(self) -> u16 {
        self.hour as u16 * HOUR_MINS + self.minute as u16
    }

    /// Fractional hours since midnight, e.g. `09:30` → `9.5`.
    #[inline]
    pub fn as_hours(self) -> f64 {
        self.hour as f64 + self.minute as f64 / HOUR_MINS as f64
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = CoreError;

    /// Strict `HH:MM`: exactly two digits on each side of the colon.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CoreError::Parse(format!("invalid time {s:?}: expected HH:MM"));

        let (h, m) = s.split_once(':').ok_or_else(bad)?;
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(h) || !two_digits(m) {
            return Err(bad());
        }
        let hour: u8 = h.parse().map_err(|_| bad())?;
        let minute: u8 = m.parse().map_err(|_| bad())?;
        ClockTime::new(hour, minute)
    }
}

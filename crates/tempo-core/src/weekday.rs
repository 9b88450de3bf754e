//! Locale-independent weekday index.
//!
//! Weekdays are numbered `0` (Sunday) through `6` (Saturday).  Only display
//! names are localized (see [`crate::Language`]); every comparison and every
//! array lookup uses the raw index.

use std::fmt;

use crate::{CoreError, Language};

/// Number of days in the recurring week.
pub const WEEK_DAYS: usize = 7;

/// A day of the recurring week, `0..=6`, Sunday first.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Weekday(u8);

impl Weekday {
    pub const SUNDAY: Weekday = Weekday(0);
    pub const MONDAY: Weekday = Weekday(1);
    pub const TUESDAY: Weekday = Weekday(2);
    pub const WEDNESDAY: Weekday = Weekday(3);
    pub const THURSDAY: Weekday = Weekday(4);
    pub const FRIDAY: Weekday = Weekday(5);
    pub const SATURDAY: Weekday = Weekday(6);

    /// All seven weekdays in index order.
    pub const ALL: [Weekday; WEEK_DAYS] = [
        Weekday(0),
        Weekday(1),
        Weekday(2),
        Weekday(3),
        Weekday(4),
        Weekday(5),
        Weekday(6),
    ];

    /// Validate a raw index.
    pub fn new(index: u8) -> Result<Self, CoreError> {
        if (index as usize) < WEEK_DAYS {
            Ok(Weekday(index))
        } else {
            Err(CoreError::InvalidWeekday(index))
        }
    }

    /// The raw index as stored.
    #[inline(always)]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Cast to `usize` for direct use as an array index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Display name in `lang`.
    pub fn name(self, lang: Language) -> &'static str {
        lang.day_names()[self.index()]
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CoreError;
    fn try_from(n: u8) -> Result<Weekday, Self::Error> {
        Weekday::new(n)
    }
}

impl From<Weekday> for usize {
    #[inline(always)]
    fn from(day: Weekday) -> usize {
        day.index()
    }
}

impl fmt::Display for Weekday {
    /// English name; diagnostics are not localized.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Language::En))
    }
}

//! `Event` — one recurring, time-bounded block with a label.
//!
//! An event covers the weekday range `[day_start, day_end)` (normally a single
//! day, `day_end = day_start + 1`) between two wall-clock times on each of
//! those days.  It is validated once at construction and immutable afterwards.

use std::fmt;

use tempo_core::{ClockTime, Weekday, WEEK_DAYS};

use crate::{ScheduleError, ScheduleResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    day_start: u8,
    day_end:   u8,
    start:     ClockTime,
    end:       ClockTime,
    label:     String,
}

impl Event {
    /// Construct from raw fields.
    ///
    /// Fails with [`ScheduleError::InvalidEvent`] unless
    /// `day_start < day_end <= 7`, hours are `0..=23`, minutes are `0..=59`,
    /// and `(start_hour, start_minute) <= (end_hour, end_minute)`.
    pub fn new(
        day_start:    u8,
        day_end:      u8,
        start_hour:   u8,
        start_minute: u8,
        end_hour:     u8,
        end_minute:   u8,
        label:        impl Into<String>,
    ) -> ScheduleResult<Self> {
        let start = ClockTime::new(start_hour, start_minute)
            .map_err(|e| ScheduleError::InvalidEvent(format!("start time: {e}")))?;
        let end = ClockTime::new(end_hour, end_minute)
            .map_err(|e| ScheduleError::InvalidEvent(format!("end time: {e}")))?;
        Self::spanning(day_start, day_end, start, end, label)
    }

    /// Construct from already-validated times over `[day_start, day_end)`.
    pub fn spanning(
        day_start: u8,
        day_end:   u8,
        start:     ClockTime,
        end:       ClockTime,
        label:     impl Into<String>,
    ) -> ScheduleResult<Self> {
        if day_start >= day_end {
            return Err(ScheduleError::InvalidEvent(format!(
                "first day {day_start} must come before end day {day_end}"
            )));
        }
        if day_end as usize > WEEK_DAYS {
            return Err(ScheduleError::InvalidEvent(format!(
                "end day {day_end} is past the end of the week"
            )));
        }
        if start > end {
            return Err(ScheduleError::InvalidEvent(format!(
                "start {start} must not come after end {end}"
            )));
        }
        Ok(Self { day_start, day_end, start, end, label: label.into() })
    }

    /// A single-day event on `day`.
    pub fn on(
        day:   Weekday,
        start: ClockTime,
        end:   ClockTime,
        label: impl Into<String>,
    ) -> ScheduleResult<Self> {
        Self::spanning(day.get(), day.get() + 1, start, end, label)
    }

    #[inline]
    pub fn day_start(&self) -> u8 {
        self.day_start
    }

    /// Exclusive end of the weekday range.
    #[inline]
    pub fn day_end(&self) -> u8 {
        self.day_end
    }

    /// Weekday the event is filed under.
    #[inline]
    pub fn first_day(&self) -> Weekday {
        Weekday::ALL[self.day_start as usize]
    }

    /// Every weekday in `[day_start, day_end)`.
    pub fn days(&self) -> impl Iterator<Item = Weekday> {
        (self.day_start..self.day_end).map(|d| Weekday::ALL[d as usize])
    }

    #[inline]
    pub fn start(&self) -> ClockTime {
        self.start
    }

    #[inline]
    pub fn end(&self) -> ClockTime {
        self.end
    }

    /// Minutes since midnight at which the event starts.
    #[inline]
    pub fn start_offset(&self) -> u16 {
        self.start.offset()
    }

    /// Minutes since midnight at which the event ends.
    #[inline]
    pub fn end_offset(&self) -> u16 {
        self.end.offset()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// `true` when start and end coincide.  Zero-length events are kept in
    /// their timeline but never drawn.
    #[inline]
    pub fn is_zero_length(&self) -> bool {
        self.start == self.end
    }

    /// Same-day collision test.
    ///
    /// Touching intervals (`a.end == b.start`) do not collide; a boundary
    /// strictly inside the other interval, or an identical interval, does.
    pub fn collides_with(&self, other: &Event) -> bool {
        let (a, b) = (other.start_offset(), other.end_offset());
        let (x, y) = (self.start_offset(), self.end_offset());

        (a < x && x < b)
            || (a < y && y < b)
            || (x < a && a < y)
            || (x < b && b < y)
            || (a == x && b == y)
    }

    /// Human-readable summary used in diagnostics, e.g.
    /// `Monday 09:30-10:30 "Chem"`.
    pub fn describe(&self) -> String {
        let first = self.first_day();
        let days = if self.day_end - self.day_start == 1 {
            first.to_string()
        } else {
            format!("{first}-{}", Weekday::ALL[self.day_end as usize - 1])
        };
        format!("{days} {}-{} {:?}", self.start, self.end, self.label)
    }
}

impl fmt::Display for Event {
    /// Timeline dump format: `[label|HH:MM~HH:MM]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}~{}]", self.label, self.start, self.end)
    }
}

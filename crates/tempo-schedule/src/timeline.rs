//! `DayTimeline` — the ordered, conflict-free event sequence of one weekday.
//!
//! Events are stored in a `Vec` sorted ascending by start time.  Per-day event
//! counts are small, so a linear collision scan plus a binary-searched splice
//! is all that is needed.

use std::fmt;

use tempo_core::{ClockTime, Weekday};

use crate::Event;

#[derive(Clone, Debug)]
pub struct DayTimeline {
    day:    Weekday,
    /// Sorted ascending by `(start_hour, start_minute)`.
    events: Vec<Event>,
}

impl DayTimeline {
    pub fn new(day: Weekday) -> Self {
        Self { day, events: Vec::new() }
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    /// Read-only slice of all events (sorted by start time).
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    // ── Conflict detection ────────────────────────────────────────────────

    /// Existing events that `candidate` would collide with on this day.
    pub fn collisions<'a>(&'a self, candidate: &'a Event) -> impl Iterator<Item = &'a Event> + 'a {
        self.events.iter().filter(move |e| candidate.collides_with(e))
    }

    /// `true` if `candidate` collides with nothing on this day.
    pub fn is_free(&self, candidate: &Event) -> bool {
        self.collisions(candidate).next().is_none()
    }

    // ── Ordered insertion ─────────────────────────────────────────────────

    /// Index at which `candidate` would be spliced in.
    ///
    /// Skips every event whose start is strictly earlier, so a candidate that
    /// ties an existing start lands *before* the events it ties with.
    pub fn search(&self, candidate: &Event) -> usize {
        self.position_for(candidate.start())
    }

    /// Splice `event` at its search position without a collision check.
    /// Callers go through `Schedule::insert`, which checks first.
    pub(crate) fn insert_unchecked(&mut self, event: Event) -> usize {
        let idx = self.search(&event);
        self.events.insert(idx, event);
        idx
    }

    fn position_for(&self, start: ClockTime) -> usize {
        // partition_point returns the first index where the predicate is
        // false, i.e. the first event starting at or after `start`.
        self.events.partition_point(|e| e.start() < start)
    }

    /// Synthetic marker naming this day in the timeline dump.
    pub fn marker(&self) -> String {
        format!("day{}", self.day.get())
    }
}

impl fmt::Display for DayTimeline {
    /// `[dayN|00:00~00:00]->[label|HH:MM~HH:MM]->…`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}~{}]", self.marker(), ClockTime::MIDNIGHT, ClockTime::MIDNIGHT)?;
        for e in &self.events {
            write!(f, "->{e}")?;
        }
        Ok(())
    }
}

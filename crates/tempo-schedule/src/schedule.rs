//! `Schedule` — seven day timelines plus the rendering configuration.
//!
//! # Lifecycle
//!
//! ```text
//! Schedule::new(config)  →  insert(event) × N  →  layout / render (once)
//! ```
//!
//! Every `insert` is checked against every weekday the event spans before
//! anything is spliced, so a rejected insert leaves the schedule untouched.

use std::fmt;

use log::debug;
use tempo_core::{ScheduleConfig, Weekday};

use crate::{DayTimeline, Event, ScheduleError, ScheduleResult};

// ── Conflict ──────────────────────────────────────────────────────────────────

/// One existing event that blocked an insert, and the weekday it blocked on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conflict {
    pub day:      Weekday,
    pub existing: Event,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{} {:?}",
            self.day,
            self.existing.start(),
            self.existing.end(),
            self.existing.label()
        )
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Schedule {
    config: ScheduleConfig,
    days:   [DayTimeline; 7],
}

impl Schedule {
    /// An empty week.  Fails if `config` does not validate.
    pub fn new(config: ScheduleConfig) -> ScheduleResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            days: Weekday::ALL.map(DayTimeline::new),
        })
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Override the palette seed.  The hour window and page geometry stay
    /// as validated by [`Schedule::new`].
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.config.seed = seed;
    }

    pub fn day(&self, day: Weekday) -> &DayTimeline {
        &self.days[day.index()]
    }

    /// All seven timelines, Sunday first.
    pub fn days(&self) -> &[DayTimeline; 7] {
        &self.days
    }

    /// Every scheduled event, day by day in start order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.days.iter().flat_map(|d| d.events().iter())
    }

    pub fn len(&self) -> usize {
        self.days.iter().map(DayTimeline::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(DayTimeline::is_empty)
    }

    // ── Conflict detection ────────────────────────────────────────────────

    /// Every collision `event` would cause across its whole weekday range.
    pub fn conflicts(&self, event: &Event) -> Vec<Conflict> {
        event
            .days()
            .flat_map(|day| {
                self.days[day.index()]
                    .collisions(event)
                    .map(move |existing| Conflict { day, existing: existing.clone() })
            })
            .collect()
    }

    /// `true` if `event` collides with nothing on any day in its range.
    pub fn is_free(&self, event: &Event) -> bool {
        event.days().all(|day| self.days[day.index()].is_free(event))
    }

    // ── Insertion ─────────────────────────────────────────────────────────

    /// Insert `event` into the timeline of its first weekday.
    ///
    /// Fails with [`ScheduleError::Conflict`] listing every colliding event
    /// if the requested time is not free on any day of its range.  Callers
    /// that want an event on several weekdays insert one single-day event
    /// per weekday.
    pub fn insert(&mut self, event: Event) -> ScheduleResult<()> {
        let conflicts = self.conflicts(&event);
        if !conflicts.is_empty() {
            return Err(ScheduleError::Conflict { event: Box::new(event), conflicts });
        }

        let day = event.first_day();
        debug!("insert {} into {day}", event.describe());
        self.days[day.index()].insert_unchecked(event);
        Ok(())
    }
}

impl fmt::Display for Schedule {
    /// One line per weekday, Sunday first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, day) in self.days.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

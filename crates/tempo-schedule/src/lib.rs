//! `tempo-schedule` — recurring events, day timelines, and source loading.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`event`]    | `Event` — immutable time-bounded record with a label       |
//! | [`timeline`] | `DayTimeline` — one weekday's ordered, conflict-free events |
//! | [`schedule`] | `Schedule` (7 timelines + config), `Conflict`              |
//! | [`slot`]     | `Slot`, day-spec and time-spec parsing                     |
//! | [`loader`]   | `load_schedule_toml`, `load_slots_csv`, `build_schedule`   |
//! | [`error`]    | `ScheduleError`, `ScheduleResult<T>`                       |
//!
//! # Overlap policy (summary)
//!
//! Intervals are half-open `[start, end)` in minutes since midnight.  Two
//! events on the same weekday collide when a boundary of one lies strictly
//! inside the other, or when both intervals are identical:
//!
//! ```text
//! 09:00-10:00 + 10:00-11:00   ok        (touching)
//! 09:00-10:00 + 09:30-10:30   conflict  (boundary inside)
//! 09:00-10:00 + 09:00-10:00   conflict  (duplicate)
//! ```

pub mod error;
pub mod event;
pub mod loader;
pub mod schedule;
pub mod slot;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use event::Event;
pub use loader::{build_schedule, load_schedule_str, load_schedule_toml, load_slots_csv, load_slots_reader};
pub use schedule::{Conflict, Schedule};
pub use slot::{Slot, parse_days, parse_time_range};
pub use timeline::DayTimeline;

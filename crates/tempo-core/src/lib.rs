//! `tempo-core` — foundational types for the `tempo` weekly planner.
//!
//! This crate is a dependency of every other `tempo-*` crate.  It has no
//! `tempo-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`weekday`]  | `Weekday` (0 = Sunday … 6 = Saturday), `WEEK_DAYS`       |
//! | [`time`]     | `ClockTime` (hour + minute), minutes-since-midnight math |
//! | [`lang`]     | `Language` — display names and parsing abbreviations     |
//! | [`config`]   | `ScheduleConfig`, page dimensions                        |
//! | [`rng`]      | `PaletteRng` (seeded or entropy-backed shuffles)         |
//! | [`error`]    | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Deserialize` for `ScheduleConfig` and `Language`; needed by the `tempo-schedule` loader. |

pub mod config;
pub mod error;
pub mod lang;
pub mod rng;
pub mod time;
pub mod weekday;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PAGE_HEIGHT_CM, PAGE_WIDTH_CM, ScheduleConfig};
pub use error::{CoreError, CoreResult};
pub use lang::Language;
pub use rng::PaletteRng;
pub use time::{ClockTime, DAY_HOURS, HOUR_MINS};
pub use weekday::{WEEK_DAYS, Weekday};

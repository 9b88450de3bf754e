use tempo_core::CoreError;
use thiserror::Error;

use crate::{Conflict, Event};

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Field ordering or range violation at `Event` construction.
    #[error("invalid event: {0}")]
    InvalidEvent(String),

    /// The requested time overlaps one or more events already scheduled.
    #[error("{} is not available: overlaps {}", describe(.event), list_conflicts(.conflicts))]
    Conflict {
        event:     Box<Event>,
        conflicts: Vec<Conflict>,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("schedule parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

fn describe(event: &Event) -> String {
    event.describe()
}

fn list_conflicts(conflicts: &[Conflict]) -> String {
    conflicts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! `#[from]` variant.

use thiserror::Error;

/// Value errors raised by the primitives in this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("hour {0} is out of range (0–23)")]
    InvalidHour(u8),

    #[error("minute {0} is out of range (0–59)")]
    InvalidMinute(u8),

    #[error("weekday index {0} is out of range (0–6)")]
    InvalidWeekday(u8),

    #[error("unsupported language {0:?}: expected \"en\", \"de\" or \"pt-BR\"")]
    UnknownLanguage(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `tempo-core`.
pub type CoreResult<T> = Result<T, CoreError>;

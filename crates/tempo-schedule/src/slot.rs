//! `Slot` — one configured time slot on a set of weekdays.
//!
//! # Syntax
//!
//! | Part      | Form                          | Example          |
//! |-----------|-------------------------------|------------------|
//! | day spec  | comma list of `day` / `a-b`   | `mon-wed,fri`    |
//! | time spec | `HH:MM-HH:MM`                 | `09:00-10:30`    |
//!
//! Day abbreviations come from the configured [`Language`]; ranges are
//! inclusive and must ascend within the week (`sun` … `sat`).

use std::collections::BTreeSet;

use tempo_core::{ClockTime, Language, Weekday};

use crate::{Event, ScheduleError, ScheduleResult};

/// A validated `(weekday set, start, end, label)` tuple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Ascending, without duplicates.
    pub days:  Vec<Weekday>,
    pub start: ClockTime,
    pub end:   ClockTime,
    pub label: String,
}

impl Slot {
    /// Parse the textual day and time specs of one slot.
    pub fn parse(days: &str, time: &str, label: impl Into<String>, lang: Language) -> ScheduleResult<Self> {
        let days = parse_days(days, lang)?;
        let (start, end) = parse_time_range(time)?;
        Ok(Self { days, start, end, label: label.into() })
    }

    /// One single-day event per weekday, in weekday order.
    pub fn events(&self) -> impl Iterator<Item = ScheduleResult<Event>> + '_ {
        self.days
            .iter()
            .map(|&day| Event::on(day, self.start, self.end, self.label.clone()))
    }
}

/// Expand a day spec such as `mon-wed,fri` into a sorted weekday list.
pub fn parse_days(spec: &str, lang: Language) -> ScheduleResult<Vec<Weekday>> {
    let day = |abbr: &str| {
        lang.parse_day(abbr).ok_or_else(|| {
            ScheduleError::Parse(format!("invalid day {abbr:?} for language {lang}"))
        })
    };

    let mut days = BTreeSet::new();
    for item in spec.split(',') {
        let item = item.trim();
        if item.is_empty() {
            return Err(ScheduleError::Parse(format!("empty day in {spec:?}")));
        }
        match item.split_once('-') {
            Some((a, b)) => {
                let (first, last) = (day(a)?, day(b)?);
                if first > last {
                    return Err(ScheduleError::Parse(format!(
                        "day range {item:?} runs backwards (weeks start on {})",
                        Weekday::SUNDAY.name(lang)
                    )));
                }
                days.extend((first.get()..=last.get()).map(|d| Weekday::ALL[d as usize]));
            }
            None => {
                days.insert(day(item)?);
            }
        }
    }
    Ok(days.into_iter().collect())
}

/// Parse `HH:MM-HH:MM`.  Ordering is not checked here; an end before the
/// start is rejected when the `Event` is built.
pub fn parse_time_range(spec: &str) -> ScheduleResult<(ClockTime, ClockTime)> {
    let (a, b) = spec
        .trim()
        .split_once('-')
        .ok_or_else(|| ScheduleError::Parse(format!("invalid time spec {spec:?}: expected HH:MM-HH:MM")))?;
    let parse = |t: &str| {
        t.parse::<ClockTime>()
            .map_err(|e| ScheduleError::Parse(format!("invalid time spec {spec:?}: {e}")))
    };
    Ok((parse(a)?, parse(b)?))
}

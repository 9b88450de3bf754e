//! Source document loaders.
//!
//! # TOML format
//!
//! An optional `[config]` table (see [`ScheduleConfig`] for keys and
//! defaults) followed by any number of `[[slot]]` entries, inserted in
//! document order:
//!
//! ```toml
//! [config]
//! lang  = "en"
//! title = "Spring term"
//! seed  = 7
//!
//! [[slot]]
//! days  = "mon-wed,fri"
//! time  = "09:00-10:00"
//! label = "Math"
//! ```
//!
//! # CSV format
//!
//! Slots only; the configuration is supplied separately.
//!
//! ```csv
//! days,time,label
//! mon-wed,09:00-10:00,Math
//! tue,10:00-11:00,Physics
//! ```

use std::io::Read;
use std::path::Path;

use log::info;
use serde::Deserialize;
use tempo_core::{Language, ScheduleConfig};

use crate::{Schedule, ScheduleResult, Slot};

// ── Records ───────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SourceDocument {
    #[serde(default)]
    config: ScheduleConfig,
    #[serde(default, rename = "slot")]
    slots:  Vec<SlotRecord>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SlotRecord {
    days:  String,
    time:  String,
    label: String,
}

impl SlotRecord {
    fn into_slot(self, lang: Language) -> ScheduleResult<Slot> {
        Slot::parse(&self.days, &self.time, self.label, lang)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and build a schedule from a TOML source file.
pub fn load_schedule_toml(path: &Path) -> ScheduleResult<Schedule> {
    let text = std::fs::read_to_string(path)?;
    let schedule = load_schedule_str(&text)?;
    info!("loaded {} events from {}", schedule.len(), path.display());
    Ok(schedule)
}

/// Like [`load_schedule_toml`] but reads from an in-memory string.
pub fn load_schedule_str(text: &str) -> ScheduleResult<Schedule> {
    let doc: SourceDocument = toml::from_str(text)?;
    let lang = doc.config.language;
    let slots = doc
        .slots
        .into_iter()
        .map(|r| r.into_slot(lang))
        .collect::<ScheduleResult<Vec<_>>>()?;
    build_schedule(doc.config, slots)
}

/// Load slots from a CSV file with a `days,time,label` header.
pub fn load_slots_csv(path: &Path, lang: Language) -> ScheduleResult<Vec<Slot>> {
    let file = std::fs::File::open(path)?;
    load_slots_reader(file, lang)
}

/// Like [`load_slots_csv`] but accepts any `Read` source.
pub fn load_slots_reader<R: Read>(reader: R, lang: Language) -> ScheduleResult<Vec<Slot>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut slots = Vec::new();
    for result in csv_reader.deserialize::<SlotRecord>() {
        slots.push(result?.into_slot(lang)?);
    }
    Ok(slots)
}

/// Build a schedule from `config` and `slots`, expanding each slot into one
/// single-day event per weekday.  Stops at the first invalid or conflicting
/// event.
pub fn build_schedule<I>(config: ScheduleConfig, slots: I) -> ScheduleResult<Schedule>
where
    I: IntoIterator<Item = Slot>,
{
    let mut schedule = Schedule::new(config)?;
    for slot in slots {
        for event in slot.events() {
            schedule.insert(event?)?;
        }
    }
    Ok(schedule)
}


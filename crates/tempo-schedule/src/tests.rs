//! Unit tests for tempo-schedule.

use tempo_core::{ClockTime, ScheduleConfig, Weekday};

use crate::{Event, Schedule, ScheduleError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn t(h: u8, m: u8) -> ClockTime {
    ClockTime::new(h, m).unwrap()
}

fn ev(day: Weekday, (h, m): (u8, u8), (eh, em): (u8, u8), label: &str) -> Event {
    Event::on(day, t(h, m), t(eh, em), label).unwrap()
}

fn empty() -> Schedule {
    Schedule::new(ScheduleConfig::default()).unwrap()
}

/// Monday: Math 09:00–10:00, Physics 10:00–11:00.
fn monday_pair() -> Schedule {
    let mut s = empty();
    s.insert(ev(Weekday::MONDAY, (9, 0), (10, 0), "Math")).unwrap();
    s.insert(ev(Weekday::MONDAY, (10, 0), (11, 0), "Physics")).unwrap();
    s
}

/// Re-walk every timeline and check the order and overlap invariants.
fn assert_invariants(s: &Schedule) {
    for day in s.days() {
        let events = day.events();
        for w in events.windows(2) {
            assert!(w[0].start() <= w[1].start(), "{day} out of order");
        }
        for (i, a) in events.iter().enumerate() {
            for b in &events[i + 1..] {
                assert!(!a.collides_with(b), "{a} collides with {b} on {}", day.day());
            }
        }
    }
}

// ── Event ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event {
    use super::*;

    #[test]
    fn offsets_derived_from_fields() {
        let e = Event::new(1, 2, 9, 15, 10, 45, "Math").unwrap();
        assert_eq!(e.start_offset(), 555);
        assert_eq!(e.end_offset(), 645);
        assert_eq!(e.first_day(), Weekday::MONDAY);
        assert_eq!(e.days().collect::<Vec<_>>(), vec![Weekday::MONDAY]);
    }

    #[test]
    fn rejects_reversed_days() {
        assert!(matches!(Event::new(2, 2, 9, 0, 10, 0, "x"), Err(ScheduleError::InvalidEvent(_))));
        assert!(matches!(Event::new(3, 1, 9, 0, 10, 0, "x"), Err(ScheduleError::InvalidEvent(_))));
        assert!(matches!(Event::new(6, 8, 9, 0, 10, 0, "x"), Err(ScheduleError::InvalidEvent(_))));
    }

    #[test]
    fn rejects_reversed_times() {
        assert!(matches!(Event::new(1, 2, 11, 0, 10, 0, "x"), Err(ScheduleError::InvalidEvent(_))));
        assert!(matches!(Event::new(1, 2, 10, 30, 10, 15, "x"), Err(ScheduleError::InvalidEvent(_))));
    }

    #[test]
    fn minutes_compare_only_within_equal_hours() {
        // 09:45–10:15 has start minute > end minute but is a valid interval.
        assert!(Event::new(1, 2, 9, 45, 10, 15, "x").is_ok());
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(matches!(Event::new(1, 2, 24, 0, 24, 0, "x"), Err(ScheduleError::InvalidEvent(_))));
        assert!(matches!(Event::new(1, 2, 9, 60, 10, 0, "x"), Err(ScheduleError::InvalidEvent(_))));
    }

    #[test]
    fn zero_length_allowed() {
        let e = Event::new(0, 1, 12, 0, 12, 0, "noon").unwrap();
        assert!(e.is_zero_length());
    }

    #[test]
    fn multi_day_span() {
        let e = Event::new(1, 4, 9, 0, 10, 0, "Retreat").unwrap();
        let days: Vec<_> = e.days().collect();
        assert_eq!(days, vec![Weekday::MONDAY, Weekday::TUESDAY, Weekday::WEDNESDAY]);
        assert_eq!(e.describe(), "Monday-Wednesday 09:00-10:00 \"Retreat\"");
    }

    #[test]
    fn display() {
        let e = ev(Weekday::FRIDAY, (8, 5), (9, 0), "Gym");
        assert_eq!(e.to_string(), "[Gym|08:05~09:00]");
        assert_eq!(e.describe(), "Friday 08:05-09:00 \"Gym\"");
    }

    #[test]
    fn collision_rules() {
        let base = ev(Weekday::MONDAY, (9, 0), (10, 0), "a");
        let cases = [
            ((10, 0), (11, 0), false), // touching after
            ((8, 0), (9, 0), false),   // touching before
            ((9, 30), (10, 30), true), // start inside
            ((8, 30), (9, 30), true),  // end inside
            ((9, 15), (9, 45), true),  // strict subset
            ((8, 0), (11, 0), true),   // strict superset
            ((9, 0), (10, 0), true),   // duplicate
            ((9, 0), (9, 30), true),   // shared start, shorter
            ((9, 0), (11, 0), true),   // shared start, longer
            ((11, 0), (12, 0), false), // disjoint
        ];
        for (s, e, expected) in cases {
            let other = ev(Weekday::MONDAY, s, e, "b");
            assert_eq!(base.collides_with(&other), expected, "{other}");
            assert_eq!(other.collides_with(&base), expected, "{other} (reversed)");
        }
    }
}

// ── DayTimeline ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod timeline {
    use super::*;
    use crate::DayTimeline;

    #[test]
    fn search_on_empty_is_zero() {
        let day = DayTimeline::new(Weekday::MONDAY);
        assert_eq!(day.search(&ev(Weekday::MONDAY, (9, 0), (10, 0), "a")), 0);
    }

    #[test]
    fn search_orders_by_hour_then_minute() {
        let s = monday_pair();
        let day = s.day(Weekday::MONDAY);
        assert_eq!(day.search(&ev(Weekday::MONDAY, (8, 0), (9, 0), "x")), 0);
        assert_eq!(day.search(&ev(Weekday::MONDAY, (9, 59), (10, 0), "x")), 1);
        assert_eq!(day.search(&ev(Weekday::MONDAY, (11, 0), (12, 0), "x")), 2);
    }

    #[test]
    fn equal_start_lands_before_resident() {
        // A zero-length marker and a block may share a start time.
        let mut s = empty();
        s.insert(ev(Weekday::MONDAY, (10, 0), (10, 0), "marker")).unwrap();
        s.insert(ev(Weekday::MONDAY, (10, 0), (11, 0), "block")).unwrap();
        let labels: Vec<_> = s.day(Weekday::MONDAY).events().iter().map(Event::label).collect();
        assert_eq!(labels, ["block", "marker"]);
    }

    #[test]
    fn display_dump() {
        let s = monday_pair();
        assert_eq!(
            s.day(Weekday::MONDAY).to_string(),
            "[day1|00:00~00:00]->[Math|09:00~10:00]->[Physics|10:00~11:00]"
        );
        assert_eq!(s.day(Weekday::SUNDAY).to_string(), "[day0|00:00~00:00]");
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule {
    use super::*;

    #[test]
    fn adjacent_events_accepted() {
        let s = monday_pair();
        assert_eq!(s.len(), 2);
        assert_invariants(&s);
    }

    #[test]
    fn straddling_event_reports_both_conflicts() {
        let mut s = monday_pair();
        let err = s.insert(ev(Weekday::MONDAY, (9, 30), (10, 30), "Chem")).unwrap_err();
        match &err {
            ScheduleError::Conflict { event, conflicts } => {
                assert_eq!(event.label(), "Chem");
                assert_eq!(conflicts.len(), 2);
                assert!(conflicts.iter().all(|c| c.day == Weekday::MONDAY));
                assert_eq!(conflicts[0].existing.label(), "Math");
                assert_eq!(conflicts[1].existing.label(), "Physics");
            }
            other => panic!("expected Conflict, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "Monday 09:30-10:30 \"Chem\" is not available: overlaps \
             Monday 09:00-10:00 \"Math\", Monday 10:00-11:00 \"Physics\""
        );
        // Rejected insert leaves the schedule untouched.
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn subset_superset_duplicate_rejected() {
        let mut s = monday_pair();
        for (a, b) in [((9, 15), (9, 45)), ((8, 0), (12, 0)), ((9, 0), (10, 0))] {
            let r = s.insert(ev(Weekday::MONDAY, a, b, "x"));
            assert!(matches!(r, Err(ScheduleError::Conflict { .. })), "{a:?}-{b:?}");
        }
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn same_time_other_day_is_free() {
        let mut s = monday_pair();
        s.insert(ev(Weekday::TUESDAY, (9, 0), (10, 0), "Math")).unwrap();
        assert_eq!(s.day(Weekday::TUESDAY).len(), 1);
    }

    #[test]
    fn multi_day_event_checked_on_every_day() {
        let mut s = empty();
        s.insert(ev(Weekday::WEDNESDAY, (9, 0), (10, 0), "Lab")).unwrap();
        let span = Event::new(1, 4, 9, 30, 10, 30, "Retreat").unwrap();
        assert!(!s.is_free(&span));
        let conflicts = s.conflicts(&span);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].day, Weekday::WEDNESDAY);
    }

    #[test]
    fn multi_day_event_filed_under_first_day() {
        let mut s = empty();
        s.insert(Event::new(1, 3, 9, 0, 10, 0, "Retreat").unwrap()).unwrap();
        assert_eq!(s.day(Weekday::MONDAY).len(), 1);
        assert!(s.day(Weekday::TUESDAY).is_empty());
    }

    #[test]
    fn order_holds_after_shuffled_inserts() {
        let mut s = empty();
        let slots = [(14, 0), (8, 30), (11, 15), (8, 0), (17, 45), (11, 0), (9, 0)];
        for (h, m) in slots {
            let end = if m + 15 < 60 { (h, m + 15) } else { (h + 1, m + 15 - 60) };
            s.insert(ev(Weekday::THURSDAY, (h, m), end, "x")).unwrap();
        }
        let starts: Vec<_> = s.day(Weekday::THURSDAY).events().iter().map(Event::start).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
        assert_invariants(&s);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = ScheduleConfig { hour_span: 0, ..Default::default() };
        assert!(matches!(Schedule::new(config), Err(ScheduleError::Core(_))));
    }

    #[test]
    fn seed_override_keeps_validated_geometry() {
        let config = ScheduleConfig { start_hour: 8, hour_span: 10, ..Default::default() };
        let mut s = Schedule::new(config.clone()).unwrap();
        s.insert(ev(Weekday::MONDAY, (9, 0), (10, 0), "Math")).unwrap();

        s.set_seed(Some(42));
        assert_eq!(s.config().seed, Some(42));
        assert_eq!(ScheduleConfig { seed: None, ..s.config().clone() }, config);
        assert!(s.config().validate().is_ok());
        assert_eq!(s.len(), 1);

        s.set_seed(None);
        assert_eq!(s.config(), &config);
    }

    #[test]
    fn display_has_seven_lines() {
        let s = monday_pair();
        let dump = s.to_string();
        assert_eq!(dump.lines().count(), 7);
        assert!(dump.lines().nth(1).unwrap().ends_with("[Physics|10:00~11:00]"));
    }
}

// ── Slot parsing ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod slot {
    use tempo_core::Language;

    use super::*;
    use crate::{Slot, parse_days, parse_time_range};

    #[test]
    fn day_ranges_and_lists() {
        let days = parse_days("mon-wed, fri", Language::En).unwrap();
        assert_eq!(
            days,
            vec![Weekday::MONDAY, Weekday::TUESDAY, Weekday::WEDNESDAY, Weekday::FRIDAY]
        );
    }

    #[test]
    fn duplicate_days_collapse() {
        let days = parse_days("mon,mon-tue,tue", Language::En).unwrap();
        assert_eq!(days, vec![Weekday::MONDAY, Weekday::TUESDAY]);
    }

    #[test]
    fn localized_days() {
        let days = parse_days("seg-qua", Language::PtBr).unwrap();
        assert_eq!(days.len(), 3);
        assert!(parse_days("seg", Language::En).is_err());
    }

    #[test]
    fn bad_day_specs() {
        for bad in ["", "mon,", "fri-mon", "monday", "mon-"] {
            assert!(matches!(parse_days(bad, Language::En), Err(ScheduleError::Parse(_))), "{bad:?}");
        }
    }

    #[test]
    fn time_ranges() {
        let (a, b) = parse_time_range("09:00-10:30").unwrap();
        assert_eq!((a, b), (t(9, 0), t(10, 30)));
        for bad in ["9:00-10:00", "09:00", "09:00-24:00", "09:00~10:00"] {
            assert!(matches!(parse_time_range(bad), Err(ScheduleError::Parse(_))), "{bad:?}");
        }
    }

    #[test]
    fn slot_expands_per_day() {
        let slot = Slot::parse("mon,wed", "09:00-10:00", "Math", Language::En).unwrap();
        let events: Vec<_> = slot.events().collect::<Result<_, _>>().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].first_day(), Weekday::WEDNESDAY);
        assert_eq!(events[1].day_end(), 4);
    }

    #[test]
    fn reversed_time_fails_as_invalid_event() {
        let slot = Slot::parse("mon", "11:00-10:00", "x", Language::En).unwrap();
        let first = slot.events().next().unwrap();
        assert!(matches!(first, Err(ScheduleError::InvalidEvent(_))));
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use tempo_core::Language;

    use super::*;
    use crate::{build_schedule, load_schedule_str, load_schedule_toml, load_slots_reader};

    const SOURCE: &str = r#"
[config]
lang  = "pt-BR"
title = "Semestre"
seed  = 11
start = 7
hours = 12

[[slot]]
days  = "seg-qua"
time  = "09:00-10:00"
label = "Cálculo"

[[slot]]
days  = "seg"
time  = "10:00-11:00"
label = "Física"
"#;

    #[test]
    fn toml_document() {
        let s = load_schedule_str(SOURCE).unwrap();
        assert_eq!(s.config().language, Language::PtBr);
        assert_eq!(s.config().title.as_deref(), Some("Semestre"));
        assert_eq!(s.config().seed, Some(11));
        assert_eq!((s.config().start_hour, s.config().hour_span), (7, 12));
        assert_eq!(s.config().margin_top, 5.0); // default kept
        assert_eq!(s.len(), 4);
        assert_eq!(s.day(Weekday::MONDAY).len(), 2);
    }

    #[test]
    fn toml_without_config_uses_defaults() {
        let s = load_schedule_str("[[slot]]\ndays = \"sat\"\ntime = \"08:00-09:00\"\nlabel = \"Run\"\n").unwrap();
        assert_eq!(s.config(), &ScheduleConfig::default());
        assert_eq!(s.day(Weekday::SATURDAY).len(), 1);
    }

    #[test]
    fn toml_conflict_surfaces() {
        let src = "[[slot]]\ndays = \"mon\"\ntime = \"09:00-10:00\"\nlabel = \"a\"\n\
                   [[slot]]\ndays = \"sun-sat\"\ntime = \"09:30-09:45\"\nlabel = \"b\"\n";
        let err = load_schedule_str(src).unwrap_err();
        assert!(matches!(err, ScheduleError::Conflict { .. }));
    }

    #[test]
    fn toml_rejects_unknown_language_and_keys() {
        assert!(matches!(load_schedule_str("[config]\nlang = \"fr\"\n"), Err(ScheduleError::Toml(_))));
        assert!(matches!(load_schedule_str("[config]\ncolour = 1\n"), Err(ScheduleError::Toml(_))));
    }

    #[test]
    fn toml_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("week.toml");
        std::fs::write(&path, SOURCE).unwrap();
        assert_eq!(load_schedule_toml(&path).unwrap().len(), 4);
        assert!(matches!(
            load_schedule_toml(&dir.path().join("missing.toml")),
            Err(ScheduleError::Io(_))
        ));
    }

    #[test]
    fn csv_slots() {
        let csv = "days,time,label\nmon-tue,09:00-10:00,Math\n fri , 13:00-14:00 , Art\n";
        let slots = load_slots_reader(Cursor::new(csv), Language::En).unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[1].days, vec![Weekday::FRIDAY]);
        assert_eq!(slots[1].label, "Art");

        let s = build_schedule(ScheduleConfig::default(), slots).unwrap();
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn csv_bad_time() {
        let csv = "days,time,label\nmon,9-10,Math\n";
        assert!(matches!(
            load_slots_reader(Cursor::new(csv), Language::En),
            Err(ScheduleError::Parse(_))
        ));
    }
}

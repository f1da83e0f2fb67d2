//! Week-parity expansion over a full semester.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use schedsync_calendar::{CalendarConfig, materialize, week_number};
use schedsync_extract::{LessonType, ScheduleEntry, WeekParity};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// 2025-09-01 (Monday) through 2025-12-28 (Sunday): exactly 17 weeks.
fn semester() -> CalendarConfig {
    CalendarConfig::new(d(2025, 9, 1), d(2025, 12, 28))
}

fn monday_lesson(parity: WeekParity) -> ScheduleEntry {
    ScheduleEntry {
        subject: "Философия".into(),
        kind: LessonType::Practice,
        teacher: None,
        room: Some("Л-221".into()),
        day: 0,
        lesson: 3,
        start_time: NaiveTime::from_hms_opt(12, 40, 0).unwrap(),
        duration_minutes: 95,
        parity,
    }
}

#[test]
fn odd_weeks_yield_nine_single_events() {
    let events = materialize(&[monday_lesson(WeekParity::Odd)], &semester()).unwrap();
    assert_eq!(events.len(), 9);
    assert!(events.iter().all(|e| !e.is_recurring()));
    assert_eq!(events[0].start.date_naive(), d(2025, 9, 1));
    assert_eq!(events[1].start.date_naive(), d(2025, 9, 15));
    assert_eq!(events[8].start.date_naive(), d(2025, 12, 22));
}

#[test]
fn even_weeks_yield_eight_single_events() {
    let events = materialize(&[monday_lesson(WeekParity::Even)], &semester()).unwrap();
    assert_eq!(events.len(), 8);
    assert_eq!(events[0].start.date_naive(), d(2025, 9, 8));
    for e in &events {
        assert_eq!(e.start.weekday(), Weekday::Mon);
        assert_eq!(week_number(d(2025, 9, 1), e.start.date_naive()) % 2, 0);
    }
}

#[test]
fn every_week_is_a_single_recurring_event() {
    let events = materialize(&[monday_lesson(WeekParity::All)], &semester()).unwrap();
    assert_eq!(events.len(), 1);
    assert!(events[0].is_recurring());
}

#[test]
fn uids_are_unique_and_deterministic() {
    let entries = [
        monday_lesson(WeekParity::Odd),
        monday_lesson(WeekParity::Even),
    ];
    let first = materialize(&entries, &semester()).unwrap();
    let second = materialize(&entries, &semester()).unwrap();
    assert_eq!(first, second);

    let mut uids: Vec<&str> = first.iter().map(|e| e.uid.as_str()).collect();
    uids.sort_unstable();
    uids.dedup();
    assert_eq!(uids.len(), 17);
    assert_eq!(first[0].uid, "0-20250901-3@schedsync");
    assert_eq!(first[9].uid, "1-20250908-3@schedsync");
}

#[test]
fn mid_week_start_counts_partial_week_as_first() {
    // Starting on Wednesday: Monday 09-01 is before the window, so the
    // first Monday (09-08) falls in week 2 and is even.
    let cfg = CalendarConfig::new(d(2025, 9, 3), d(2025, 9, 30));
    let odd = materialize(&[monday_lesson(WeekParity::Odd)], &cfg).unwrap();
    let dates: Vec<NaiveDate> = odd.iter().map(|e| e.start.date_naive()).collect();
    assert_eq!(dates, vec![d(2025, 9, 15), d(2025, 9, 29)]);
}

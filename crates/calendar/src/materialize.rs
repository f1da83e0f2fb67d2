//! Expansion of schedule entries into calendar events.

use chrono::{
    DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc, Weekday,
};
use schedsync_extract::{ScheduleEntry, WeekParity};
use tracing::{debug, info};

use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::event::{CalendarEvent, Recurrence};

/// Placeholder for a missing teacher or room in event descriptions.
const UNSPECIFIED: &str = "не указано";

/// First date on or after `from` that falls on `weekday`.
pub fn first_occurrence(from: NaiveDate, weekday: Weekday) -> NaiveDate {
    let target = weekday.num_days_from_monday();
    let current = from.weekday().num_days_from_monday();
    let delta = (7 + target - current) % 7;
    from + Days::new(u64::from(delta))
}

/// 1-based semester week of `date`.
///
/// Week 1 is the Monday-based week containing `semester_start`. Dates
/// before that week yield 0.
pub fn week_number(semester_start: NaiveDate, date: NaiveDate) -> u32 {
    let back = semester_start.weekday().num_days_from_monday();
    let week_one = semester_start - Days::new(u64::from(back));
    let days = (date - week_one).num_days();
    if days < 0 { 0 } else { (days / 7 + 1) as u32 }
}

/// Expands `entries` into calendar events, in entry order.
///
/// An entry for every week becomes one event with a weekly rule ending on
/// the semester's last day. Odd- or even-week entries cannot be written as a
/// single weekly rule, so each matching week gets its own event instead.
/// Entries whose weekday never occurs inside the window produce nothing.
///
/// # Errors
///
/// Returns [`CalendarError`] when `config` is invalid or an instant cannot
/// be represented.
pub fn materialize(
    entries: &[ScheduleEntry],
    config: &CalendarConfig,
) -> Result<Vec<CalendarEvent>, CalendarError> {
    config.validate()?;

    let start = config.semester_start();
    let end = config.semester_end();
    let until = semester_until(config)?;

    let mut events = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let first = first_occurrence(start, entry.weekday());
        if first > end {
            debug!(idx, subject = %entry.subject, "no occurrence inside semester window");
            continue;
        }

        match entry.parity {
            WeekParity::All => {
                let rule = Recurrence::Weekly { until };
                events.push(build_event(idx, entry, first, config, Some(rule))?);
            }
            parity => {
                let mut date = first;
                while date <= end {
                    if parity.includes_week(week_number(start, date)) {
                        events.push(build_event(idx, entry, date, config, None)?);
                    }
                    date = date + Days::new(7);
                }
            }
        }
    }

    info!(
        n_entries = entries.len(),
        n_events = events.len(),
        "calendar events materialized"
    );
    Ok(events)
}

/// Last second of the semester's final day, in UTC.
fn semester_until(config: &CalendarConfig) -> Result<DateTime<Utc>, CalendarError> {
    let last = NaiveTime::from_hms_opt(23, 59, 59).expect("23:59:59 is a valid time");
    localize(config.semester_end(), last, config.utc_offset()).map(|dt| dt.with_timezone(&Utc))
}

fn localize(
    date: NaiveDate,
    time: NaiveTime,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, CalendarError> {
    offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .ok_or_else(|| CalendarError::InvalidTime {
            reason: format!("{date} {time} has no single instant at {offset}"),
        })
}

fn build_event(
    idx: usize,
    entry: &ScheduleEntry,
    date: NaiveDate,
    config: &CalendarConfig,
    recurrence: Option<Recurrence>,
) -> Result<CalendarEvent, CalendarError> {
    let start = localize(date, entry.start_time, config.utc_offset())?;
    let end = start
        .checked_add_signed(TimeDelta::minutes(i64::from(entry.duration_minutes)))
        .ok_or_else(|| CalendarError::InvalidTime {
            reason: format!("end of event {idx} overflows"),
        })?;

    Ok(CalendarEvent {
        uid: format!(
            "{idx}-{}-{}@{}",
            date.format("%Y%m%d"),
            entry.lesson,
            config.uid_domain()
        ),
        title: format!("{} ({})", entry.subject, entry.kind.label()),
        location: entry
            .room
            .clone()
            .or_else(|| config.default_location().map(str::to_string)),
        start,
        end,
        description: describe(entry),
        recurrence,
    })
}

/// Teacher, type and room, one per line, always in that order.
fn describe(entry: &ScheduleEntry) -> String {
    [
        format!(
            "Преподаватель: {}",
            entry.teacher.as_deref().unwrap_or(UNSPECIFIED)
        ),
        format!("Тип: {}", entry.kind.label()),
        format!("Аудитория: {}", entry.room.as_deref().unwrap_or(UNSPECIFIED)),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use schedsync_extract::LessonType;

    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn entry(day: u8, parity: WeekParity) -> ScheduleEntry {
        ScheduleEntry {
            subject: "Математика".into(),
            kind: LessonType::Lecture,
            teacher: Some("Иванов А.Б.".into()),
            room: Some("Л-550".into()),
            day,
            lesson: 1,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            duration_minutes: 95,
            parity,
        }
    }

    #[test]
    fn first_occurrence_same_day() {
        // 2025-09-01 is a Monday.
        assert_eq!(first_occurrence(d(2025, 9, 1), Weekday::Mon), d(2025, 9, 1));
    }

    #[test]
    fn first_occurrence_wraps_week() {
        // 2025-09-03 is a Wednesday; the next Monday is 09-08.
        assert_eq!(first_occurrence(d(2025, 9, 3), Weekday::Mon), d(2025, 9, 8));
        assert_eq!(first_occurrence(d(2025, 9, 3), Weekday::Fri), d(2025, 9, 5));
    }

    #[test]
    fn week_numbers() {
        let start = d(2025, 9, 3);
        assert_eq!(week_number(start, d(2025, 9, 1)), 1);
        assert_eq!(week_number(start, d(2025, 9, 7)), 1);
        assert_eq!(week_number(start, d(2025, 9, 8)), 2);
        assert_eq!(week_number(start, d(2025, 8, 31)), 0);
    }

    #[test]
    fn weekly_event_fields() {
        let cfg = CalendarConfig::new(d(2025, 9, 1), d(2025, 12, 31));
        let events = materialize(&[entry(2, WeekParity::All)], &cfg).unwrap();
        assert_eq!(events.len(), 1);

        let ev = &events[0];
        assert_eq!(ev.title, "Математика (Лекционные)");
        assert_eq!(ev.location.as_deref(), Some("Л-550"));
        assert_eq!(ev.start.to_rfc3339(), "2025-09-03T09:00:00+03:00");
        assert_eq!(ev.end.to_rfc3339(), "2025-09-03T10:35:00+03:00");
        assert_eq!(ev.uid, "0-20250903-1@schedsync");
        assert_eq!(
            ev.description,
            "Преподаватель: Иванов А.Б.\nТип: Лекционные\nАудитория: Л-550"
        );
        let Some(Recurrence::Weekly { until }) = ev.recurrence else {
            panic!("expected weekly recurrence");
        };
        assert_eq!(until.to_rfc3339(), "2025-12-31T20:59:59+00:00");
    }

    #[test]
    fn missing_fields_use_placeholders_and_default_location() {
        let cfg = CalendarConfig::new(d(2025, 9, 1), d(2025, 12, 31))
            .with_default_location(Some("НИТУ МИСИС"));
        let mut e = entry(0, WeekParity::All);
        e.teacher = None;
        e.room = None;
        e.kind = LessonType::Generic;
        let ev = &materialize(&[e], &cfg).unwrap()[0];
        assert_eq!(ev.location.as_deref(), Some("НИТУ МИСИС"));
        assert_eq!(ev.title, "Математика (Занятие)");
        assert_eq!(
            ev.description,
            "Преподаватель: не указано\nТип: Занятие\nАудитория: не указано"
        );
    }

    #[test]
    fn weekday_outside_short_window_is_skipped() {
        // Monday..Wednesday only; a Friday lesson never occurs.
        let cfg = CalendarConfig::new(d(2025, 9, 1), d(2025, 9, 3));
        let events = materialize(&[entry(4, WeekParity::All)], &cfg).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn invalid_window_is_rejected() {
        let cfg = CalendarConfig::new(d(2025, 9, 1), d(2025, 8, 1));
        assert!(matches!(
            materialize(&[entry(0, WeekParity::All)], &cfg),
            Err(CalendarError::InvalidWindow { .. })
        ));
    }
}

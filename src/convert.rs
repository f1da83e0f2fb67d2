//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};
use chrono::{FixedOffset, NaiveDate, NaiveTime};

use crate::config::*;

use schedsync_calendar::CalendarConfig;
use schedsync_extract::{ExtractConfig, LexerConfig, SlotTime, SlotTimeTable};

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date {s:?}, expected YYYY-MM-DD"))
}

/// Parses an `HH:MM` clock time.
pub fn parse_clock(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .with_context(|| format!("invalid time {s:?}, expected HH:MM"))
}

/// Parses a UTC offset written as `+HH:MM`, `-HH:MM`, `+HHMM` or `Z`.
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") {
        return Ok(FixedOffset::east_opt(0).expect("zero offset is in range"));
    }
    s.parse::<FixedOffset>()
        .with_context(|| format!("invalid UTC offset {s:?}, expected +HH:MM"))
}

/// Builds the lesson slot table; the built-in table when `slots` is `None`.
pub fn build_slot_table(slots: Option<&[SlotToml]>) -> Result<SlotTimeTable> {
    let Some(slots) = slots else {
        return Ok(SlotTimeTable::default());
    };
    let parsed = slots
        .iter()
        .map(|s| {
            let start = parse_clock(&s.start)?;
            let end = parse_clock(&s.end)?;
            let slot = SlotTime::new(s.lesson, start, end)?;
            Ok((s.lesson, slot))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(SlotTimeTable::new(parsed)?)
}

/// Builds a [`LexerConfig`], replacing only the marker lists that are set.
pub fn build_lexer_config(lexer: &LexerToml) -> LexerConfig {
    let mut cfg = LexerConfig::default();
    if let Some(ref v) = lexer.lecture {
        cfg = cfg.with_lecture_markers(v.clone());
    }
    if let Some(ref v) = lexer.practice {
        cfg = cfg.with_practice_markers(v.clone());
    }
    if let Some(ref v) = lexer.lab {
        cfg = cfg.with_lab_markers(v.clone());
    }
    cfg
}

/// Builds an [`ExtractConfig`] for `group_label`.
pub fn build_extract_config(config: &SchedSyncConfig, group_label: &str) -> Result<ExtractConfig> {
    let cfg = ExtractConfig::new(group_label)
        .with_marker_column(config.group.marker_column)
        .with_slots(build_slot_table(config.slots.as_deref())?)
        .with_lexer(build_lexer_config(&config.lexer));
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`CalendarConfig`] from the semester and calendar sections.
///
/// The calendar is named after `group_label` unless `[calendar].name` is set.
pub fn build_calendar_config(config: &SchedSyncConfig, group_label: &str) -> Result<CalendarConfig> {
    let sem = &config.semester;
    let start = parse_date(&sem.start).context("[semester].start")?;
    let end = parse_date(&sem.end).context("[semester].end")?;
    let offset = parse_utc_offset(&sem.utc_offset).context("[semester].utc_offset")?;

    let name = config
        .calendar
        .name
        .clone()
        .unwrap_or_else(|| group_label.to_string());

    let cfg = CalendarConfig::new(start, end)
        .with_timezone(&sem.timezone, offset)
        .with_default_location(sem.default_location.clone())
        .with_name(name)
        .with_uid_domain(&config.calendar.uid_domain);
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets() {
        assert_eq!(parse_utc_offset("+03:00").unwrap().local_minus_utc(), 10800);
        assert_eq!(parse_utc_offset("+0500").unwrap().local_minus_utc(), 18000);
        assert_eq!(parse_utc_offset("-05:30").unwrap().local_minus_utc(), -19800);
        assert_eq!(parse_utc_offset("Z").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_utc_offset(" z ").unwrap().local_minus_utc(), 0);
        assert!(parse_utc_offset("MSK").is_err());
        assert!(parse_utc_offset("03:00").is_err());
        assert!(parse_utc_offset("+3").is_err());
        assert!(parse_utc_offset("+24:00").is_err());
    }

    #[test]
    fn clock_and_date() {
        assert_eq!(parse_clock("09:00").unwrap(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert!(parse_clock("9am").is_err());
        assert_eq!(
            parse_date("2025-09-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
        );
        assert!(parse_date("01.09.2025").is_err());
    }

    #[test]
    fn default_slot_table() {
        let table = build_slot_table(None).unwrap();
        assert_eq!(table.len(), 7);
    }

    #[test]
    fn custom_slot_table_rejects_inverted_slot() {
        let slots = [SlotToml {
            lesson: 1,
            start: "10:00".into(),
            end: "09:00".into(),
        }];
        assert!(build_slot_table(Some(&slots)).is_err());
    }

    #[test]
    fn partial_lexer_override() {
        let lexer = LexerToml {
            lab: Some(vec!["Лаб.".into()]),
            ..LexerToml::default()
        };
        let cfg = build_lexer_config(&lexer);
        assert_eq!(cfg.markers(schedsync_extract::LessonType::Lab), ["Лаб.".to_string()]);
        assert_eq!(
            cfg.markers(schedsync_extract::LessonType::Lecture),
            LexerConfig::default().markers(schedsync_extract::LessonType::Lecture)
        );
    }

    #[test]
    fn calendar_from_defaults() {
        let config = SchedSyncConfig::default();
        let cal = build_calendar_config(&config, "ББИ-25-2").unwrap();
        assert_eq!(cal.name(), "ББИ-25-2");
        assert_eq!(cal.timezone(), "Europe/Moscow");
        assert_eq!(cal.utc_offset().local_minus_utc(), 10800);
    }

    #[test]
    fn reversed_semester_is_rejected() {
        let mut config = SchedSyncConfig::default();
        config.semester.start = "2025-12-31".into();
        config.semester.end = "2025-09-01".into();
        assert!(build_calendar_config(&config, "x").is_err());
    }

    #[test]
    fn blank_group_is_rejected() {
        assert!(build_extract_config(&SchedSyncConfig::default(), "  ").is_err());
    }
}

//! iCalendar serialization on top of the `ical` component model.

use chrono::{DateTime, FixedOffset, Utc};
use ical::generator::Emitter;
use ical::parser::ical::component::{
    IcalCalendar, IcalEvent, IcalTimeZone, IcalTimeZoneTransition, IcalTimeZoneTransitionType,
};
use ical::property::Property;

use crate::config::CalendarConfig;
use crate::event::{CalendarEvent, Recurrence};

/// Product identifier written to every calendar.
pub const PRODID: &str = "-//schedsync//schedule export//RU";

const LOCAL_FORMAT: &str = "%Y%m%dT%H%M%S";
const UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Serializes `events` into one iCalendar document.
///
/// Times are written as local times tagged with the configured `TZID`,
/// which a single fixed-offset `VTIMEZONE` defines. `dtstamp` is written to
/// every event unchanged, so equal inputs give byte-identical output.
pub fn to_ics(events: &[CalendarEvent], config: &CalendarConfig, dtstamp: DateTime<Utc>) -> String {
    let tzid = config.timezone();

    let mut calendar = IcalCalendar::new();
    calendar.properties = vec![
        prop("VERSION", "2.0"),
        prop("PRODID", PRODID),
        prop("CALSCALE", "GREGORIAN"),
        prop("METHOD", "PUBLISH"),
        prop("X-WR-CALNAME", &text(config.name())),
        prop("X-WR-TIMEZONE", tzid),
    ];
    calendar.timezones.push(timezone(tzid, config.utc_offset()));

    let stamp = dtstamp.format(UTC_FORMAT).to_string();
    calendar.events = events
        .iter()
        .map(|event| vevent(event, tzid, &stamp))
        .collect();

    calendar.generate()
}

fn vevent(event: &CalendarEvent, tzid: &str, stamp: &str) -> IcalEvent {
    let mut properties = vec![
        prop("UID", &event.uid),
        prop("DTSTAMP", stamp),
        zoned("DTSTART", tzid, event.start),
        zoned("DTEND", tzid, event.end),
    ];
    if let Some(Recurrence::Weekly { until }) = event.recurrence {
        properties.push(prop(
            "RRULE",
            &format!("FREQ=WEEKLY;UNTIL={}", until.format(UTC_FORMAT)),
        ));
    }
    properties.push(prop("SUMMARY", &text(&event.title)));
    if let Some(location) = &event.location {
        properties.push(prop("LOCATION", &text(location)));
    }
    properties.push(prop("DESCRIPTION", &text(&event.description)));

    let mut vevent = IcalEvent::new();
    vevent.properties = properties;
    vevent
}

/// A `VTIMEZONE` with one `STANDARD` rule at a constant offset.
fn timezone(tzid: &str, offset: FixedOffset) -> IcalTimeZone {
    let offset = format_offset(offset);
    let mut tz = IcalTimeZone::new();
    tz.properties.push(prop("TZID", tzid));
    tz.transitions.push(IcalTimeZoneTransition {
        transition: IcalTimeZoneTransitionType::STANDARD,
        properties: vec![
            prop("DTSTART", "19700101T000000"),
            prop("TZOFFSETFROM", &offset),
            prop("TZOFFSETTO", &offset),
        ],
    });
    tz
}

fn prop(name: &str, value: &str) -> Property {
    Property {
        name: name.to_string(),
        params: None,
        value: Some(value.to_string()),
    }
}

fn zoned(name: &str, tzid: &str, at: DateTime<FixedOffset>) -> Property {
    Property {
        name: name.to_string(),
        params: Some(vec![("TZID".to_string(), vec![tzid.to_string()])]),
        value: Some(at.format(LOCAL_FORMAT).to_string()),
    }
}

/// TEXT value escaping; the emitter writes values as given.
fn text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            c => out.push(c),
        }
    }
    out
}

/// `+HHMM` / `-HHMM` form of a UTC offset.
fn format_offset(offset: FixedOffset) -> String {
    let secs = offset.local_minus_utc();
    let sign = if secs < 0 { '-' } else { '+' };
    let abs = secs.unsigned_abs();
    format!("{sign}{:02}{:02}", abs / 3600, (abs % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn text_values_are_escaped() {
        assert_eq!(text("a,b;c\\d\ne"), "a\\,b\\;c\\\\d\\ne");
        assert_eq!(text("plain"), "plain");
    }

    #[test]
    fn offsets() {
        assert_eq!(format_offset(FixedOffset::east_opt(3 * 3600).unwrap()), "+0300");
        assert_eq!(format_offset(FixedOffset::west_opt(5 * 3600 + 1800).unwrap()), "-0530");
        assert_eq!(format_offset(FixedOffset::east_opt(0).unwrap()), "+0000");
    }

    #[test]
    fn zoned_property_carries_tzid() {
        let at = FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 9, 2, 10, 50, 0)
            .unwrap();
        let p = zoned("DTSTART", "Europe/Moscow", at);
        assert_eq!(p.value.as_deref(), Some("20250902T105000"));
        assert_eq!(
            p.params,
            Some(vec![("TZID".to_string(), vec!["Europe/Moscow".to_string()])])
        );
    }
}

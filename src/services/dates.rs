use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Shown when an event has no date at all
pub const MISSING_DATE_LABEL: &str = "Data não definida";
/// Shown when an event date cannot be parsed
pub const INVALID_DATE_LABEL: &str = "Data inválida";

/// How far ahead an event still counts as upcoming
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a stored event date into local time.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM[:SS]` (local) and a bare
/// `YYYY-MM-DD`, which is taken as local midnight.
pub fn parse_event_date(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Local));
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    Local.from_local_datetime(&naive).earliest()
}

/// Formats an event date as `dd/mm/yyyy, HH:MM`
pub fn format_event_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return MISSING_DATE_LABEL.to_string();
    };
    match parse_event_date(raw) {
        Some(date) => format_local(&date),
        None => INVALID_DATE_LABEL.to_string(),
    }
}

pub fn format_local(date: &DateTime<Local>) -> String {
    date.format("%d/%m/%Y, %H:%M").to_string()
}

/// True when `date` falls between `now` and thirty days from now, inclusive
pub fn is_upcoming(date: &DateTime<Local>, now: &DateTime<Local>) -> bool {
    let horizon = *now + Duration::days(UPCOMING_WINDOW_DAYS);
    date >= now && date <= &horizon
}

/// Convenience wrapper over [`is_upcoming`] for raw stored values
pub fn is_upcoming_raw(raw: Option<&str>, now: &DateTime<Local>) -> bool {
    raw.and_then(parse_event_date)
        .is_some_and(|date| is_upcoming(&date, now))
}

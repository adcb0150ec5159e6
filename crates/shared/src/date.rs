use time::{
    Date, Month, OffsetDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};
use time_tz::{ToTimezone, timezones};

const LONG_DATE: &[BorrowedFormatItem<'_>] =
    format_description!("[weekday], [month repr:long] [day padding:none]");

const LONG_DATE_WITH_YEAR: &[BorrowedFormatItem<'_>] =
    format_description!("[weekday], [month repr:long] [day padding:none], [year]");

/// Parses a `YYYY-MM-DD` calendar date.
///
/// The result carries no offset: it is the studio's local calendar day, so
/// comparing it against [`today`] can never drift by a day the way a
/// UTC-midnight timestamp would.
pub fn parse_local_date(value: &str) -> crate::Result<Date> {
    let invalid = || crate::Error::InvalidDateFormat(value.to_owned());

    let mut parts = value.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let year = parse_segment(year, 4).ok_or_else(invalid)?;
    let month = parse_segment(month, 2).ok_or_else(invalid)?;
    let day = parse_segment(day, 2).ok_or_else(invalid)?;

    let month = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(invalid)?;
    let day = u8::try_from(day).map_err(|_| invalid())?;

    Date::from_calendar_date(year, month, day).map_err(|_| invalid())
}

fn parse_segment(segment: &str, width: usize) -> Option<i32> {
    if segment.len() != width || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    segment.parse().ok()
}

pub fn is_known_timezone(tz: &str) -> bool {
    timezones::get_by_name(tz).is_some()
}

/// Current instant in the given IANA timezone, UTC when the name is unknown.
pub fn now(tz: &str) -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();

    match timezones::get_by_name(tz) {
        Some(tz) => now.to_timezone(tz),
        None => now,
    }
}

/// The studio's current calendar day.
pub fn today(tz: &str) -> Date {
    now(tz).date()
}

/// `Tuesday, January 20`
pub fn format_long_date(date: Date) -> String {
    date.format(LONG_DATE).unwrap_or_else(|_| date.to_string())
}

/// `Tuesday, January 20, 2026`
pub fn format_long_date_with_year(date: Date) -> String {
    date.format(LONG_DATE_WITH_YEAR)
        .unwrap_or_else(|_| date.to_string())
}

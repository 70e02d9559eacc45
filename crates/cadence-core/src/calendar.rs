use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

use crate::error::CoreError;

/// Boundary format for calendar days.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Gregorian leap-year rule.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Moves a (year, 1-based month) pair forward by `months`, carrying into the year.
pub fn shift_month(year: i32, month: u32, months: u32) -> Option<(i32, u32)> {
    let zero_based = i64::from(month) - 1 + i64::from(months);
    let year = i64::from(year).checked_add(zero_based / 12)?;
    let year = i32::try_from(year).ok()?;
    Some((year, (zero_based % 12) as u32 + 1))
}

/// Builds a date the way lenient date libraries do: a day past the end of the
/// month rolls into the following month (Feb 29 of a common year is Mar 1).
///
/// Returns `None` only when the result is outside chrono's range or `day` is 0.
pub fn rolled_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if day == 0 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(u64::from(day - 1)))
}

/// Same month and day-of-month, ignoring the year.
#[inline]
pub fn same_month_day(a: NaiveDate, b: NaiveDate) -> bool {
    a.month() == b.month() && a.day() == b.day()
}

/// Parses a boundary date string into a calendar day.
///
/// Accepts `YYYY-MM-DD`; date-time strings are normalized to the calendar day
/// they are written in, without any timezone conversion.
pub fn parse_date(input: &str) -> Result<NaiveDate, CoreError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CoreError::InvalidDate("empty date".to_string()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        return Ok(date);
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(datetime.date());
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Ok(datetime.date_naive());
    }

    Err(CoreError::InvalidDate(format!(
        "'{}' is not a calendar date (expected YYYY-MM-DD)",
        input
    )))
}

/// Formats a calendar day in boundary form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapter for a calendar day: reads anything [`parse_date`] accepts and
/// writes `YYYY-MM-DD`.
pub struct CalendarDay;

impl<'de> DeserializeAs<'de, NaiveDate> for CalendarDay {
    fn deserialize_as<D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(de::Error::custom)
    }
}

impl SerializeAs<NaiveDate> for CalendarDay {
    fn serialize_as<S>(source: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&source.format(DATE_FORMAT))
    }
}

/// Like [`CalendarDay`], but `null` and blank strings read as `None`.
pub struct OptionalCalendarDay;

impl<'de> DeserializeAs<'de, Option<NaiveDate>> for OptionalCalendarDay {
    fn deserialize_as<D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => parse_date(&raw).map(Some).map_err(de::Error::custom),
            _ => Ok(None),
        }
    }
}

impl SerializeAs<Option<NaiveDate>> for OptionalCalendarDay {
    fn serialize_as<S>(source: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match source {
            Some(date) => serializer.collect_str(&date.format(DATE_FORMAT)),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_shift_month_carries_year() {
        assert_eq!(shift_month(2025, 1, 1), Some((2025, 2)));
        assert_eq!(shift_month(2025, 12, 1), Some((2026, 1)));
        assert_eq!(shift_month(2025, 11, 14), Some((2027, 1)));
        assert_eq!(shift_month(2025, 6, 0), Some((2025, 6)));
        assert_eq!(shift_month(i32::MAX, 12, 1), None);
    }

    #[test]
    fn test_rolled_date() {
        assert_eq!(rolled_date(2025, 2, 29), Some(date(2025, 3, 1)));
        assert_eq!(rolled_date(2025, 2, 31), Some(date(2025, 3, 3)));
        assert_eq!(rolled_date(2024, 2, 29), Some(date(2024, 2, 29)));
        assert_eq!(rolled_date(2025, 4, 31), Some(date(2025, 5, 1)));
        assert_eq!(rolled_date(2025, 4, 0), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-01-31").unwrap(), date(2025, 1, 31));
        assert_eq!(parse_date(" 2024-02-29 ").unwrap(), date(2024, 2, 29));
        assert_eq!(parse_date("2025-01-31T23:30").unwrap(), date(2025, 1, 31));
        assert_eq!(parse_date("2025-01-31T23:30:00+09:00").unwrap(), date(2025, 1, 31));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(matches!(parse_date(""), Err(CoreError::InvalidDate(_))));
        assert!(matches!(parse_date("2025-02-30"), Err(CoreError::InvalidDate(_))));
        assert!(matches!(parse_date("next friday"), Err(CoreError::InvalidDate(_))));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2025, 3, 5)), "2025-03-05");
    }
}

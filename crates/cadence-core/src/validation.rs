use chrono::NaiveDate;
use thiserror::Error;

use crate::calendar::parse_date;

/// Why a repeat end date was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndDateError {
    #[error("end date must be after start date")]
    NotAfterStart,

    #[error("end date must be on or before {max}")]
    AfterMaximum { max: NaiveDate },

    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Pre-flight check of a repeat end date, run before generation.
///
/// An absent end date means "unlimited" and is accepted. Otherwise the end date
/// must fall strictly after `start` and on or before `max_allowed`.
pub fn validate_end_date(
    start: NaiveDate,
    end: Option<NaiveDate>,
    max_allowed: NaiveDate,
) -> Result<(), EndDateError> {
    let Some(end) = end else {
        return Ok(());
    };

    if end <= start {
        return Err(EndDateError::NotAfterStart);
    }
    if end > max_allowed {
        return Err(EndDateError::AfterMaximum { max: max_allowed });
    }

    Ok(())
}

/// String form of [`validate_end_date`] for form input.
///
/// A blank `end` is "unlimited". Unparseable dates are reported as
/// [`EndDateError::InvalidDate`].
pub fn validate_end_date_str(start: &str, end: &str, max_allowed: &str) -> Result<(), EndDateError> {
    if end.trim().is_empty() {
        return Ok(());
    }

    let parse = |value: &str| parse_date(value).map_err(|e| EndDateError::InvalidDate(e.to_string()));
    validate_end_date(parse(start)?, Some(parse(end)?), parse(max_allowed)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_after_start_is_valid() {
        assert_eq!(validate_end_date_str("2025-11-01", "2025-12-31", "2025-12-31"), Ok(()));
    }

    #[test]
    fn test_blank_end_is_unlimited() {
        assert_eq!(validate_end_date_str("2025-11-01", "", "2025-12-31"), Ok(()));
        assert_eq!(validate_end_date_str("2025-11-01", "   ", "2025-12-31"), Ok(()));
    }

    #[test]
    fn test_end_before_or_equal_to_start() {
        assert_eq!(
            validate_end_date_str("2025-11-10", "2025-11-05", "2025-12-31"),
            Err(EndDateError::NotAfterStart)
        );
        assert_eq!(
            validate_end_date_str("2025-11-10", "2025-11-10", "2025-12-31"),
            Err(EndDateError::NotAfterStart)
        );
    }

    #[test]
    fn test_end_past_maximum() {
        let err = validate_end_date_str("2025-11-01", "2026-01-01", "2025-12-31").unwrap_err();
        assert_eq!(err.to_string(), "end date must be on or before 2025-12-31");
    }

    #[test]
    fn test_messages() {
        assert_eq!(EndDateError::NotAfterStart.to_string(), "end date must be after start date");
    }

    #[test]
    fn test_unparseable_dates() {
        assert!(matches!(
            validate_end_date_str("2025-11-01", "someday", "2025-12-31"),
            Err(EndDateError::InvalidDate(_))
        ));
        assert!(matches!(
            validate_end_date_str("not-a-date", "2025-12-01", "2025-12-31"),
            Err(EndDateError::InvalidDate(_))
        ));
    }
}

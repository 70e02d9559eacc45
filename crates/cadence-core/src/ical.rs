//! RFC 5545 export of repeat rules.
//!
//! RFC 5545 drops recurrence instances that fall on nonexistent dates (the
//! 31st of a short month, Feb 29 of a common year) instead of clamping them,
//! which is the same policy the generator follows. An exported rule therefore
//! expands to the same dates in any conforming calendar client.

use chrono::NaiveDate;

use crate::models::{RepeatRule, RepeatType};

const ICAL_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

fn frequency(kind: RepeatType) -> Option<&'static str> {
    match kind {
        RepeatType::None => None,
        RepeatType::Daily => Some("DAILY"),
        RepeatType::Weekly => Some("WEEKLY"),
        RepeatType::Monthly => Some("MONTHLY"),
        RepeatType::Yearly => Some("YEARLY"),
    }
}

/// Renders the `RRULE` value for a rule, or `None` for a non-repeating rule.
pub fn to_rrule(rule: &RepeatRule) -> Option<String> {
    let freq = frequency(rule.kind)?;
    let mut rrule = format!("FREQ={};INTERVAL={}", freq, rule.effective_interval());

    if let Some(end) = rule.end_date {
        let until = end.and_hms_opt(0, 0, 0)?;
        rrule.push_str(";UNTIL=");
        rrule.push_str(&until.format(ICAL_DATETIME_FORMAT).to_string());
    }

    Some(rrule)
}

/// Renders a `DTSTART` + `RRULE` block anchored at midnight UTC of `dtstart`.
pub fn to_rrule_block(dtstart: NaiveDate, rule: &RepeatRule) -> Option<String> {
    let rrule = to_rrule(rule)?;
    let start = dtstart.and_hms_opt(0, 0, 0)?;
    Some(format!(
        "DTSTART:{}\nRRULE:{}",
        start.format(ICAL_DATETIME_FORMAT),
        rrule
    ))
}

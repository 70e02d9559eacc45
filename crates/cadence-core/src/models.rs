use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::serde_as;
use std::str::FromStr;
use thiserror::Error;

use crate::calendar::{CalendarDay, OptionalCalendarDay};

/// Unit by which a repeating event advances.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RepeatType {
    pub const ALL: [RepeatType; 5] = [
        RepeatType::None,
        RepeatType::Daily,
        RepeatType::Weekly,
        RepeatType::Monthly,
        RepeatType::Yearly,
    ];

    /// Returns true for every type except [`RepeatType::None`].
    #[inline]
    pub fn is_repeating(self) -> bool {
        self != RepeatType::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RepeatType::None => "none",
            RepeatType::Daily => "daily",
            RepeatType::Weekly => "weekly",
            RepeatType::Monthly => "monthly",
            RepeatType::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for RepeatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid repeat type: {0}")]
pub struct ParseRepeatTypeError(String);

impl FromStr for RepeatType {
    type Err = ParseRepeatTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(RepeatType::None),
            "daily" => Ok(RepeatType::Daily),
            "weekly" => Ok(RepeatType::Weekly),
            "monthly" => Ok(RepeatType::Monthly),
            "yearly" => Ok(RepeatType::Yearly),
            _ => Err(ParseRepeatTypeError(s.to_string())),
        }
    }
}

/// The (type, interval, optional end date) triple governing recurrence.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RepeatRule {
    #[serde(rename = "type")]
    pub kind: RepeatType,
    /// Raw interval as supplied; see [`RepeatRule::effective_interval`].
    #[serde(default = "default_interval")]
    pub interval: i32,
    /// Inclusive end of the series. An empty string on the wire means "unlimited".
    #[serde_as(as = "OptionalCalendarDay")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

fn default_interval() -> i32 {
    1
}

impl Default for RepeatRule {
    fn default() -> Self {
        Self {
            kind: RepeatType::None,
            interval: 1,
            end_date: None,
        }
    }
}

impl RepeatRule {
    pub fn new(kind: RepeatType, interval: i32, end_date: Option<NaiveDate>) -> Self {
        Self {
            kind,
            interval,
            end_date,
        }
    }

    /// Interval used by the calculator: anything below 1 counts as 1.
    #[inline]
    pub fn effective_interval(&self) -> u32 {
        effective_interval(self.interval)
    }
}

/// Coerces a caller-supplied interval to the `>= 1` value the algorithm uses.
#[inline]
pub fn effective_interval(interval: i32) -> u32 {
    u32::try_from(interval).ok().filter(|&i| i > 0).unwrap_or(1)
}

/// An anchor event, or one generated occurrence of it.
///
/// Occurrences share every field with the anchor except `date`. Fields the
/// caller sent that this struct does not model are kept in `extra` and copied
/// through unchanged.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub title: String,
    #[serde_as(as = "CalendarDay")]
    pub date: NaiveDate,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: RepeatRule,
    /// Minutes before start at which to notify
    #[serde(default)]
    pub notification_time: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    /// Structural copy of this event placed on `date`.
    pub fn with_date(&self, date: NaiveDate) -> Self {
        Self {
            date,
            ..self.clone()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, crate::error::CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

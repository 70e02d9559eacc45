use anyhow::Result;
use chrono::{NaiveDate, Utc};
use chrono_english::{parse_date_string, Dialect};

use cadence_core::calendar::parse_date;

/// Parses a command-line date: `YYYY-MM-DD` first, then natural phrases ("next friday").
pub fn parse_cli_date(date_str: &str) -> Result<NaiveDate> {
    if let Ok(date) = parse_date(date_str) {
        return Ok(date);
    }
    parse_date_string(date_str, Utc::now(), Dialect::Us)
        .map(|datetime| datetime.date_naive())
        .map_err(|e| anyhow::anyhow!("Failed to parse date '{}': {}", date_str, e))
}

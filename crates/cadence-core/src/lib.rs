//! # Cadence Core Library
//!
//! Expands a single repeating event into the ordered list of calendar days on
//! which it occurs.
//!
//! ## Features
//!
//! - **Calendar-Correct Recurrence**: daily, weekly, monthly and yearly rules
//!   with an arbitrary interval and an optional inclusive end date
//! - **No Clamping**: a monthly event on the 31st skips months without a 31st,
//!   and a Feb 29 yearly event only lands in leap years
//! - **Drift-Free**: every monthly/yearly occurrence is derived from the
//!   original anchor day, never from the previous occurrence
//! - **Bounded**: generation is capped (100 occurrences by default)
//! - **Pure**: no I/O and no shared state; every call is independent
//!
//! ## Core Modules
//!
//! - [`models`]: Repeat types, rules and event records
//! - [`calendar`]: Date parsing and calendar arithmetic helpers
//! - [`recurrence`]: Occurrence calculation, validity filtering and generation
//! - [`validation`]: Pre-flight check of a rule's end date
//! - [`display`]: Human-readable repeat labels
//! - [`ical`]: RFC 5545 `RRULE` export
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cadence_core::models::{Event, RepeatRule, RepeatType};
//! use cadence_core::recurrence::generate;
//! use chrono::NaiveDate;
//!
//! let anchor = Event {
//!     title: "Month-end close".to_string(),
//!     date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
//!     repeat: RepeatRule {
//!         kind: RepeatType::Monthly,
//!         interval: 1,
//!         end_date: NaiveDate::from_ymd_opt(2025, 12, 31),
//!     },
//!     ..Default::default()
//! };
//!
//! let occurrences = generate(&anchor, 100);
//! assert_eq!(occurrences.len(), 7);
//! assert_eq!(occurrences[1].date, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
//! ```

pub mod calendar;
pub mod display;
pub mod error;
pub mod ical;
pub mod models;
pub mod recurrence;
pub mod validation;

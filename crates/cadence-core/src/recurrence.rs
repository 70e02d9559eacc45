use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, instrument};

use crate::calendar::{days_in_month, is_leap_year, rolled_date, same_month_day, shift_month};
use crate::models::{Event, RepeatRule, RepeatType};

/// Default hard cap on generated occurrences, anchor included.
pub const MAX_REPEAT_COUNT: usize = 100;

/// Months tried by the monthly search before giving up.
///
/// This is a heuristic safety valve, not a proven bound: it is enough for every
/// anchor day in practice because the tried months cycle back to the anchor's
/// own month within 12 steps.
pub const MAX_MONTH_ATTEMPTS: u32 = 12;

/// Years tried when looking for the next leap year for a Feb 29 anchor.
///
/// Heuristic as well; some (cursor year, interval) pairs never reach a leap
/// year, in which case the rolled-over Mar 1 candidate is rejected by
/// [`is_valid_occurrence`].
pub const MAX_YEAR_ATTEMPTS: u32 = 100;

// ============================================================================
// Occurrence calculation
// ============================================================================

/// Computes the next candidate date after `current` for a repeat rule.
///
/// # Arguments
/// * `current` - The search cursor (last accepted or last rejected candidate)
/// * `anchor` - The first occurrence of the series
/// * `kind` - Repeat type
/// * `interval` - Step size; values below 1 are treated as 1
///
/// # Returns
/// * `Option<NaiveDate>` - The candidate, or `None` when no further date can be computed
///
/// # Behavior
/// - Daily/weekly: plain day arithmetic from `current`
/// - Monthly: step the month from `current`, then place the *anchor's* day of
///   month; months too short for that day are skipped (never clamped), up to
///   [`MAX_MONTH_ATTEMPTS`] attempts
/// - Yearly: step the year from `current` and use the anchor's month and day;
///   a Feb 29 anchor searches forward for a leap year, up to
///   [`MAX_YEAR_ATTEMPTS`] attempts
/// - None: always `None`
pub fn next_candidate(
    current: NaiveDate,
    anchor: NaiveDate,
    kind: RepeatType,
    interval: u32,
) -> Option<NaiveDate> {
    let interval = interval.max(1);

    match kind {
        RepeatType::None => None,
        RepeatType::Daily => current.checked_add_days(Days::new(u64::from(interval))),
        RepeatType::Weekly => current.checked_add_days(Days::new(u64::from(interval) * 7)),
        RepeatType::Monthly => next_monthly(current, anchor, interval),
        RepeatType::Yearly => next_yearly(current, anchor, interval),
    }
}

fn next_monthly(current: NaiveDate, anchor: NaiveDate, interval: u32) -> Option<NaiveDate> {
    let target_day = anchor.day();
    let (mut year, mut month) = shift_month(current.year(), current.month(), interval)?;

    for _ in 0..MAX_MONTH_ATTEMPTS {
        if target_day <= days_in_month(year, month) {
            return NaiveDate::from_ymd_opt(year, month, target_day);
        }
        (year, month) = shift_month(year, month, interval)?;
    }

    debug!(%current, %anchor, interval, "no month holds the anchor day within the search limit");
    None
}

fn next_yearly(current: NaiveDate, anchor: NaiveDate, interval: u32) -> Option<NaiveDate> {
    let step = i32::try_from(interval).ok()?;
    let mut year = current.year().checked_add(step)?;

    if anchor.month() == 2 && anchor.day() == 29 {
        let mut attempts = 0;
        while attempts < MAX_YEAR_ATTEMPTS && !is_leap_year(year) {
            year = year.checked_add(step)?;
            attempts += 1;
        }
    }

    rolled_date(year, anchor.month(), anchor.day())
}

// ============================================================================
// Validity filter
// ============================================================================

/// Decides whether a candidate is a calendar-valid occurrence of the anchor.
///
/// Daily, weekly and none candidates are always valid. A monthly candidate must
/// keep the anchor's day of month and a yearly one its month and day, which
/// rejects rolled-over substitutes such as "Feb 29" turning into Mar 1.
pub fn is_valid_occurrence(candidate: NaiveDate, anchor: NaiveDate, kind: RepeatType) -> bool {
    match kind {
        RepeatType::None | RepeatType::Daily | RepeatType::Weekly => true,
        RepeatType::Monthly => candidate.day() == anchor.day(),
        RepeatType::Yearly => same_month_day(candidate, anchor),
    }
}

// ============================================================================
// Sequence generation
// ============================================================================

/// Lazy, uncapped sequence of occurrence dates for one anchor and rule.
///
/// Yields the anchor first, then every accepted candidate in ascending order,
/// and stops at the end date or when the calendar search is exhausted. A
/// rejected candidate is never yielded but becomes the cursor for the next
/// search.
#[derive(Debug, Clone)]
pub struct Occurrences {
    anchor: NaiveDate,
    kind: RepeatType,
    interval: u32,
    end_date: Option<NaiveDate>,
    cursor: Option<NaiveDate>,
    finished: bool,
}

impl Occurrences {
    pub fn new(anchor: NaiveDate, rule: &RepeatRule) -> Self {
        Self {
            anchor,
            kind: rule.kind,
            interval: rule.effective_interval(),
            end_date: rule.end_date,
            cursor: None,
            finished: false,
        }
    }

    pub fn for_event(event: &Event) -> Self {
        Self::new(event.date, &event.repeat)
    }

    fn finish(&mut self) -> Option<NaiveDate> {
        self.finished = true;
        None
    }
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.finished {
            return None;
        }

        let Some(mut current) = self.cursor else {
            if matches!(self.end_date, Some(end) if end < self.anchor) {
                debug!(anchor = %self.anchor, "end date precedes anchor; nothing to generate");
                return self.finish();
            }
            self.cursor = Some(self.anchor);
            if !self.kind.is_repeating() {
                self.finished = true;
            }
            return Some(self.anchor);
        };

        loop {
            let Some(candidate) = next_candidate(current, self.anchor, self.kind, self.interval) else {
                debug!(%current, kind = %self.kind, "calendar search exhausted");
                return self.finish();
            };

            if matches!(self.end_date, Some(end) if candidate > end) {
                return self.finish();
            }

            self.cursor = Some(candidate);
            if is_valid_occurrence(candidate, self.anchor, self.kind) {
                return Some(candidate);
            }

            debug!(%candidate, anchor = %self.anchor, "skipping calendar-invalid candidate");
            current = candidate;
        }
    }
}

/// Expands an anchor event into its ordered occurrences.
///
/// # Arguments
/// * `anchor` - The user-entered first occurrence, with its repeat rule
/// * `max_count` - Hard cap on the number of returned occurrences
///
/// # Returns
/// * `Vec<Event>` - Copies of `anchor` with only `date` replaced, ascending
///
/// # Behavior
/// - A `none` rule returns the anchor alone, unchanged
/// - An end date before the anchor yields an empty list
/// - The anchor is always the first element and counts toward the cap
/// - Output is silently truncated at the cap; callers decide whether to warn
#[instrument(skip(anchor), fields(kind = %anchor.repeat.kind, date = %anchor.date))]
pub fn generate(anchor: &Event, max_count: usize) -> Vec<Event> {
    if !anchor.repeat.kind.is_repeating() {
        return vec![anchor.clone()];
    }

    let cap = max_count.max(1);
    let occurrences: Vec<Event> = Occurrences::for_event(anchor)
        .take(cap)
        .map(|date| anchor.with_date(date))
        .collect();

    if occurrences.len() == cap {
        debug!(cap, "occurrence cap reached");
    }

    occurrences
}

/// Result of a capped generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub occurrences: Vec<Event>,
    pub max_count: usize,
}

impl Generation {
    /// True when the output filled the cap, so later occurrences may be missing.
    #[inline]
    pub fn reached_cap(&self) -> bool {
        self.occurrences.len() >= self.max_count
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.occurrences.iter().map(|event| event.date).collect()
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}

/// RepeatSequenceGenerator: owns the cap policy for occurrence generation.
#[derive(Debug, Clone, Copy)]
pub struct RepeatSequenceGenerator {
    max_count: usize,
}

impl Default for RepeatSequenceGenerator {
    fn default() -> Self {
        Self {
            max_count: MAX_REPEAT_COUNT,
        }
    }
}

impl RepeatSequenceGenerator {
    /// The anchor is always emitted, so a cap below 1 is raised to 1.
    pub fn new(max_count: usize) -> Self {
        Self {
            max_count: max_count.max(1),
        }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn generate(&self, anchor: &Event) -> Generation {
        Generation {
            occurrences: generate(anchor, self.max_count),
            max_count: self.max_count,
        }
    }
}

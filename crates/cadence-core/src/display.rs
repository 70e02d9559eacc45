use chrono::NaiveDate;

use crate::calendar::format_date;
use crate::models::{effective_interval, RepeatRule, RepeatType};

/// Human-readable summary of a repeat rule, e.g. `"Repeats every 2 weeks until 2025-12-31"`.
///
/// `none` yields an empty string. Intervals below 1 are shown as 1.
pub fn repeat_label(kind: RepeatType, interval: i32, end_date: Option<NaiveDate>) -> String {
    let interval = effective_interval(interval);

    let mut label = match (kind, interval) {
        (RepeatType::None, _) => return String::new(),
        (_, 1) => format!("Repeats {}", kind),
        (_, n) => format!("Repeats every {} {}", n, unit_plural(kind)),
    };

    if let Some(end) = end_date {
        label.push_str(" until ");
        label.push_str(&format_date(end));
    }

    label
}

fn unit_plural(kind: RepeatType) -> &'static str {
    match kind {
        RepeatType::Daily => "days",
        RepeatType::Weekly => "weeks",
        RepeatType::Monthly => "months",
        RepeatType::Yearly => "years",
        RepeatType::None => "",
    }
}

impl std::fmt::Display for RepeatRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&repeat_label(self.kind, self.interval, self.end_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_interval_labels() {
        assert_eq!(repeat_label(RepeatType::Daily, 1, None), "Repeats daily");
        assert_eq!(repeat_label(RepeatType::Weekly, 1, None), "Repeats weekly");
        assert_eq!(repeat_label(RepeatType::Monthly, 1, None), "Repeats monthly");
        assert_eq!(repeat_label(RepeatType::Yearly, 1, None), "Repeats yearly");
    }

    #[test]
    fn test_custom_interval_labels() {
        assert_eq!(repeat_label(RepeatType::Daily, 3, None), "Repeats every 3 days");
        assert_eq!(repeat_label(RepeatType::Weekly, 2, None), "Repeats every 2 weeks");
        assert_eq!(repeat_label(RepeatType::Monthly, 3, None), "Repeats every 3 months");
        assert_eq!(repeat_label(RepeatType::Yearly, 2, None), "Repeats every 2 years");
    }

    #[test]
    fn test_none_is_empty() {
        assert_eq!(repeat_label(RepeatType::None, 1, None), "");
        assert_eq!(repeat_label(RepeatType::None, 4, NaiveDate::from_ymd_opt(2025, 1, 1)), "");
    }

    #[test]
    fn test_non_positive_interval() {
        assert_eq!(repeat_label(RepeatType::Daily, 0, None), "Repeats daily");
        assert_eq!(repeat_label(RepeatType::Monthly, -2, None), "Repeats monthly");
    }

    #[test]
    fn test_end_date_suffix() {
        let end = NaiveDate::from_ymd_opt(2025, 12, 31);
        assert_eq!(repeat_label(RepeatType::Weekly, 2, end), "Repeats every 2 weeks until 2025-12-31");
        assert_eq!(
            RepeatRule::new(RepeatType::Daily, 1, end).to_string(),
            "Repeats daily until 2025-12-31"
        );
    }
}

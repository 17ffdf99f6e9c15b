//! Human-readable rule summaries.

use chrono::NaiveDate;

use super::{DaySet, Frequency, ParsedRecurrenceRule, weekday_name};

/// Formats a date as "June 15, 2025".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Builds a one-sentence description of a rule between two dates.
///
/// `end_date` of `None` means the series never ends.
///
/// ```
/// use chrono::NaiveDate;
/// use eventplan_core::recurrence::{build_summary, parse};
///
/// let rule = parse("MONTHLY:1:SUN").unwrap();
/// let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 12, 31);
/// assert_eq!(
///     build_summary(&rule, start, end),
///     "Every first Sunday of the month from June 1, 2025 until December 31, 2025"
/// );
/// ```
pub fn build_summary(
    rule: &ParsedRecurrenceRule,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
) -> String {
    let from = format_date(start_date);
    let until = match end_date {
        Some(end) => format!("until {}", format_date(end)),
        None => "forever".to_string(),
    };

    match rule.frequency {
        Frequency::Daily => format!("Every day from {from} {until}"),
        Frequency::Weekly => {
            let days = join_days(rule.days_of_week);
            format!("Every {days} from {from} {until}")
        }
        Frequency::Monthly { ordinal } => {
            let days = join_days(rule.days_of_week);
            format!(
                "Every {} {days} of the month from {from} {until}",
                ordinal.word()
            )
        }
    }
}

impl ParsedRecurrenceRule {
    /// Shorthand for [`build_summary`].
    pub fn summary(&self, start_date: NaiveDate, end_date: Option<NaiveDate>) -> String {
        build_summary(self, start_date, end_date)
    }
}

fn join_days(days: DaySet) -> String {
    days.iter()
        .map(weekday_name)
        .collect::<Vec<_>>()
        .join(" and ")
}

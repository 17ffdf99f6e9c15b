//! Recurring event schedules.
//!
//! This module provides [`DateRange`] for inclusive calendar windows and
//! [`RecurringEvent`], which ties a recurrence rule to the dates an event
//! series runs between and the individual days that were skipped.

use std::collections::{BTreeSet, HashSet};

use chrono::{Days, NaiveDate};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::recurrence::{self, ParsedRecurrenceRule, RecurrenceError};

/// Result type for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors that can occur when building a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The rule text was rejected.
    #[error("invalid recurrence rule: {0}")]
    Rule(#[from] RecurrenceError),

    /// The end date falls before the start date.
    #[error("invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// An inclusive range of calendar dates, `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> ScheduleResult<Self> {
        if start > end {
            return Err(ScheduleError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering one day.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// A range of `days` days beginning at `start`.
    ///
    /// Returns `None` for zero days or a range past the last representable
    /// date.
    pub fn from_len(start: NaiveDate, days: u32) -> Option<Self> {
        let extra = days.checked_sub(1)?;
        let end = start.checked_add_days(Days::new(u64::from(extra)))?;
        Some(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, both ends included.
    pub fn len_days(&self) -> u64 {
        (self.end - self.start).num_days().unsigned_abs() + 1
    }

    /// Checks if a date falls within this range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The overlap of two ranges, if any.
    pub fn intersect(&self, other: &DateRange) -> Option<DateRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(Self { start, end })
    }

    /// Iterates every date in the range, ascending.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// A repeating event: a rule, the dates it runs between and skipped days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecurringEvent {
    title: String,
    rule: ParsedRecurrenceRule,
    start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    skip_dates: BTreeSet<NaiveDate>,
}

impl RecurringEvent {
    /// Creates an event from rule text.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Rule`] if the rule text does not parse, and
    /// [`ScheduleError::InvalidRange`] if `end_date` precedes `start_date`.
    pub fn new(
        title: impl Into<String>,
        rule_text: &str,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> ScheduleResult<Self> {
        let rule = recurrence::parse(rule_text)?;
        Self::from_rule(title, rule, start_date, end_date)
    }

    /// Creates an event from an already parsed rule.
    pub fn from_rule(
        title: impl Into<String>,
        rule: ParsedRecurrenceRule,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> ScheduleResult<Self> {
        if let Some(end) = end_date {
            DateRange::new(start_date, end)?;
        }
        Ok(Self {
            title: title.into(),
            rule,
            start_date,
            end_date,
            skip_dates: BTreeSet::new(),
        })
    }

    /// Adds skipped days.
    pub fn with_skip_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.skip_dates.extend(dates);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rule(&self) -> &ParsedRecurrenceRule {
        &self.rule
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of the series, `None` if it never ends.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Skipped days, ascending.
    pub fn skip_dates(&self) -> &BTreeSet<NaiveDate> {
        &self.skip_dates
    }

    /// The dates the series runs between, `None` for an endless series.
    pub fn bounds(&self) -> Option<DateRange> {
        self.end_date.map(|end| DateRange {
            start: self.start_date,
            end,
        })
    }

    /// Cancels the occurrence on `date`.
    ///
    /// Returns `true` if the event was due to happen that day.
    pub fn skip(&mut self, date: NaiveDate) -> bool {
        let was_occurrence = self.occurs_on(date);
        self.skip_dates.insert(date);
        debug!(title = %self.title, %date, was_occurrence, "Skipped event day");
        was_occurrence
    }

    /// Restores a skipped day, returning `false` if it was not skipped.
    pub fn unskip(&mut self, date: NaiveDate) -> bool {
        self.skip_dates.remove(&date)
    }

    /// Checks if the event happens on `date`.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.span().contains(date) && !self.skip_dates.contains(&date) && self.rule.occurs_on(date)
    }

    /// Lists the occurrences inside `window`, ascending.
    ///
    /// The window is clamped to the event's own dates first.
    pub fn occurrences_in(&self, window: DateRange) -> Vec<NaiveDate> {
        let Some(range) = self.span().intersect(&window) else {
            return Vec::new();
        };
        let skips: HashSet<NaiveDate> = self
            .skip_dates
            .range(range.start..=range.end)
            .copied()
            .collect();
        self.rule.expand(range.start, range.end, &skips)
    }

    /// Finds the first occurrence on or after `from`, looking at most
    /// `horizon_days` days ahead.
    pub fn next_occurrence(&self, from: NaiveDate, horizon_days: u32) -> Option<NaiveDate> {
        let window = DateRange::from_len(from, horizon_days)?;
        let range = self.span().intersect(&window)?;
        range.days().find(|d| self.occurs_on(*d))
    }

    /// Describes the series, see [`recurrence::build_summary`].
    pub fn summary(&self) -> String {
        recurrence::build_summary(&self.rule, self.start_date, self.end_date)
    }

    fn span(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date.unwrap_or(NaiveDate::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange::new(start, end).unwrap()
    }

    mod date_range {
        use super::*;

        #[test]
        fn creation() {
            let r = range(date(2025, 6, 1), date(2025, 6, 30));
            assert_eq!(r.start(), date(2025, 6, 1));
            assert_eq!(r.end(), date(2025, 6, 30));
            assert_eq!(r.len_days(), 30);
        }

        #[test]
        fn reversed_is_rejected() {
            let err = DateRange::new(date(2025, 6, 2), date(2025, 6, 1)).unwrap_err();
            assert_eq!(
                err,
                ScheduleError::InvalidRange {
                    start: date(2025, 6, 2),
                    end: date(2025, 6, 1)
                }
            );
            assert_eq!(
                err.to_string(),
                "invalid date range: 2025-06-02 is after 2025-06-01"
            );
        }

        #[test]
        fn contains_is_inclusive() {
            let r = range(date(2025, 6, 1), date(2025, 6, 3));
            assert!(r.contains(date(2025, 6, 1)));
            assert!(r.contains(date(2025, 6, 3)));
            assert!(!r.contains(date(2025, 5, 31)));
            assert!(!r.contains(date(2025, 6, 4)));
        }

        #[test]
        fn from_len() {
            let r = DateRange::from_len(date(2025, 12, 30), 3).unwrap();
            assert_eq!(r.end(), date(2026, 1, 1));
            assert_eq!(DateRange::from_len(date(2025, 1, 1), 1), Some(DateRange::single(date(2025, 1, 1))));
            assert_eq!(DateRange::from_len(date(2025, 1, 1), 0), None);
        }

        #[test]
        fn intersect() {
            let a = range(date(2025, 6, 1), date(2025, 6, 10));
            let b = range(date(2025, 6, 5), date(2025, 6, 20));
            assert_eq!(a.intersect(&b), Some(range(date(2025, 6, 5), date(2025, 6, 10))));

            let c = range(date(2025, 6, 11), date(2025, 6, 12));
            assert_eq!(a.intersect(&c), None);

            // Touching ranges share one day
            let d = range(date(2025, 6, 10), date(2025, 6, 12));
            assert_eq!(a.intersect(&d), Some(DateRange::single(date(2025, 6, 10))));
        }

        #[test]
        fn days() {
            let r = range(date(2024, 2, 28), date(2024, 3, 1));
            let days: Vec<_> = r.days().collect();
            assert_eq!(days, vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]);
        }
    }

    mod recurring_event {
        use super::*;

        fn standup() -> RecurringEvent {
            RecurringEvent::new(
                "Standup",
                "WEEKLY:MON,WED,FRI",
                date(2025, 6, 2),
                Some(date(2025, 6, 30)),
            )
            .unwrap()
        }

        #[test]
        fn rule_errors_are_wrapped() {
            let err = RecurringEvent::new("x", "WEEKLY:FOO", date(2025, 1, 1), None).unwrap_err();
            assert!(matches!(
                err,
                ScheduleError::Rule(RecurrenceError::WeeklyInvalidDay { .. })
            ));
        }

        #[test]
        fn end_before_start_rejected() {
            let err = RecurringEvent::new("x", "DAILY:", date(2025, 1, 2), Some(date(2025, 1, 1)))
                .unwrap_err();
            assert!(matches!(err, ScheduleError::InvalidRange { .. }));
        }

        #[test]
        fn occurrences_clamped_to_bounds() {
            let event = standup();
            let window = range(date(2025, 5, 1), date(2025, 7, 31));
            let dates = event.occurrences_in(window);

            assert_eq!(dates.first(), Some(&date(2025, 6, 2)));
            assert_eq!(dates.last(), Some(&date(2025, 6, 30)));
            assert_eq!(dates.len(), 13);
            assert!(dates.iter().all(|d| event.bounds().unwrap().contains(*d)));
        }

        #[test]
        fn window_outside_bounds_is_empty() {
            let event = standup();
            assert!(event.occurrences_in(range(date(2025, 7, 1), date(2025, 7, 31))).is_empty());
            assert!(event.occurrences_in(range(date(2025, 1, 1), date(2025, 6, 1))).is_empty());
        }

        #[test]
        fn skip_and_unskip() {
            let mut event = standup();
            assert!(event.skip(date(2025, 6, 4)));
            assert!(!event.skip(date(2025, 6, 5)), "Thursday is not an occurrence");

            let june = range(date(2025, 6, 1), date(2025, 6, 30));
            let dates = event.occurrences_in(june);
            assert!(!dates.contains(&date(2025, 6, 4)));
            assert_eq!(dates.len(), 12);
            assert!(!event.occurs_on(date(2025, 6, 4)));

            assert!(event.unskip(date(2025, 6, 4)));
            assert!(!event.unskip(date(2025, 6, 4)));
            assert!(event.occurs_on(date(2025, 6, 4)));
        }

        #[test]
        fn next_occurrence() {
            let event = standup().with_skip_dates([date(2025, 6, 6)]);
            assert_eq!(event.next_occurrence(date(2025, 1, 1), 365), Some(date(2025, 6, 2)));
            assert_eq!(event.next_occurrence(date(2025, 6, 5), 30), Some(date(2025, 6, 9)));
            assert_eq!(event.next_occurrence(date(2025, 7, 1), 365), None);
            assert_eq!(event.next_occurrence(date(2025, 6, 3), 1), None);
            assert_eq!(event.next_occurrence(date(2025, 6, 3), 0), None);
        }

        #[test]
        fn next_occurrence_matches_first_expanded() {
            let event = RecurringEvent::new("Board", "MONTHLY:2:TUE", date(2025, 1, 1), None)
                .unwrap()
                .with_skip_dates([date(2025, 3, 11)]);
            let from = date(2025, 3, 1);
            let window = DateRange::from_len(from, 90).unwrap();
            assert_eq!(
                event.next_occurrence(from, 90),
                event.occurrences_in(window).first().copied()
            );
            assert_eq!(event.next_occurrence(from, 90), Some(date(2025, 4, 8)));
        }

        #[test]
        fn forever_event() {
            let event = RecurringEvent::new("Yoga", "DAILY:", date(2025, 6, 15), None).unwrap();
            assert_eq!(event.bounds(), None);
            assert!(event.occurs_on(date(2099, 1, 1)));
            assert!(!event.occurs_on(date(2025, 6, 14)));
            assert_eq!(event.summary(), "Every day from June 15, 2025 forever");
        }

        #[test]
        fn summary_uses_event_dates() {
            assert_eq!(
                standup().summary(),
                "Every Monday and Wednesday and Friday from June 2, 2025 until June 30, 2025"
            );
        }

        #[test]
        fn serializes_rule_as_text() {
            let event = standup().with_skip_dates([date(2025, 6, 13)]);
            let json = serde_json::to_value(&event).unwrap();
            assert_eq!(json["title"], "Standup");
            assert_eq!(json["rule"], "WEEKLY:MONDAY,WEDNESDAY,FRIDAY");
            assert_eq!(json["end_date"], "2025-06-30");
            assert_eq!(json["skip_dates"][0], "2025-06-13");

            let forever = RecurringEvent::new("Yoga", "DAILY:", date(2025, 6, 15), None).unwrap();
            let json = serde_json::to_value(&forever).unwrap();
            assert!(json.get("end_date").is_none());
            assert!(json.get("skip_dates").is_none());
        }
    }
}

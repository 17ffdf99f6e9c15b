//! Occurrence expansion and single-date tests.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use super::{Frequency, Ordinal, ParsedRecurrenceRule};

impl ParsedRecurrenceRule {
    /// Returns `true` if the rule fires on `date`.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match self.frequency {
            Frequency::Daily => true,
            Frequency::Weekly => self.days_of_week.contains(date.weekday()),
            Frequency::Monthly { ordinal } => {
                self.days_of_week.contains(date.weekday()) && is_nth_weekday(date, ordinal)
            }
        }
    }

    /// Lists every date in `[start, end]` the rule fires on, ascending.
    ///
    /// Dates in `skip_dates` are dropped before the pattern is tested. A
    /// reversed range yields nothing.
    pub fn expand(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        skip_dates: &HashSet<NaiveDate>,
    ) -> Vec<NaiveDate> {
        let dates: Vec<NaiveDate> = start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter(|d| !skip_dates.contains(d))
            .filter(|d| self.occurs_on(*d))
            .collect();

        trace!(
            rule = %self,
            %start,
            %end,
            skipped = skip_dates.len(),
            occurrences = dates.len(),
            "Expanded recurrence rule"
        );
        dates
    }
}

/// Expands an optional rule over `[start, end]`.
///
/// A missing rule has no occurrences; this never fails.
pub fn expand(
    rule: Option<&ParsedRecurrenceRule>,
    start: NaiveDate,
    end: NaiveDate,
    skip_dates: &HashSet<NaiveDate>,
) -> Vec<NaiveDate> {
    rule.map(|r| r.expand(start, end, skip_dates))
        .unwrap_or_default()
}

/// Tests an optional rule against one date. A missing rule never fires.
pub fn occurs_on(rule: Option<&ParsedRecurrenceRule>, date: NaiveDate) -> bool {
    rule.is_some_and(|r| r.occurs_on(date))
}

/// `date` is the nth of its weekday in its month, counting from the 1st.
fn is_nth_weekday(date: NaiveDate, ordinal: Ordinal) -> bool {
    date.day0() / 7 + 1 == ordinal.number()
}

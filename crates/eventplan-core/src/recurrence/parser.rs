//! Rule text parsing.

use chrono::Weekday;
use tracing::debug;

use super::error::{RecurrenceError, RecurrenceResult};
use super::{DaySet, Frequency, Ordinal, ParsedRecurrenceRule};

/// Parses rule text into a [`ParsedRecurrenceRule`].
///
/// The text is split on `:` keeping empty segments, so `DAILY:` has two
/// segments and `DAILY` only one.
///
/// # Errors
///
/// - [`RecurrenceError::UnsupportedRecurrenceCombination`] for fewer than two
///   segments or an unknown frequency keyword
/// - [`RecurrenceError::WeeklyMissingDays`] for an empty day list
/// - [`RecurrenceError::WeeklyInvalidDay`] for a token that is not a weekday,
///   in weekly and monthly rules alike
/// - [`RecurrenceError::MonthlyMissingOrdinalOrDay`] for a monthly rule with
///   fewer than three segments
/// - [`RecurrenceError::MonthlyInvalidOrdinal`] for an ordinal that is not an
///   integer in 1..=4
pub fn parse(rule_text: &str) -> RecurrenceResult<ParsedRecurrenceRule> {
    parse_segments(rule_text).inspect_err(|e| {
        debug!(rule = rule_text, code = %e.code(), "Rejected recurrence rule");
    })
}

fn parse_segments(rule_text: &str) -> RecurrenceResult<ParsedRecurrenceRule> {
    let segments: Vec<&str> = rule_text.split(':').collect();
    if segments.len() < 2 {
        return Err(RecurrenceError::unsupported(rule_text));
    }

    let keyword = segments[0].trim();
    let (frequency, days_of_week) = if keyword.eq_ignore_ascii_case("DAILY") {
        (Frequency::Daily, DaySet::all())
    } else if keyword.eq_ignore_ascii_case("WEEKLY") {
        (Frequency::Weekly, parse_day_list(segments[1], rule_text)?)
    } else if keyword.eq_ignore_ascii_case("MONTHLY") {
        if segments.len() < 3 {
            return Err(RecurrenceError::missing_ordinal_or_day(rule_text));
        }
        let ordinal = parse_ordinal(segments[1])?;
        let days = parse_day_list(segments[2], rule_text)?;
        (Frequency::Monthly { ordinal }, days)
    } else {
        return Err(RecurrenceError::unsupported(rule_text));
    };

    Ok(ParsedRecurrenceRule {
        frequency,
        days_of_week,
    })
}

fn parse_ordinal(segment: &str) -> RecurrenceResult<Ordinal> {
    segment
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(Ordinal::from_number)
        .ok_or_else(|| RecurrenceError::invalid_ordinal(segment))
}

/// Parses a comma-separated weekday list.
///
/// Shared by weekly and monthly rules, so both report the weekly error kinds.
fn parse_day_list(segment: &str, rule_text: &str) -> RecurrenceResult<DaySet> {
    if segment.trim().is_empty() {
        return Err(RecurrenceError::missing_days(rule_text));
    }

    segment
        .split(',')
        .map(|token| parse_weekday(token).ok_or_else(|| RecurrenceError::invalid_day(token)))
        .collect()
}

/// Accepts full names and three-letter abbreviations, any case.
fn parse_weekday(token: &str) -> Option<Weekday> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    token.parse::<Weekday>().ok()
}

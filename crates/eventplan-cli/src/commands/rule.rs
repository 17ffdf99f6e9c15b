//! Rule commands: parse, expand, occurs, summary.
//!
//! Each command returns the text to print so `main` decides where it goes.

use std::collections::HashSet;

use chrono::NaiveDate;
use eventplan_core::recurrence::weekday_name;
use eventplan_core::{DateRange, ParsedRecurrenceRule, parse};
use serde::Serialize;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::config::ExpansionSettings;
use crate::error::{CliError, CliResult};

#[derive(Debug, Serialize)]
struct RuleReport<'a> {
    rule: &'a ParsedRecurrenceRule,
    frequency: &'static str,
    days: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ordinal: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ExpandReport<'a> {
    rule: &'a ParsedRecurrenceRule,
    from: NaiveDate,
    to: NaiveDate,
    occurrences: &'a [NaiveDate],
}

#[derive(Debug, Serialize)]
struct OccursReport<'a> {
    rule: &'a ParsedRecurrenceRule,
    date: NaiveDate,
    occurs: bool,
}

#[derive(Debug, Serialize)]
struct SummaryReport<'a> {
    rule: &'a ParsedRecurrenceRule,
    summary: &'a str,
}

/// Parses a rule and describes its structure.
pub fn parse_rule(rule_text: &str, format: OutputFormat) -> CliResult<String> {
    let rule = parse(rule_text)?;
    let report = RuleReport {
        rule: &rule,
        frequency: rule.frequency().keyword(),
        days: rule.days_of_week().iter().map(weekday_name).collect(),
        ordinal: rule.ordinal().map(|o| o.number()),
    };

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            let mut lines = vec![
                format!("rule:      {}", report.rule),
                format!("frequency: {}", report.frequency),
            ];
            if let Some(ordinal) = report.ordinal {
                lines.push(format!("ordinal:   {ordinal}"));
            }
            lines.push(format!("days:      {}", report.days.join(", ")));
            Ok(lines.join("\n"))
        }
    }
}

/// Lists the occurrences of a rule inside `[from, to]`.
///
/// Without `to` the window is `default_window_days` long. Windows longer
/// than `max_window_days` are refused.
pub fn expand(
    rule_text: &str,
    from: NaiveDate,
    to: Option<NaiveDate>,
    skip: &[NaiveDate],
    settings: &ExpansionSettings,
    format: OutputFormat,
) -> CliResult<String> {
    let rule = parse(rule_text)?;
    let window = match to {
        Some(to) => DateRange::new(from, to)?,
        None => DateRange::from_len(from, settings.default_window_days).ok_or_else(|| {
            CliError::window(format!(
                "cannot build a {} day window from {from}",
                settings.default_window_days
            ))
        })?,
    };

    let days = window.len_days();
    if days > u64::from(settings.max_window_days) {
        return Err(CliError::WindowTooLarge {
            days,
            max: settings.max_window_days,
        });
    }

    let skips: HashSet<NaiveDate> = skip.iter().copied().collect();
    let occurrences = rule.expand(window.start(), window.end(), &skips);
    debug!(
        rule = %rule,
        days,
        count = occurrences.len(),
        "Expanded rule"
    );

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ExpandReport {
            rule: &rule,
            from: window.start(),
            to: window.end(),
            occurrences: &occurrences,
        })?),
        OutputFormat::Text => Ok(occurrences
            .iter()
            .map(NaiveDate::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Checks a single date.
pub fn occurs(rule_text: &str, date: NaiveDate, format: OutputFormat) -> CliResult<String> {
    let rule = parse(rule_text)?;
    let occurs = rule.occurs_on(date);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&OccursReport {
            rule: &rule,
            date,
            occurs,
        })?),
        OutputFormat::Text => Ok(if occurs { "yes" } else { "no" }.to_string()),
    }
}

/// Describes a rule between two dates.
pub fn summary(
    rule_text: &str,
    start: NaiveDate,
    end: Option<NaiveDate>,
    format: OutputFormat,
) -> CliResult<String> {
    let rule = parse(rule_text)?;
    if let Some(end) = end {
        DateRange::new(start, end)?;
    }
    let summary = rule.summary(start, end);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&SummaryReport {
            rule: &rule,
            summary: &summary,
        })?),
        OutputFormat::Text => Ok(summary),
    }
}

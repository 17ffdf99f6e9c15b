//! Golden tests for rule summaries, expansions and serialized forms.
//!
//! These use insta inline snapshots so that any wording change to the
//! user-facing text shows up as a reviewable diff.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::recurrence::{ParsedRecurrenceRule, build_summary, parse};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// One date per line, ISO format.
fn render(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn summary_weekly_forever() {
    let rule = parse("WEEKLY:MON,FRI").unwrap();
    insta::assert_snapshot!(
        build_summary(&rule, date(2025, 6, 2), None),
        @"Every Monday and Friday from June 2, 2025 forever"
    );
}

#[test]
fn summary_daily_until() {
    let rule = parse("DAILY:").unwrap();
    insta::assert_snapshot!(
        build_summary(&rule, date(2025, 1, 1), Some(date(2025, 12, 31))),
        @"Every day from January 1, 2025 until December 31, 2025"
    );
}

#[test]
fn summary_monthly_two_days() {
    let rule = parse("monthly:4:saturday,thursday").unwrap();
    insta::assert_snapshot!(
        build_summary(&rule, date(2025, 11, 27), None),
        @"Every fourth Thursday and Saturday of the month from November 27, 2025 forever"
    );
}

#[test]
fn expand_first_sunday_rest_of_2025() {
    let rule = parse("MONTHLY:1:SUN").unwrap();
    let dates = rule.expand(date(2025, 6, 1), date(2025, 12, 31), &HashSet::new());
    insta::assert_snapshot!(render(&dates), @r"
    2025-06-01
    2025-07-06
    2025-08-03
    2025-09-07
    2025-10-05
    2025-11-02
    2025-12-07
    ");
}

#[test]
fn expand_weekly_with_skips() {
    let rule = parse("WEEKLY:TUE,THU").unwrap();
    let skips: HashSet<_> = [date(2025, 6, 5), date(2025, 6, 17)].into_iter().collect();
    let dates = rule.expand(date(2025, 6, 1), date(2025, 6, 21), &skips);
    insta::assert_snapshot!(render(&dates), @r"
    2025-06-03
    2025-06-10
    2025-06-12
    2025-06-19
    ");
}

#[test]
fn json_rule_is_canonical_text() {
    let rule: ParsedRecurrenceRule = "monthly:2:tue".parse().unwrap();
    insta::assert_json_snapshot!(rule, @r#""MONTHLY:2:TUESDAY""#);
}

#[test]
fn error_messages() {
    let messages: Vec<String> = [
        "WEEKLY:",
        "WEEKLY:FOO",
        "MONTHLY:5:MON",
        "MONTHLY:2",
        "BOGUS:x",
    ]
    .into_iter()
    .map(|text| {
        let err = parse(text).unwrap_err();
        format!("{}: {}", err.code(), err)
    })
    .collect();

    insta::assert_snapshot!(messages.join("\n"), @r#"
    WEEKLY_MISSING_DAYS: recurrence rule has no days: "WEEKLY:"
    WEEKLY_INVALID_DAY: invalid day of week "FOO"
    MONTHLY_INVALID_ORDINAL: invalid monthly ordinal "5" (expected 1 to 4)
    MONTHLY_MISSING_ORDINAL_OR_DAY: monthly rule needs an ordinal and a day list: "MONTHLY:2"
    UNSUPPORTED_RECURRENCE_COMBINATION: unsupported recurrence rule: "BOGUS:x"
    "#);
}

//! Recurrence rules for repeating calendar events.
//!
//! A rule is written as a compact colon-delimited string:
//!
//! - `DAILY:` fires every day
//! - `WEEKLY:MONDAY,FRIDAY` fires on the listed weekdays
//! - `MONTHLY:2:TUESDAY` fires on the second Tuesday of every month
//!
//! Keywords and day names are case-insensitive, and day names may be given
//! in full (`WEDNESDAY`) or abbreviated (`WED`).
//!
//! The engine is a set of pure functions: [`parse`] turns text into a
//! [`ParsedRecurrenceRule`], [`expand`] lists the dates it fires on inside an
//! inclusive range, [`occurs_on`] tests a single date and [`build_summary`]
//! renders a sentence for display.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use eventplan_core::recurrence::{build_summary, parse};
//!
//! let rule = parse("WEEKLY:MON,FRI").unwrap();
//! let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
//! assert_eq!(
//!     build_summary(&rule, start, None),
//!     "Every Monday and Friday from June 2, 2025 forever"
//! );
//! ```

mod error;
mod occurrence;
mod parser;
mod summary;

#[cfg(test)]
mod golden_tests;

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

pub use error::{RecurrenceError, RecurrenceErrorCode, RecurrenceResult};
pub use occurrence::{expand, occurs_on};
pub use parser::parse;
pub use summary::{build_summary, format_date};

/// The seven weekdays in calendar order, Monday first.
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Returns the full English name of a weekday ("Monday").
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A set of weekdays.
///
/// Iteration always yields days Monday to Sunday, whatever the insertion
/// order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DaySet(u8);

impl DaySet {
    /// Creates an empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Creates a set holding all seven weekdays.
    pub const fn all() -> Self {
        Self(0b0111_1111)
    }

    /// Adds a day, returning `false` if it was already present.
    pub fn insert(&mut self, day: Weekday) -> bool {
        let present = self.contains(day);
        self.0 |= bit(day);
        !present
    }

    /// Returns `true` if the day is in the set.
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    /// Number of days in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set holds no days.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the days Monday to Sunday.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        let bits = self.0;
        ALL_WEEKDAYS
            .into_iter()
            .filter(move |day| bits & bit(*day) != 0)
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

fn bit(day: Weekday) -> u8 {
    1 << day.num_days_from_monday()
}

/// Position of a weekday within its month, first through fourth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ordinal {
    First,
    Second,
    Third,
    Fourth,
}

impl Ordinal {
    /// Converts a 1-based position, `None` outside 1..=4.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            4 => Some(Self::Fourth),
            _ => None,
        }
    }

    /// The 1-based position.
    pub fn number(&self) -> u32 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
        }
    }

    /// The English word used in summaries.
    pub fn word(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
        }
    }
}

/// How often a rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Every day.
    Daily,
    /// On each listed weekday.
    Weekly,
    /// On the nth listed weekday of every month.
    Monthly { ordinal: Ordinal },
}

impl Frequency {
    /// The rule keyword, as written in rule text.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly { .. } => "MONTHLY",
        }
    }

    /// The monthly ordinal, if any.
    pub fn ordinal(&self) -> Option<Ordinal> {
        match self {
            Self::Monthly { ordinal } => Some(*ordinal),
            Self::Daily | Self::Weekly => None,
        }
    }
}

/// A parsed recurrence rule.
///
/// Values are immutable and can only be built through [`parse`] or the
/// constructors below, which keep the day set non-empty.
///
/// The rule serializes as its canonical text (see the [`fmt::Display`]
/// impl) and deserializes through [`parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParsedRecurrenceRule {
    frequency: Frequency,
    days_of_week: DaySet,
}

impl ParsedRecurrenceRule {
    /// A rule firing every day.
    pub fn daily() -> Self {
        Self {
            frequency: Frequency::Daily,
            days_of_week: DaySet::all(),
        }
    }

    /// A weekly rule, `None` if `days` is empty.
    pub fn weekly(days: DaySet) -> Option<Self> {
        (!days.is_empty()).then_some(Self {
            frequency: Frequency::Weekly,
            days_of_week: days,
        })
    }

    /// A monthly rule, `None` if `days` is empty.
    pub fn monthly(ordinal: Ordinal, days: DaySet) -> Option<Self> {
        (!days.is_empty()).then_some(Self {
            frequency: Frequency::Monthly { ordinal },
            days_of_week: days,
        })
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// The weekdays the rule fires on. All seven for daily rules.
    pub fn days_of_week(&self) -> DaySet {
        self.days_of_week
    }

    pub fn ordinal(&self) -> Option<Ordinal> {
        self.frequency.ordinal()
    }
}

/// Renders the canonical rule text, e.g. `MONTHLY:2:TUESDAY`.
impl fmt::Display for ParsedRecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.frequency.keyword())?;
        match self.frequency {
            Frequency::Daily => return Ok(()),
            Frequency::Weekly => {}
            Frequency::Monthly { ordinal } => write!(f, "{}:", ordinal.number())?,
        }
        for (i, day) in self.days_of_week.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(&weekday_name(day).to_ascii_uppercase())?;
        }
        Ok(())
    }
}

impl FromStr for ParsedRecurrenceRule {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<String> for ParsedRecurrenceRule {
    type Error = RecurrenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse(&value)
    }
}

impl From<ParsedRecurrenceRule> for String {
    fn from(rule: ParsedRecurrenceRule) -> Self {
        rule.to_string()
    }
}

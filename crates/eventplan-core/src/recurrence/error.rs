//! Recurrence rule error types.

use std::fmt;

use thiserror::Error;

/// Result type for recurrence rule parsing.
pub type RecurrenceResult<T> = Result<T, RecurrenceError>;

/// Errors raised while parsing a recurrence rule.
///
/// Every variant carries the offending fragment of input so that the message
/// shown to a user points at what needs fixing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecurrenceError {
    /// Malformed segment count or unknown frequency keyword.
    #[error("unsupported recurrence rule: {rule:?}")]
    UnsupportedRecurrenceCombination { rule: String },

    /// A weekly (or monthly) rule with an empty day list.
    #[error("recurrence rule has no days: {rule:?}")]
    WeeklyMissingDays { rule: String },

    /// A day token that is not a weekday name.
    ///
    /// Also raised for monthly day lists, which share the weekly day parser.
    #[error("invalid day of week {day:?}")]
    WeeklyInvalidDay { day: String },

    /// A monthly rule without both the ordinal and the day list.
    #[error("monthly rule needs an ordinal and a day list: {rule:?}")]
    MonthlyMissingOrdinalOrDay { rule: String },

    /// Ordinal not parseable or outside 1..=4.
    #[error("invalid monthly ordinal {ordinal:?} (expected 1 to 4)")]
    MonthlyInvalidOrdinal { ordinal: String },
}

/// Stable identifier for a [`RecurrenceError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrenceErrorCode {
    UnsupportedRecurrenceCombination,
    WeeklyMissingDays,
    WeeklyInvalidDay,
    MonthlyMissingOrdinalOrDay,
    MonthlyInvalidOrdinal,
}

impl RecurrenceErrorCode {
    /// Returns the upper-snake name used in user-facing reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedRecurrenceCombination => "UNSUPPORTED_RECURRENCE_COMBINATION",
            Self::WeeklyMissingDays => "WEEKLY_MISSING_DAYS",
            Self::WeeklyInvalidDay => "WEEKLY_INVALID_DAY",
            Self::MonthlyMissingOrdinalOrDay => "MONTHLY_MISSING_ORDINAL_OR_DAY",
            Self::MonthlyInvalidOrdinal => "MONTHLY_INVALID_ORDINAL",
        }
    }
}

impl fmt::Display for RecurrenceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RecurrenceError {
    /// Returns the error code for this error.
    pub fn code(&self) -> RecurrenceErrorCode {
        match self {
            Self::UnsupportedRecurrenceCombination { .. } => {
                RecurrenceErrorCode::UnsupportedRecurrenceCombination
            }
            Self::WeeklyMissingDays { .. } => RecurrenceErrorCode::WeeklyMissingDays,
            Self::WeeklyInvalidDay { .. } => RecurrenceErrorCode::WeeklyInvalidDay,
            Self::MonthlyMissingOrdinalOrDay { .. } => {
                RecurrenceErrorCode::MonthlyMissingOrdinalOrDay
            }
            Self::MonthlyInvalidOrdinal { .. } => RecurrenceErrorCode::MonthlyInvalidOrdinal,
        }
    }

    pub(crate) fn unsupported(rule: impl Into<String>) -> Self {
        Self::UnsupportedRecurrenceCombination { rule: rule.into() }
    }

    pub(crate) fn missing_days(rule: impl Into<String>) -> Self {
        Self::WeeklyMissingDays { rule: rule.into() }
    }

    pub(crate) fn invalid_day(day: impl Into<String>) -> Self {
        Self::WeeklyInvalidDay { day: day.into() }
    }

    pub(crate) fn missing_ordinal_or_day(rule: impl Into<String>) -> Self {
        Self::MonthlyMissingOrdinalOrDay { rule: rule.into() }
    }

    pub(crate) fn invalid_ordinal(ordinal: impl Into<String>) -> Self {
        Self::MonthlyInvalidOrdinal {
            ordinal: ordinal.into(),
        }
    }
}

//! Recurrence rules and recurring event schedules for eventplan.

pub mod recurrence;
pub mod schedule;
pub mod tracing;

pub use recurrence::{
    DaySet, Frequency, Ordinal, ParsedRecurrenceRule, RecurrenceError, RecurrenceErrorCode,
    RecurrenceResult, build_summary, expand, occurs_on, parse,
};
pub use schedule::{DateRange, RecurringEvent, ScheduleError, ScheduleResult};
pub use self::tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};

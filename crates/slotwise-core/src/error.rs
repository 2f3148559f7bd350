//! Error types for parsing and scheduling operations.
//!
//! Every failure here is fatal to the run: no partial schedule is ever
//! returned. Each variant carries enough of the offending event's name or
//! text to make the message actionable.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The description matched none of the three grammatical forms.
    #[error("Unexpected content in {name}: {content}")]
    UnrecognizedDescription { name: String, content: String },

    /// A single date phrase could not be resolved against the grammar.
    #[error("Unrecognized date phrase: {0:?}")]
    UnrecognizedPhrase(String),

    /// A duration phrase used a unit outside hour/minute/second.
    #[error("Unrecognized duration: {0:?}")]
    UnrecognizedDuration(String),

    /// A day-set token is not a known day name or alias.
    #[error("Unrecognized day of the week: {0:?}")]
    UnrecognizedDay(String),

    /// A task's deadline already passed before it could be scheduled.
    #[error("Deadline for {0} missed!")]
    MissedDeadline(String),

    /// The greedy scheduler could not fit a task before its deadline.
    #[error("Could not fit event {0} in schedule")]
    InfeasiblePlacement(String),

    /// An event record with neither a start date nor a duration reached the
    /// scheduler (precondition violation).
    #[error("Malformed event {0}: needs a start date or a duration")]
    MalformedEvent(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

//! The `Event` record — the one entity the whole crate revolves around.
//!
//! An event is either an *appointment* (start and end known, duration
//! derived) or a *task* (duration and deadline known, start assigned later
//! by the scheduler). The free→fixed transition happens exactly once, via
//! [`Event::fixed_at`], which produces a new record rather than mutating in
//! place — fixed events double as obstacles for later placements and must
//! not change under the scheduler's feet.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// A single commitment: appointment or task.
///
/// Invariant: `end_date` is always set, and at least one of `start_date`
/// or `duration` is set. A record violating this is rejected by the
/// scheduler as malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Identifying label; not required to be unique.
    pub name: String,
    /// Absolute start, or `None` for a task awaiting placement.
    pub start_date: Option<NaiveDateTime>,
    /// Time span. Derived (`end - start`) for appointments, authoritative
    /// for tasks.
    pub duration: Option<Duration>,
    /// End for appointments; deadline for unscheduled tasks.
    pub end_date: NaiveDateTime,
}

impl Event {
    /// A fixed appointment occupying `[start, end)`.
    pub fn appointment(name: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Event {
            name: name.into(),
            start_date: Some(start),
            duration: Some(end - start),
            end_date: end,
        }
    }

    /// A free task: `duration` of work due by `deadline`.
    pub fn task(name: impl Into<String>, duration: Duration, deadline: NaiveDateTime) -> Self {
        Event {
            name: name.into(),
            start_date: None,
            duration: Some(duration),
            end_date: deadline,
        }
    }

    /// True once the event occupies a concrete time range.
    pub fn is_fixed(&self) -> bool {
        self.start_date.is_some()
    }

    /// The one allowed state transition: place a free event at `start`,
    /// replacing its deadline with the real end. Returns a new record.
    pub fn fixed_at(&self, start: NaiveDateTime) -> Event {
        let duration = self.duration.unwrap_or_else(|| self.end_date - start);
        Event {
            name: self.name.clone(),
            start_date: Some(start),
            duration: Some(duration),
            end_date: start + duration,
        }
    }

    /// Serializable view of a scheduled event, or `None` if still free.
    pub fn as_scheduled(&self) -> Option<ScheduledEntry> {
        let start = self.start_date?;
        Some(ScheduledEntry {
            name: self.name.clone(),
            start,
            end: self.end_date,
            duration_seconds: (self.end_date - start).num_seconds(),
        })
    }
}

/// Render a span as `H:MM:SS` (hours unpadded, may exceed 24).
fn fmt_span(span: Duration) -> String {
    let total = span.num_seconds();
    format!("{}:{:02}:{:02}", total / 3600, total % 3600 / 60, total % 60)
}

impl fmt::Display for Event {
    /// `Clean bedroom: 2012-11-02 16:00:00 - 2012-11-02 17:30:00 (1:30:00)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let duration = self
            .duration
            .map(fmt_span)
            .unwrap_or_else(|| "?".to_string());
        match self.start_date {
            Some(start) => write!(
                f,
                "{}: {} - {} ({})",
                self.name, start, self.end_date, duration
            ),
            None => write!(
                f,
                "{}: unscheduled - {} ({})",
                self.name, self.end_date, duration
            ),
        }
    }
}

/// Flat, serializable row of the final schedule (used by JSON output).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledEntry {
    pub name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_seconds: i64,
}

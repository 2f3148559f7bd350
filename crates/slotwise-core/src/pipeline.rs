//! The end-to-end entry point: raw description tuples in, schedule out.
//!
//! Sits between the external discovery collaborator (which walks files and
//! reads metadata) and the presentation layer. Parses every description,
//! applies the admission filter, and hands the surviving events to the
//! scheduler.

use crate::error::{Result, ScheduleError};
use crate::event::Event;
use crate::parser::parse_description;
use crate::phrase::PhraseResolver;
use crate::scheduler::schedule_at;
use chrono::{Duration, NaiveDateTime};

/// Recurring appointments expand this far past `now` when no explicit
/// horizon is given.
pub const DEFAULT_HORIZON_DAYS: i64 = 60;

/// One discovered event source: a name, its one-line description, and the
/// reference time every relative phrase resolves against.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceEntry {
    pub name: String,
    pub content: String,
    pub reference_time: NaiveDateTime,
}

impl SourceEntry {
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        reference_time: NaiveDateTime,
    ) -> Self {
        SourceEntry {
            name: name.into(),
            content: content.into(),
            reference_time,
        }
    }
}

/// Admission filter: events already over at `now` are dropped when they are
/// appointments; a task whose deadline has passed is fatal instead (it can
/// no longer be placed anywhere).
fn admit(events: Vec<Event>, now: NaiveDateTime) -> Result<Vec<Event>> {
    let mut admitted = Vec::with_capacity(events.len());
    for event in events {
        if event.end_date >= now {
            admitted.push(event);
        } else if !event.is_fixed() {
            return Err(ScheduleError::MissedDeadline(event.name));
        }
    }
    Ok(admitted)
}

/// Parse every entry, admit the results, and schedule them.
///
/// `horizon` bounds recurrence expansion and defaults to `now` plus
/// [`DEFAULT_HORIZON_DAYS`]. `now` is also the scheduler's placement
/// anchor; the core never reads the wall clock itself.
///
/// Returns the complete schedule ordered by start time, every event fixed
/// and no two overlapping — or the first fatal error encountered.
pub fn get_schedule(
    entries: &[SourceEntry],
    horizon: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> Result<Vec<Event>> {
    let horizon = horizon.unwrap_or(now + Duration::days(DEFAULT_HORIZON_DAYS));
    let resolver = PhraseResolver::new();

    let mut events = Vec::new();
    for entry in entries {
        events.extend(parse_description(
            &resolver,
            &entry.name,
            &entry.content,
            entry.reference_time,
            horizon,
        )?);
    }

    schedule_at(admit(events, now)?, now)
}

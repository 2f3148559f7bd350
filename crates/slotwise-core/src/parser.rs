//! Description parsing — raw text to typed event records.
//!
//! A description takes one of three grammatical forms, recognized by
//! substring in this priority order:
//!
//! 1. `<duration> due <deadline>` — a deadline task
//! 2. `every <day-set> from <start> to <end>` — a recurring appointment,
//!    expanded into one fixed event per qualifying day up to the horizon
//! 3. `[from] <start> to <end>` — a single fixed appointment
//!
//! Classification yields a [`ParseOutcome`]; whether an unrecognized
//! description is fatal is the caller's call (the pipeline treats it so).

use crate::error::{Result, ScheduleError};
use crate::event::Event;
use crate::phrase::PhraseResolver;
use crate::weekset::{resolve_week_set, WeekSet};
use chrono::{Datelike, Duration, NaiveDateTime};

/// One description, classified.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// `[from] <start> to <end>` — one fixed event.
    FixedAppointment(Event),
    /// `<duration> due <deadline>` — one free event.
    DeadlineTask(Event),
    /// `every <day-set> from <period>` — zero or more fixed events, one per
    /// qualifying day before the horizon.
    RecurringAppointment(Vec<Event>),
    /// None of the three forms matched.
    Unrecognized { reason: String },
}

/// Classify `content` and resolve it into events.
///
/// `reference` anchors every relative phrase (for file-backed sources this
/// is the file's modification time); `horizon` bounds recurrence expansion.
/// Phrase, duration, and day-set errors inside a recognized form are fatal
/// here; only the no-form-matched case is deferred via
/// [`ParseOutcome::Unrecognized`].
pub fn classify(
    resolver: &PhraseResolver,
    name: &str,
    content: &str,
    reference: NaiveDateTime,
    horizon: NaiveDateTime,
) -> Result<ParseOutcome> {
    if let Some((duration_text, deadline_text)) = content.split_once(" due ") {
        let duration = resolver.resolve_duration(duration_text)?;
        let deadline = resolver.resolve_one(deadline_text, reference)?;
        return Ok(ParseOutcome::DeadlineTask(Event::task(
            name, duration, deadline,
        )));
    }

    if content.starts_with("every") {
        if let Some((days_text, period)) = content
            .trim_start_matches("every ")
            .split_once(" from ")
        {
            let week_set = resolve_week_set(days_text)?;
            let events = expand_recurring(resolver, name, week_set, period, reference, horizon)?;
            return Ok(ParseOutcome::RecurringAppointment(events));
        }
    }

    // "from" carries no information in an appointment period; stripping
    // every occurrence also handles "<date> from <time> to <time>".
    let cleaned = content.replace("from ", "");
    if let Some((start_text, end_text)) = cleaned.split_once(" to ") {
        let times = resolver.resolve_sequence(&[start_text, end_text], reference)?;
        return Ok(ParseOutcome::FixedAppointment(Event::appointment(
            name, times[0], times[1],
        )));
    }

    Ok(ParseOutcome::Unrecognized {
        reason: format!("no grammatical form matches {:?}", content),
    })
}

/// Classify and promote [`ParseOutcome::Unrecognized`] to a fatal error.
pub fn parse_description(
    resolver: &PhraseResolver,
    name: &str,
    content: &str,
    reference: NaiveDateTime,
    horizon: NaiveDateTime,
) -> Result<Vec<Event>> {
    match classify(resolver, name, content, reference, horizon)? {
        ParseOutcome::FixedAppointment(event) | ParseOutcome::DeadlineTask(event) => {
            Ok(vec![event])
        }
        ParseOutcome::RecurringAppointment(events) => Ok(events),
        ParseOutcome::Unrecognized { .. } => Err(ScheduleError::UnrecognizedDescription {
            name: name.to_string(),
            content: content.to_string(),
        }),
    }
}

/// Expand a recurring period over each calendar day from `reference`'s date
/// up to (exclusive) `horizon`.
///
/// Each candidate day is anchored at its own midnight, so the period's
/// phrases supply the time of day ("4 pm to 8 pm" lands on 16:00-20:00 of
/// that day). Days whose resolved start falls outside the week-set produce
/// nothing.
fn expand_recurring(
    resolver: &PhraseResolver,
    name: &str,
    week_set: WeekSet,
    period: &str,
    reference: NaiveDateTime,
    horizon: NaiveDateTime,
) -> Result<Vec<Event>> {
    let (start_text, end_text) =
        period
            .split_once(" to ")
            .ok_or_else(|| ScheduleError::UnrecognizedDescription {
                name: name.to_string(),
                content: format!("every ... from {}", period),
            })?;

    let mut events = Vec::new();
    let mut base = reference
        .date()
        .and_hms_opt(0, 0, 0)
        .unwrap_or(reference);

    while base < horizon {
        let times = resolver.resolve_sequence(&[start_text, end_text], base)?;
        if week_set.contains(times[0].weekday()) {
            events.push(Event::appointment(name, times[0], times[1]));
        }
        base += Duration::days(1);
    }

    Ok(events)
}

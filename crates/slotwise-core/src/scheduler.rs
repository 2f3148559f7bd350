//! Slot-fitting scheduler — greedy earliest-deadline placement.
//!
//! Partitions events into fixed appointments and free tasks, then places
//! each task (soonest deadline first) into the first gap in the fixed
//! timeline that is strictly larger than its duration. Placed tasks become
//! obstacles for the ones after them. One pass, no backtracking: a feasible
//! schedule can be missed when only a different placement order fits, and
//! an infeasible task is a fatal error rather than a partial result.

use crate::error::{Result, ScheduleError};
use crate::event::Event;
use chrono::{Duration, NaiveDateTime};

/// Earliest start of a gap at least `duration` long in the fixed timeline,
/// never before `anchor`.
///
/// A gap between consecutive fixed events qualifies only when strictly
/// larger than `duration` (exact fits are rejected; see DESIGN.md). With no
/// qualifying gap the slot is right after the last fixed event ends.
fn first_slot(anchor: NaiveDateTime, fixed: &[Event], duration: Duration) -> NaiveDateTime {
    if fixed.is_empty() {
        return anchor;
    }

    let mut timeline: Vec<&Event> = fixed.iter().collect();
    timeline.sort_by_key(|e| e.start_date);

    // Leading gap, before any fixed event.
    if let Some(start) = timeline[0].start_date {
        if start - anchor > duration {
            return anchor;
        }
    }

    for pair in timeline.windows(2) {
        let (before, after) = (pair[0], pair[1]);
        if let Some(after_start) = after.start_date {
            if after_start - before.end_date > duration {
                return before.end_date;
            }
        }
    }

    // No gap anywhere, go after the last event.
    timeline[timeline.len() - 1].end_date
}

/// Assign a concrete start to every free event, respecting deadlines, and
/// return the full schedule ordered by start time.
///
/// `anchor` is the earliest instant anything may be placed at (the
/// scheduling moment — tasks are never backdated). Fixed input events are
/// passed through untouched.
///
/// # Errors
///
/// [`ScheduleError::MalformedEvent`] if an event has neither a start date
/// nor a duration; [`ScheduleError::InfeasiblePlacement`] if the first
/// available slot would run past a task's deadline.
pub fn schedule_at(events: Vec<Event>, anchor: NaiveDateTime) -> Result<Vec<Event>> {
    let mut fixed: Vec<Event> = Vec::new();
    let mut free: Vec<Event> = Vec::new();

    for event in events {
        if event.is_fixed() {
            fixed.push(event);
        } else if event.duration.is_some() {
            free.push(event);
        } else {
            return Err(ScheduleError::MalformedEvent(event.name));
        }
    }

    // Earliest deadline first; sort is stable, so same-deadline tasks keep
    // their original relative order.
    free.sort_by_key(|e| e.end_date);

    for event in free {
        let duration = event
            .duration
            .ok_or_else(|| ScheduleError::MalformedEvent(event.name.clone()))?;

        let slot = first_slot(anchor, &fixed, duration);
        if slot + duration > event.end_date {
            return Err(ScheduleError::InfeasiblePlacement(event.to_string()));
        }

        // Free → fixed, replacing the deadline with the real end; from here
        // on this event is an obstacle like any appointment.
        fixed.push(event.fixed_at(slot));
    }

    fixed.sort_by_key(|e| e.start_date);
    Ok(fixed)
}

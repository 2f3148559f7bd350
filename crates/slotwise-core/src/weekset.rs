//! Week-set expressions — which weekdays a recurring appointment falls on.
//!
//! Parses comma/"and"-joined day names with the aliases "weekday",
//! "weekend" and "day", plus an optional trailing "except" exclusion
//! clause, into a 7-slot inclusion vector indexed Monday(0)..Sunday(6).

use crate::error::{Result, ScheduleError};
use chrono::Weekday;

/// Day names in slot order, Monday first.
const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Inclusion vector over the days of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeekSet([bool; 7]);

impl WeekSet {
    /// Whether the given weekday is included.
    pub fn contains(&self, day: Weekday) -> bool {
        self.0[day.num_days_from_monday() as usize]
    }

    /// The raw Monday-first inclusion slots.
    pub fn slots(&self) -> [bool; 7] {
        self.0
    }
}

/// Mark every day referenced by one clause's tokens, expanding aliases.
/// Re-marking an already-marked day is a no-op, so overlapping aliases and
/// duplicates are harmless.
fn mark_referenced_days(tokens: &[&str]) -> Result<[bool; 7]> {
    let mut slots = [false; 7];
    for &token in tokens {
        match token {
            "weekday" => slots[..5].iter_mut().for_each(|s| *s = true),
            "weekend" => slots[5..].iter_mut().for_each(|s| *s = true),
            "day" => slots = [true; 7],
            _ => match DAY_NAMES.iter().position(|&name| name == token) {
                Some(index) => slots[index] = true,
                None => return Err(ScheduleError::UnrecognizedDay(token.to_string())),
            },
        }
    }
    Ok(slots)
}

/// Resolve a week-set expression like `"weekday except monday"` or
/// `"saturday, sunday and wednesday"` into its inclusion vector.
///
/// The result is the positive clause minus the exclusion clause. Unknown
/// tokens are an error rather than being silently dropped.
pub fn resolve_week_set(text: &str) -> Result<WeekSet> {
    let normalized = text.to_lowercase().replace(',', " ").replace(" and ", " ");

    let (positive, negative) = match normalized.split_once(" except ") {
        Some((pos, neg)) => (pos.to_string(), neg.to_string()),
        None => (normalized, String::new()),
    };

    let positive = mark_referenced_days(&positive.split_whitespace().collect::<Vec<_>>())?;
    let negative = mark_referenced_days(&negative.split_whitespace().collect::<Vec<_>>())?;

    let mut slots = [false; 7];
    for (slot, (&p, &n)) in slots.iter_mut().zip(positive.iter().zip(negative.iter())) {
        *slot = p && !n;
    }
    Ok(WeekSet(slots))
}

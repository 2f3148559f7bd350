//! Tests for week-set expression resolution.

use chrono::Weekday;
use slotwise_core::error::ScheduleError;
use slotwise_core::weekset::resolve_week_set;

#[test]
fn single_day() {
    let set = resolve_week_set("monday").unwrap();
    assert_eq!(
        set.slots(),
        [true, false, false, false, false, false, false]
    );
}

#[test]
fn comma_and_and_joined_days() {
    // "saturday, sunday and wednesday" — commas and "and" both separate.
    let set = resolve_week_set("saturday, sunday and wednesday").unwrap();
    assert_eq!(set.slots(), [false, false, true, false, false, true, true]);
}

#[test]
fn weekday_alias() {
    let set = resolve_week_set("weekday").unwrap();
    assert_eq!(set.slots(), [true, true, true, true, true, false, false]);
}

#[test]
fn weekend_alias() {
    let set = resolve_week_set("weekend").unwrap();
    assert_eq!(set.slots(), [false, false, false, false, false, true, true]);
}

#[test]
fn day_alias_covers_the_whole_week() {
    let set = resolve_week_set("day").unwrap();
    assert_eq!(set.slots(), [true; 7]);
}

#[test]
fn alias_combines_with_explicit_day() {
    // 'weekend and Monday' => Monday plus both weekend days.
    let set = resolve_week_set("weekend and Monday").unwrap();
    assert_eq!(set.slots(), [true, false, false, false, false, true, true]);
}

#[test]
fn duplicates_are_idempotent() {
    let set = resolve_week_set("monday, monday and weekday").unwrap();
    assert_eq!(set.slots(), [true, true, true, true, true, false, false]);
}

#[test]
fn except_clause_subtracts() {
    // 'weekday except Monday' => Tue-Fri only.
    let set = resolve_week_set("weekday except monday").unwrap();
    assert_eq!(set.slots(), [false, true, true, true, true, false, false]);
    assert!(!set.contains(Weekday::Mon));
    assert!(set.contains(Weekday::Tue));
    assert!(!set.contains(Weekday::Sat));
}

#[test]
fn except_alias_clause() {
    let set = resolve_week_set("day except weekend").unwrap();
    assert_eq!(set.slots(), [true, true, true, true, true, false, false]);
}

#[test]
fn case_insensitive() {
    let set = resolve_week_set("Saturday AND Sunday").unwrap();
    assert_eq!(set.slots(), [false, false, false, false, false, true, true]);
}

#[test]
fn unknown_token_is_fatal() {
    let result = resolve_week_set("monday and funday");
    assert!(
        matches!(result, Err(ScheduleError::UnrecognizedDay(ref t)) if t == "funday"),
        "unknown vocabulary must not be silently ignored"
    );
}

#[test]
fn unknown_token_in_except_clause_is_fatal() {
    assert!(resolve_week_set("day except smonday").is_err());
}

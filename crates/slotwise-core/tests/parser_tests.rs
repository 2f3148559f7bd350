//! Tests for description classification and recurrence expansion.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use slotwise_core::error::ScheduleError;
use slotwise_core::parser::{classify, parse_description, ParseOutcome};
use slotwise_core::phrase::PhraseResolver;

fn dt(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
}

/// Monday 2026-08-31 09:00.
fn monday_morning() -> NaiveDateTime {
    dt(2026, 8, 31, 9, 0, 0)
}

fn horizon() -> NaiveDateTime {
    monday_morning() + Duration::days(60)
}

#[test]
fn deadline_task_form() {
    // "4 hours due next Friday 5 pm" anchored on Monday 09:00:
    // one free event, 4h duration, deadline Friday 17:00.
    let resolver = PhraseResolver::new();
    let events = parse_description(
        &resolver,
        "write thesis chapter",
        "4 hours due next Friday 5 pm",
        monday_morning(),
        horizon(),
    )
    .unwrap();

    assert_eq!(events.len(), 1);
    let task = &events[0];
    assert_eq!(task.name, "write thesis chapter");
    assert_eq!(task.start_date, None, "start stays unset until scheduled");
    assert_eq!(task.duration, Some(Duration::hours(4)));
    assert_eq!(task.end_date, dt(2026, 9, 4, 17, 0, 0));
}

#[test]
fn fixed_appointment_form() {
    let resolver = PhraseResolver::new();
    let events = parse_description(
        &resolver,
        "dinner",
        "next friday from 4 pm to 8 pm",
        monday_morning(),
        horizon(),
    )
    .unwrap();

    assert_eq!(events.len(), 1);
    let appointment = &events[0];
    assert_eq!(appointment.start_date, Some(dt(2026, 9, 4, 16, 0, 0)));
    assert_eq!(appointment.end_date, dt(2026, 9, 4, 20, 0, 0));
    assert_eq!(appointment.duration, Some(Duration::hours(4)));
}

#[test]
fn fixed_appointment_leading_from_is_optional() {
    let resolver = PhraseResolver::new();
    let with_from = parse_description(
        &resolver,
        "a",
        "from 10 am to 11 am",
        monday_morning(),
        horizon(),
    )
    .unwrap();
    let without = parse_description(
        &resolver,
        "a",
        "10 am to 11 am",
        monday_morning(),
        horizon(),
    )
    .unwrap();
    assert_eq!(with_from, without);
}

#[test]
fn recurring_weekend_within_ten_days() {
    // "every weekend from 10 am to 2 pm", reference Monday, horizon +10
    // days: exactly the one Saturday and one Sunday inside the horizon.
    let resolver = PhraseResolver::new();
    let events = parse_description(
        &resolver,
        "hike",
        "every weekend from 10 am to 2 pm",
        monday_morning(),
        monday_morning() + Duration::days(10),
    )
    .unwrap();

    assert_eq!(events.len(), 2, "one Saturday and one Sunday expected");
    assert_eq!(events[0].start_date, Some(dt(2026, 9, 5, 10, 0, 0)));
    assert_eq!(events[0].end_date, dt(2026, 9, 5, 14, 0, 0));
    assert_eq!(events[1].start_date, Some(dt(2026, 9, 6, 10, 0, 0)));
    assert_eq!(events[1].end_date, dt(2026, 9, 6, 14, 0, 0));
    assert!(events.iter().all(|e| e.duration == Some(Duration::hours(4))));
}

#[test]
fn recurring_except_clause() {
    // Weekdays minus Monday over one full week: Tue, Wed, Thu, Fri.
    let resolver = PhraseResolver::new();
    let events = parse_description(
        &resolver,
        "gym",
        "every weekday except monday from 6 pm to 7 pm",
        monday_morning(),
        monday_morning() + Duration::days(7),
    )
    .unwrap();

    assert_eq!(events.len(), 4);
    assert_eq!(events[0].start_date, Some(dt(2026, 9, 1, 18, 0, 0)));
    assert_eq!(events[3].start_date, Some(dt(2026, 9, 4, 18, 0, 0)));
}

#[test]
fn recurring_expansion_stops_at_horizon() {
    let resolver = PhraseResolver::new();
    let events = parse_description(
        &resolver,
        "standup",
        "every day from 9 am to 9:15 am",
        monday_morning(),
        monday_morning() + Duration::days(3),
    )
    .unwrap();

    // Days 0, 1, 2 qualify; day 3's midnight base is still before the
    // 09:00 horizon, so it squeaks in too.
    assert_eq!(events.len(), 4);
    assert_eq!(events.last().unwrap().start_date, Some(dt(2026, 9, 3, 9, 0, 0)));
}

#[test]
fn classification_priority_due_wins_over_to() {
    // " due " is checked before the appointment forms.
    let resolver = PhraseResolver::new();
    let outcome = classify(
        &resolver,
        "t",
        "2 hours due 2026-09-04 17:00",
        monday_morning(),
        horizon(),
    )
    .unwrap();
    assert!(matches!(outcome, ParseOutcome::DeadlineTask(_)));
}

#[test]
fn unmatched_content_is_unrecognized_outcome() {
    let resolver = PhraseResolver::new();
    let outcome = classify(
        &resolver,
        "note",
        "buy milk sometime",
        monday_morning(),
        horizon(),
    )
    .unwrap();
    assert!(matches!(outcome, ParseOutcome::Unrecognized { .. }));
}

#[test]
fn unmatched_content_is_fatal_through_parse_description() {
    let resolver = PhraseResolver::new();
    let result = parse_description(
        &resolver,
        "note",
        "buy milk sometime",
        monday_morning(),
        horizon(),
    );
    match result {
        Err(ScheduleError::UnrecognizedDescription { name, content }) => {
            assert_eq!(name, "note");
            assert_eq!(content, "buy milk sometime");
        }
        other => panic!("expected UnrecognizedDescription, got {:?}", other),
    }
}

#[test]
fn bad_duration_unit_is_fatal() {
    let resolver = PhraseResolver::new();
    let result = parse_description(
        &resolver,
        "t",
        "2 fortnights due friday",
        monday_morning(),
        horizon(),
    );
    assert!(matches!(
        result,
        Err(ScheduleError::UnrecognizedDuration(_))
    ));
}

#[test]
fn bad_day_token_is_fatal() {
    let resolver = PhraseResolver::new();
    let result = parse_description(
        &resolver,
        "r",
        "every funday from 1 pm to 2 pm",
        monday_morning(),
        horizon(),
    );
    assert!(matches!(result, Err(ScheduleError::UnrecognizedDay(_))));
}

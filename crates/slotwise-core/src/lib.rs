//! # slotwise-core
//!
//! Turns loosely structured textual descriptions of commitments into a
//! single, non-overlapping, time-ordered schedule.
//!
//! Descriptions use a small mini-language: fixed appointments ("next friday
//! from 4 pm to 8 pm"), deadline tasks ("4 hours due next friday 5 pm"),
//! and weekly recurring appointments ("every weekday except monday from
//! 8 pm to 10 pm"). Tasks are placed greedily, earliest deadline first,
//! into the gaps left by appointments.
//!
//! ## Modules
//!
//! - [`phrase`] — date phrase, phrase sequence, and duration resolution
//! - [`weekset`] — day-of-week set expressions with aliases and "except"
//! - [`parser`] — description classification and recurrence expansion
//! - [`scheduler`] — greedy earliest-deadline slot fitting
//! - [`pipeline`] — admission filter and the `get_schedule` entry point
//! - [`event`] — the `Event` record and its display contract
//! - [`error`] — error types
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use slotwise_core::{get_schedule, SourceEntry};
//!
//! let now = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let entries = vec![
//!     SourceEntry::new("standup", "from 10 am to 10:30 am", now),
//!     SourceEntry::new("write report", "2 hours due 5 pm", now),
//! ];
//!
//! let schedule = get_schedule(&entries, None, now).unwrap();
//! assert_eq!(schedule.len(), 2);
//! assert!(schedule.iter().all(|e| e.is_fixed()));
//! ```

pub mod error;
pub mod event;
pub mod parser;
pub mod phrase;
pub mod pipeline;
pub mod scheduler;
pub mod weekset;

pub use error::ScheduleError;
pub use event::{Event, ScheduledEntry};
pub use parser::{classify, parse_description, ParseOutcome};
pub use phrase::PhraseResolver;
pub use pipeline::{get_schedule, SourceEntry, DEFAULT_HORIZON_DAYS};
pub use scheduler::schedule_at;
pub use weekset::{resolve_week_set, WeekSet};

//! Date and duration phrase resolution.
//!
//! Implements the descriptive mini-language used by event descriptions:
//! single date phrases ("next friday 4 pm", "tomorrow noon", "2026-09-04
//! 16:00", bare times like "8 pm"), monotonic multi-phrase sequences, and
//! the `<number> <unit>` duration grammar.
//!
//! The resolver holds no state between calls; every resolution is anchored
//! at an explicit caller-supplied reference time.

use crate::error::{Result, ScheduleError};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

/// Full and abbreviated weekday names accepted by the date grammar.
fn parse_weekday(token: &str) -> Option<Weekday> {
    match token {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// First date with the target weekday strictly after `after`.
fn weekday_after(after: NaiveDate, target: Weekday) -> NaiveDate {
    let mut day = after + Duration::days(1);
    while day.weekday() != target {
        day += Duration::days(1);
    }
    day
}

/// Parse a clock token (`4`, `4:30`, `16:00:30`), with an optional meridiem
/// already split off by the caller.
fn parse_clock(token: &str, meridiem: Option<&str>) -> Option<NaiveTime> {
    let mut fields = token.split(':');
    let hour: u32 = fields.next()?.parse().ok()?;
    let minute: u32 = match fields.next() {
        Some(m) => m.parse().ok()?,
        None => 0,
    };
    let second: u32 = match fields.next() {
        Some(s) => s.parse().ok()?,
        None => 0,
    };
    if fields.next().is_some() {
        return None;
    }

    let hour = match meridiem {
        Some("am") if hour == 12 => 0,
        Some("am") if hour <= 12 => hour,
        Some("pm") if hour == 12 => 12,
        Some("pm") if hour <= 12 => hour + 12,
        Some(_) => return None,
        None => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Drop sub-second precision (mtime-derived references carry nanoseconds).
fn truncate_to_second(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}

/// Stateless resolver for the date/duration mini-language.
///
/// Constructed explicitly and injected wherever phrases need resolving;
/// there is no ambient parser instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseResolver;

impl PhraseResolver {
    pub fn new() -> Self {
        PhraseResolver
    }

    /// Resolve a single phrase against `reference`.
    ///
    /// A phrase combines an optional date part and an optional time part:
    /// a missing date part keeps the reference's date, a missing time part
    /// keeps the reference's time of day. At least one part must be
    /// present; an unknown token fails the whole phrase.
    pub fn resolve_one(&self, phrase: &str, reference: NaiveDateTime) -> Result<NaiveDateTime> {
        let reference = truncate_to_second(reference);
        let lowered = phrase.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(ScheduleError::UnrecognizedPhrase(phrase.to_string()));
        }

        let mut date: Option<NaiveDate> = None;
        let mut time: Option<NaiveTime> = None;

        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i];
            match token {
                // "next" only qualifies a weekday name; both readings land
                // on the first occurrence strictly after the reference.
                "next" => {
                    let day = tokens
                        .get(i + 1)
                        .and_then(|t| parse_weekday(t))
                        .ok_or_else(|| ScheduleError::UnrecognizedPhrase(phrase.to_string()))?;
                    date = Some(weekday_after(reference.date(), day));
                    i += 2;
                    continue;
                }
                "today" => date = Some(reference.date()),
                "tomorrow" => date = Some(reference.date() + Duration::days(1)),
                "noon" => time = NaiveTime::from_hms_opt(12, 0, 0),
                "midnight" => time = NaiveTime::from_hms_opt(0, 0, 0),
                _ => {
                    if let Some(day) = parse_weekday(token) {
                        date = Some(weekday_after(reference.date(), day));
                    } else if let Ok(d) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
                        date = Some(d);
                    } else {
                        // Clock token, possibly with the meridiem attached
                        // ("4pm") or as the following token ("4 pm").
                        let (clock, attached) = match token.strip_suffix("am") {
                            Some(rest) => (rest, Some("am")),
                            None => match token.strip_suffix("pm") {
                                Some(rest) => (rest, Some("pm")),
                                None => (token, None),
                            },
                        };
                        let meridiem = match attached {
                            Some(m) => Some(m),
                            None => match tokens.get(i + 1) {
                                Some(&"am") => Some("am"),
                                Some(&"pm") => Some("pm"),
                                _ => None,
                            },
                        };
                        let parsed = parse_clock(clock, meridiem).ok_or_else(|| {
                            ScheduleError::UnrecognizedPhrase(phrase.to_string())
                        })?;
                        time = Some(parsed);
                        if attached.is_none() && meridiem.is_some() {
                            i += 1;
                        }
                    }
                }
            }
            i += 1;
        }

        Ok(NaiveDateTime::new(
            date.unwrap_or_else(|| reference.date()),
            time.unwrap_or_else(|| reference.time()),
        ))
    }

    /// Resolve an ordered sequence of phrases into a monotonically
    /// non-decreasing sequence of timestamps.
    ///
    /// Each resolved timestamp becomes the reference for the next phrase,
    /// so `["next friday 4 pm", "8 pm"]` keeps the second time on Friday.
    /// A non-first phrase resolving strictly before its running reference
    /// is pushed forward by one day (a bare time after an earlier anchor is
    /// assumed to mean the next calendar day, never the past).
    pub fn resolve_sequence(
        &self,
        phrases: &[&str],
        reference: NaiveDateTime,
    ) -> Result<Vec<NaiveDateTime>> {
        let mut running = truncate_to_second(reference);
        let mut resolved = Vec::with_capacity(phrases.len());

        for (index, phrase) in phrases.iter().enumerate() {
            let mut instant = self.resolve_one(phrase, running)?;
            if index > 0 && instant < running {
                instant += Duration::days(1);
            }
            resolved.push(instant);
            running = instant;
        }

        Ok(resolved)
    }

    /// Resolve a `<number> <unit>` duration phrase. The number may be
    /// fractional; the unit matches hour/minute/second by case-insensitive
    /// substring (so "hours", "Minutes", "sec(ond)s" all work). Fractional
    /// spans truncate to whole seconds.
    pub fn resolve_duration(&self, text: &str) -> Result<Duration> {
        let err = || ScheduleError::UnrecognizedDuration(text.to_string());

        let mut parts = text.split_whitespace();
        let (number, unit) = match (parts.next(), parts.next(), parts.next()) {
            (Some(number), Some(unit), None) => (number, unit),
            _ => return Err(err()),
        };

        let value: f64 = number.parse().map_err(|_| err())?;
        if !value.is_finite() || value < 0.0 {
            return Err(err());
        }

        let unit = unit.to_lowercase();
        let seconds = if unit.contains("hour") {
            value * 3600.0
        } else if unit.contains("minute") {
            value * 60.0
        } else if unit.contains("second") {
            value
        } else {
            return Err(err());
        };

        // A grammar-valid number can still overflow the representable span;
        // `as i64` saturates and the checked constructor catches the rest.
        Duration::try_seconds(seconds as i64).ok_or_else(err)
    }
}

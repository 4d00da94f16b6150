// File: ./src/model/event.rs
use crate::model::csv::{Row, parse_rows};
use chrono::NaiveDateTime;
use serde::Serialize;

pub const SUBJECT: &str = "Subject";
pub const START_DATE: &str = "Start Date";
pub const START_TIME: &str = "Start Time";
pub const END_DATE: &str = "End Date";
pub const END_TIME: &str = "End Time";

/// Columns a row must carry (non-empty) to become an event.
pub const REQUIRED_COLUMNS: [&str; 5] = [SUBJECT, START_DATE, START_TIME, END_DATE, END_TIME];

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A titled time span from one export row.
///
/// `start` and `end` are local wall-clock times; the exports carry no zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl CalendarEvent {
    /// Builds an event from a parsed row, or `None` if a required field is
    /// missing or empty, or if the date/time text does not parse.
    pub fn from_row(row: &Row) -> Option<Self> {
        let field = |key: &str| row.get(key).map(String::as_str).filter(|v| !v.is_empty());

        let title = field(SUBJECT)?;
        let (start_date, start_time) = (field(START_DATE)?, field(START_TIME)?);
        let (end_date, end_time) = (field(END_DATE)?, field(END_TIME)?);

        let start = parse_local(start_date, start_time);
        let end = parse_local(end_date, end_time);
        match (start, end) {
            (Some(start), Some(end)) => Some(Self {
                title: title.to_string(),
                start,
                end,
            }),
            _ => {
                log::warn!(
                    "Dropping row '{}': unreadable date/time ({} {} / {} {})",
                    title,
                    start_date,
                    start_time,
                    end_date,
                    end_time
                );
                None
            }
        }
    }
}

/// Combines a date and an `HH:MM` time as `"<date>T<time>:00"`.
fn parse_local(date: &str, time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{}T{}:00", date, time), DATE_TIME_FORMAT).ok()
}

/// Keeps row order; rows that do not qualify are skipped.
pub fn rows_to_events(rows: &[Row]) -> Vec<CalendarEvent> {
    rows.iter().filter_map(CalendarEvent::from_row).collect()
}

pub fn parse_events(text: &str) -> Vec<CalendarEvent> {
    rows_to_events(&parse_rows(text))
}

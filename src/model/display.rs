// File: ./src/model/display.rs
use crate::model::CalendarEvent;
use chrono::{NaiveDate, NaiveDateTime};

pub trait EventDisplay {
    /// `HH:MM — HH:MM`
    fn time_span(&self) -> String;
    /// Title followed by the time span, as shown in tooltips.
    fn summary_line(&self) -> String;
}

impl EventDisplay for CalendarEvent {
    fn time_span(&self) -> String {
        format!("{} — {}", clock(&self.start), clock(&self.end))
    }

    fn summary_line(&self) -> String {
        format!("{} — {} - {}", self.title, clock(&self.start), clock(&self.end))
    }
}

fn clock(dt: &NaiveDateTime) -> String {
    dt.format("%H:%M").to_string()
}

/// Lower-case 12 hour label for an hour row, e.g. `8:00 am`, `12:00 pm`.
pub fn hour_label(hour: u32) -> String {
    let suffix = if hour % 24 < 12 { "am" } else { "pm" };
    let h12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:00 {}", h12, suffix)
}

/// Short weekday name, e.g. `Mon`.
pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

pub fn date_label(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// File: ./src/model/mod.rs
pub mod csv;
pub mod display;
pub mod event;
pub mod layout;

pub use event::{CalendarEvent, REQUIRED_COLUMNS, parse_events, rows_to_events};
pub use layout::{DayColumn, HourRange, PlacedEvent, Placement, WeekView};

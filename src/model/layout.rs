// File: ./src/model/layout.rs
//! Week-grid arithmetic.
//!
//! Everything here is a pure function of the event list (plus "today" when the
//! list is empty), so a view can be rebuilt from scratch on every change.
use crate::color_utils::{Hsl, title_color};
use crate::model::CalendarEvent;
use chrono::{Datelike, Days, NaiveDate, Timelike};

pub const DEFAULT_MIN_HOUR: u32 = 8;
pub const DEFAULT_MAX_HOUR: u32 = 18;
/// The grid always reaches at least this hour at the bottom when events exist.
pub const LATEST_MIN_END_HOUR: u32 = 17;
pub const MIN_HEIGHT_PCT: f64 = 2.0;
pub const STACK_DEPTH: usize = 3;
pub const STACK_OFFSET_PX: u32 = 4;
pub const PX_PER_HOUR: u32 = 60;

/// Half-open `[min, max)` hour interval shown by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    pub min: u32,
    pub max: u32,
}

impl Default for HourRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_HOUR,
            max: DEFAULT_MAX_HOUR,
        }
    }
}

impl HourRange {
    pub fn len(&self) -> u32 {
        self.max.saturating_sub(self.min)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total_minutes(&self) -> u32 {
        self.len() * 60
    }

    /// One entry per hour row.
    pub fn hours(&self) -> impl Iterator<Item = u32> {
        self.min..self.max
    }

    pub fn grid_height_px(&self) -> u32 {
        self.len() * PX_PER_HOUR
    }
}

/// Position of an event inside its day column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Offset from the top of the grid, percent of its height.
    pub top_pct: f64,
    /// Percent of the grid height, never below [`MIN_HEIGHT_PCT`].
    pub height_pct: f64,
    /// Extra left inset so neighbouring events in a day do not fully cover each other.
    pub left_offset_px: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedEvent {
    pub event: CalendarEvent,
    pub placement: Placement,
    pub color: Hsl,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub events: Vec<PlacedEvent>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekView {
    pub anchor: NaiveDate,
    pub hours: HourRange,
    pub days: Vec<DayColumn>,
}

/// Monday of the week holding the first event, or of `today`'s week.
///
/// At the very start of the calendar range, where that Monday does not exist,
/// the base date itself anchors the week.
pub fn week_anchor(events: &[CalendarEvent], today: NaiveDate) -> NaiveDate {
    let base = events.first().map(|ev| ev.start.date()).unwrap_or(today);
    // Sunday = 0 .. Saturday = 6
    let weekday = base.weekday().num_days_from_sunday();
    let diff_to_monday = (weekday + 6) % 7;
    base.checked_sub_days(Days::new(diff_to_monday as u64))
        .unwrap_or(base)
}

/// Seven consecutive days from `anchor`, cut short at the end of the calendar range.
pub fn week_days(anchor: NaiveDate) -> Vec<NaiveDate> {
    (0..7)
        .map_while(|i| anchor.checked_add_days(Days::new(i)))
        .collect()
}

pub fn visible_hours(events: &[CalendarEvent]) -> HourRange {
    if events.is_empty() {
        return HourRange::default();
    }
    let mut min_h = 24;
    let mut max_h = 0;
    for ev in events {
        min_h = min_h.min(ev.start.hour());
        let round_up = if ev.end.minute() > 0 { 1 } else { 0 };
        max_h = max_h.max(ev.end.hour() + round_up);
    }
    HourRange {
        min: min_h.min(DEFAULT_MIN_HOUR),
        max: max_h.max(LATEST_MIN_END_HOUR),
    }
}

/// `index_in_day` is the event's position among the events of its day.
pub fn place(event: &CalendarEvent, hours: HourRange, index_in_day: usize) -> Placement {
    let total = hours.total_minutes() as f64;
    let minutes_since_min = |hour: u32, minute: u32| {
        (hour as i64 - hours.min as i64) * 60 + minute as i64
    };
    let start_minutes = minutes_since_min(event.start.hour(), event.start.minute());
    let end_minutes = minutes_since_min(event.end.hour(), event.end.minute());

    let (top_pct, height_pct) = if total > 0.0 {
        (
            start_minutes as f64 / total * 100.0,
            ((end_minutes - start_minutes) as f64 / total * 100.0).max(MIN_HEIGHT_PCT),
        )
    } else {
        (0.0, MIN_HEIGHT_PCT)
    };

    Placement {
        top_pct,
        height_pct,
        left_offset_px: (index_in_day % STACK_DEPTH) as u32 * STACK_OFFSET_PX,
    }
}

/// Events starting on `day`, in list order.
pub fn events_on(events: &[CalendarEvent], day: NaiveDate) -> impl Iterator<Item = &CalendarEvent> {
    events.iter().filter(move |ev| ev.start.date() == day)
}

pub fn layout_week(events: &[CalendarEvent], today: NaiveDate) -> WeekView {
    let anchor = week_anchor(events, today);
    let hours = visible_hours(events);
    let days = week_days(anchor)
        .into_iter()
        .map(|date| DayColumn {
            date,
            events: events_on(events, date)
                .enumerate()
                .map(|(idx, ev)| PlacedEvent {
                    event: ev.clone(),
                    placement: place(ev, hours, idx),
                    color: title_color(&ev.title),
                })
                .collect(),
        })
        .collect();

    WeekView {
        anchor,
        hours,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(date: &str, start: &str, end: &str) -> CalendarEvent {
        let at = |t: &str| {
            chrono::NaiveDateTime::parse_from_str(&format!("{}T{}:00", date, t), "%Y-%m-%dT%H:%M:%S")
                .unwrap()
        };
        CalendarEvent {
            title: "x".to_string(),
            start: at(start),
            end: at(end),
        }
    }

    #[test]
    fn end_minutes_round_the_range_up() {
        let hours = visible_hours(&[ev("2024-05-06", "07:15", "18:01")]);
        assert_eq!(hours, HourRange { min: 7, max: 19 });
    }

    #[test]
    fn end_on_the_hour_is_not_rounded() {
        let hours = visible_hours(&[ev("2024-05-06", "09:00", "18:00")]);
        assert_eq!(hours, HourRange { min: 8, max: 18 });
    }

    #[test]
    fn short_days_still_reach_five_pm() {
        let hours = visible_hours(&[ev("2024-05-06", "09:00", "10:00")]);
        assert_eq!(hours, HourRange { min: 8, max: 17 });
    }

    #[test]
    fn dates_at_the_calendar_edges_do_not_panic() {
        let late = crate::model::parse_events(
            "Subject,Start Date,Start Time,End Date,End Time\n\
             X,+262142-12-31,09:00,+262142-12-31,10:00",
        );
        assert_eq!(late.len(), 1);
        let week = layout_week(&late, NaiveDate::MIN);
        // The last representable day is a Monday: a one-day week.
        assert_eq!(week.days.len(), 1);
        assert_eq!(week.days.last().map(|d| d.date), Some(NaiveDate::MAX));
        assert_eq!(week.days.last().map(|d| d.events.len()), Some(1));

        let early = vec![ev("-262143-01-01", "09:00", "10:00")];
        let week = layout_week(&early, NaiveDate::MIN);
        assert_eq!(week.anchor, NaiveDate::MIN);
        assert_eq!(week.days.len(), 7);
        assert_eq!(week.days[0].events.len(), 1);
    }

    #[test]
    fn grid_is_sixty_px_per_hour() {
        assert_eq!(HourRange::default().grid_height_px(), 600);
        assert_eq!(HourRange::default().hours().count(), 10);
    }
}

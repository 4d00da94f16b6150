// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::model::WeekView;
use crate::viewer::ViewerState;
use chrono::NaiveDate;

/// What the UI loop draws from. `viewer` is a copy of the network actor's
/// state, replaced wholesale on every `AppEvent::Loaded`.
pub struct AppState {
    pub viewer: ViewerState,
    pub message: String,
    pub loading: bool,
    pub show_full_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            viewer: ViewerState::new(),
            message: "Loading...".to_string(),
            loading: true,
            show_full_help: false,
        }
    }

    pub fn week(&self, today: NaiveDate) -> WeekView {
        self.viewer.week(today)
    }

    pub fn run_label(&self) -> &str {
        self.viewer.selected_run.as_deref().unwrap_or("(no runs)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_shows_current_week() {
        let state = AppState::new();
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(); // a Sunday
        let week = state.week(today);
        assert_eq!(week.anchor, NaiveDate::from_ymd_opt(2026, 10, 12).unwrap());
        assert_eq!(week.days.len(), 7);
        assert_eq!(state.run_label(), "(no runs)");
    }
}

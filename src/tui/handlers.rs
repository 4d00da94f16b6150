// File: src/tui/handlers.rs
// Handles keyboard input and network events for the TUI.
use crate::tui::action::{Action, AppEvent};
use crate::tui::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_app_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Status(s) => state.message = s,
        AppEvent::Error(s) => {
            state.message = format!("Error: {}", s);
            state.loading = false;
        }
        AppEvent::Loaded(viewer) => {
            state.viewer = viewer;
            state.loading = false;
        }
    }
}

/// Maps a key press to an action for the network actor, if any.
///
/// Navigation is sent even at the ends of the file list; the viewer ignores
/// out-of-range moves.
pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Next),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Previous),
        KeyCode::Char('r') => state
            .viewer
            .neighbour_run(1)
            .map(|run| Action::SelectRun(run.to_string())),
        KeyCode::Char('R') => state
            .viewer
            .neighbour_run(-1)
            .map(|run| Action::SelectRun(run.to_string())),
        KeyCode::Char('?') => {
            state.show_full_help = !state.show_full_help;
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::ViewerState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_navigate() {
        let mut state = AppState::new();
        assert_eq!(handle_key_event(press(KeyCode::Right), &mut state), Some(Action::Next));
        assert_eq!(
            handle_key_event(press(KeyCode::Left), &mut state),
            Some(Action::Previous)
        );
        assert_eq!(handle_key_event(press(KeyCode::Char('q')), &mut state), Some(Action::Quit));
    }

    #[test]
    fn run_keys_cycle_through_runs() {
        let mut state = AppState::new();
        assert_eq!(handle_key_event(press(KeyCode::Char('r')), &mut state), None);

        state.viewer = ViewerState {
            runs: vec!["new".into(), "old".into()],
            selected_run: Some("new".into()),
            ..Default::default()
        };
        assert_eq!(
            handle_key_event(press(KeyCode::Char('r')), &mut state),
            Some(Action::SelectRun("old".into()))
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('R')), &mut state),
            Some(Action::SelectRun("old".into()))
        );
    }

    #[test]
    fn loaded_snapshot_replaces_viewer() {
        let mut state = AppState::new();
        let snapshot = ViewerState {
            runs: vec!["r1".into()],
            selected_run: Some("r1".into()),
            files: vec!["output1.csv".into()],
            ..Default::default()
        };
        handle_app_event(&mut state, AppEvent::Loaded(snapshot.clone()));
        assert_eq!(state.viewer, snapshot);
        assert!(!state.loading);

        handle_app_event(&mut state, AppEvent::Error("boom".into()));
        assert_eq!(state.message, "Error: boom");
        assert_eq!(state.viewer, snapshot);
    }

    #[test]
    fn help_toggles_locally() {
        let mut state = AppState::new();
        assert_eq!(handle_key_event(press(KeyCode::Char('?')), &mut state), None);
        assert!(state.show_full_help);
    }
}

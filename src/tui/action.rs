// Defines actions and events for TUI interaction and state updates.
use crate::viewer::ViewerState;

/// Requests from the UI loop to the network actor.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Initialize,
    SelectRun(String),
    Next,
    Previous,
    Quit,
}

/// Replies from the network actor.
#[derive(Debug)]
pub enum AppEvent {
    /// The viewer state after an action completed.
    Loaded(ViewerState),
    Error(String),
    Status(String),
}

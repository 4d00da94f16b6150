// Runs every viewer operation for the TUI, one at a time.
use crate::source::ScheduleSource;
use crate::tui::action::{Action, AppEvent};
use crate::viewer::ViewerState;
use std::sync::Arc;
use tokio::sync::mpsc::{Receiver, Sender};

/// Owns the authoritative `ViewerState`.
///
/// Actions are applied in the order they were sent and each one finishes
/// before the next starts, so a slow response can never overwrite a newer one.
/// After every action the UI gets a full snapshot, even when the action failed
/// half-way (the snapshot then shows how far it got).
pub async fn run_network_actor(
    source: Arc<dyn ScheduleSource>,
    mut action_rx: Receiver<Action>,
    event_tx: Sender<AppEvent>,
) {
    let mut viewer = ViewerState::new();

    while let Some(action) = action_rx.recv().await {
        let src = source.as_ref();
        let result = match &action {
            Action::Quit => break,
            Action::Initialize => {
                let _ = event_tx
                    .send(AppEvent::Status(format!("Loading {}...", src.describe())))
                    .await;
                viewer.initialize(src).await
            }
            Action::SelectRun(run) => viewer.select_run(src, run).await,
            Action::Next => viewer.next(src).await,
            Action::Previous => viewer.previous(src).await,
        };

        let _ = event_tx.send(AppEvent::Loaded(viewer.clone())).await;
        match result {
            Ok(()) => {
                let status = match (&viewer.selected_run, viewer.current_file()) {
                    (Some(run), Some(file)) => format!("{} / {}", run, file),
                    (Some(run), None) => format!("{}: no exports", run),
                    (None, _) => "No runs found.".to_string(),
                };
                let _ = event_tx.send(AppEvent::Status(status)).await;
            }
            Err(e) => {
                log::error!("{:?} failed: {:#}", action, e);
                let _ = event_tx.send(AppEvent::Error(format!("{:#}", e))).await;
            }
        }
    }
    log::debug!("Network actor stopped");
}

// File: ./src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod handlers;
pub mod network;
pub mod state;
pub mod view;

use crate::source::ScheduleSource;
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc;

pub async fn run(source: Arc<dyn ScheduleSource>) -> Result<()> {
    // Panic Hook: restore the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        log::error!("PANIC: {}", info);
        default_hook(info);
    }));

    // --- 1. TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // --- 2. STATE INIT ---
    let mut app_state = AppState::new();
    let (action_tx, action_rx) = mpsc::channel(10);
    let (event_tx, mut event_rx) = mpsc::channel(10);

    // --- 3. NETWORK TASK ---
    let actor = tokio::spawn(network::run_network_actor(source, action_rx, event_tx));
    let _ = action_tx.send(Action::Initialize).await;

    // --- 4. UI LOOP ---
    let loop_result: Result<()> = async {
        loop {
            terminal.draw(|f| draw(f, &app_state))?;

            // A. Network Events
            while let Ok(event) = event_rx.try_recv() {
                handlers::handle_app_event(&mut app_state, event);
            }

            // B. Input Events
            if event::poll(Duration::from_millis(50))?
                && let Event::Key(key) = event::read()?
            {
                // Filter out KeyRelease events to prevent double input on Windows
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if let Some(action) = handlers::handle_key_event(key, &mut app_state) {
                    if action == Action::Quit {
                        break;
                    }
                    let _ = action_tx.send(action).await;
                }
            }
        }
        Ok(())
    }
    .await;

    // --- 5. CLEANUP ---
    // An in-flight fetch has no timeout; do not wait for it.
    actor.abort();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    loop_result
}

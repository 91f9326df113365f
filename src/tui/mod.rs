//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! 1. `Ctrl+C` quits from anywhere.
//! 2. An open error dialog captures everything else until dismissed.
//! 3. Tab / Shift+Tab / Esc / Ctrl+R are app-level.
//! 4. On the Goals tab the rest goes to the string array input.
//!
//! Change notifications from the goals editor and results of background
//! fetches both arrive on one `mpsc` channel and go through `update()`.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::api::{SandboxClient, TransactionSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::settings::SettingsTab;
use crate::core::state::{App, ErrorReport};
use crate::tui::component::EventHandler;
use crate::tui::components::{DialogEvent, ErrorDialog, StringArrayInput, StringArrayInputState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub goals_input: StringArrayInputState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            goals_input: StringArrayInputState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Keyboard enhancement lets us see Ctrl+Enter as its own chord.
        // Terminals without it ignore the request and send Ctrl+J instead.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste
        );
    }
}

pub fn run(config: ResolvedConfig, startup_error: Option<ErrorReport>) -> std::io::Result<()> {
    let source: Arc<dyn TransactionSource> = Arc::new(SandboxClient::new(config.sandbox.clone()));
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    // Channel for actions from the goals listener and background tasks
    let (tx, rx) = mpsc::channel();

    let goals_tx = tx.clone();
    app.goals.on_change(move |entries| {
        if goals_tx.send(Action::GoalsChanged(entries)).is_err() {
            warn!("Failed to forward goals change: receiver dropped");
        }
    });

    if let Some(report) = startup_error {
        update(&mut app, Action::ReportError(report));
    }

    let mut terminal = ratatui::init();
    let result = restoring(
        || {
            let _terminal_mode_guard = TerminalModeGuard::new()?;
            event_loop(&mut terminal, &mut app, &mut tui, &source, &tx, &rx)
        },
        ratatui::restore,
    );

    info!("Pocketbook exiting with {} goals", app.saved_goals.len());
    result
}

/// Run `body`, then `restore` whether or not it failed.
fn restoring<T>(
    body: impl FnOnce() -> std::io::Result<T>,
    restore: impl FnOnce(),
) -> std::io::Result<T> {
    let result = body();
    if let Err(e) = &result {
        warn!("TUI stopped with error: {}", e);
    }
    restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    source: &Arc<dyn TransactionSource>,
    tx: &mpsc::Sender<Action>,
    rx: &mpsc::Receiver<Action>,
) -> std::io::Result<()> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain everything pending before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&event, app, tui) {
                match update(app, action) {
                    Effect::Quit => return Ok(()),
                    Effect::SpawnFetch => spawn_fetch(Arc::clone(source), tx.clone()),
                    Effect::None => {}
                }
            }
        }

        // Goals notifications and fetch results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(app, action) {
                Effect::Quit => return Ok(()),
                Effect::SpawnFetch => spawn_fetch(Arc::clone(source), tx.clone()),
                Effect::None => {}
            }
        }
    }
}

/// Decide what a single event means in the current mode.
///
/// Editor input is applied directly to `app.goals`; only app-level
/// consequences come back as an `Action`.
fn route_event(event: &TuiEvent, app: &mut App, tui: &mut TuiState) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    if let Some(report) = &app.error {
        return match ErrorDialog::new(report).handle_event(event) {
            Some(DialogEvent::Dismiss) => Some(Action::DismissError),
            None => None,
        };
    }

    match event {
        TuiEvent::Resize => None,
        TuiEvent::Escape => Some(Action::Quit),
        TuiEvent::NextTab => Some(Action::NextTab),
        TuiEvent::PrevTab => Some(Action::PrevTab),
        TuiEvent::FetchTransactions if app.active_tab == SettingsTab::Sandbox => {
            Some(Action::FetchTransactions)
        }
        _ if app.active_tab == SettingsTab::Goals => {
            let outcome =
                StringArrayInput::new(&mut app.goals, &mut tui.goals_input).handle_event(event);
            debug!("Goals input: {:?}", outcome);
            None
        }
        _ => None,
    }
}

fn spawn_fetch(source: Arc<dyn TransactionSource>, tx: mpsc::Sender<Action>) {
    info!("Spawning transaction fetch via {}", source.name());
    tokio::spawn(async move {
        let action = match source.fetch_transactions().await {
            Ok(transactions) => Action::TransactionsLoaded(transactions),
            Err(e) => Action::FetchFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
}

//! Application state and core logic

use crate::api::CustomerApi;
use crate::bridge::{self, Command, Outcome};
use crate::state::{Panel, ViewState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Map a Ctrl+key shortcut to the command it triggers on the focused panel
pub fn command_for_key(panel: Panel, c: char) -> Option<Command> {
    let command = match (panel, c.to_ascii_lowercase()) {
        (Panel::Customer, 'n') => Command::CreateCustomer,
        (Panel::Customer, 'r') => Command::RetrieveCustomer,
        (Panel::Customer, 'u') => Command::UpdateCustomer,
        (Panel::Customer, 'd') => Command::DeleteCustomer,
        (Panel::Customer, 'f') => Command::SearchCustomers,
        (Panel::Customer, 'x') => Command::ClearCustomer,
        (Panel::Customer, 'p') => Command::QueryByPrefix,
        (Panel::Customer, 'l') => Command::LockCustomer,
        (Panel::Customer, 'k') => Command::UnlockCustomer,
        (Panel::Address, 'n') => Command::CreateAddress,
        (Panel::Address, 'r') => Command::RetrieveAddress,
        (Panel::Address, 'u') => Command::UpdateAddress,
        (Panel::Address, 'd') => Command::DeleteAddress,
        (Panel::Address, 'f') => Command::SearchAddresses,
        (Panel::Address, 'x') => Command::ClearAddress,
        _ => return None,
    };
    Some(command)
}

/// Main application struct
pub struct App {
    /// Everything on screen
    pub view: ViewState,
    /// Customers service client
    api: Arc<dyn CustomerApi>,
    /// Completed requests, in arrival order
    outcome_tx: UnboundedSender<Outcome>,
    outcome_rx: UnboundedReceiver<Outcome>,
    /// Requests sent but not yet applied
    pub in_flight: usize,
    /// Service root shown in the status bar
    pub service_root: String,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(api: Arc<dyn CustomerApi>, service_root: impl Into<String>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            view: ViewState::new(),
            api,
            outcome_tx,
            outcome_rx,
            in_flight: 0,
            service_root: service_root.into(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('t') => self.view.toggle_panel(),
                KeyCode::Char(c) => {
                    if let Some(command) = command_for_key(self.view.focus, c) {
                        self.run_command(command);
                    }
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => self.view.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.view.prev_field(),
            KeyCode::Esc => self.view.flash = None,
            KeyCode::Backspace => self.view.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                self.view.input_char(c)
            }
            _ => {}
        }
    }

    /// Plan a command against the view and send its request, if any, on its
    /// own task. The completion is applied later by [`App::drain_outcomes`].
    pub fn run_command(&mut self, command: Command) {
        tracing::info!("Running {}", command.label());
        let Some(request) = bridge::dispatch(command, &mut self.view) else {
            return;
        };

        let api = Arc::clone(&self.api);
        let tx = self.outcome_tx.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let outcome = request.execute(api.as_ref()).await;
            if tx.send(outcome).is_err() {
                tracing::debug!("App closed before {command:?} completed");
            }
        });
    }

    fn apply(&mut self, outcome: Outcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if !outcome.is_success() {
            tracing::debug!("Applying failed outcome");
        }
        outcome.apply(&mut self.view);
    }

    /// Apply every completion that has arrived; returns how many were applied
    pub fn drain_outcomes(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply(outcome);
            applied += 1;
        }
        applied
    }

    /// Wait for the next completion and apply it
    #[cfg(test)]
    async fn wait_for_outcome(&mut self) {
        if let Some(outcome) = self.outcome_rx.recv().await {
            self.apply(outcome);
        }
    }
}

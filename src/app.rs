//! Interactive session.
//!
//! ```text
//! App::run (select! loop)            per-submission task (tokio::spawn)
//!   ├─ crossterm EventStream           └─ checker.check(symptoms)
//!   ├─ msg_rx.recv()  <─────────────────── AppMessage::Checked
//!   └─ tick
//! ```

use crate::checker::{resolve_message, CheckMessage, SymptomChecker};
use crate::config::Config;
use crate::state::{BackendStatus, Submission, UiState};
use crate::ui::{
    self,
    keys::{Action, KeyHandler},
};
use anyhow::Result;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    Checked(CheckMessage),
    Backend(BackendStatus),
}

pub struct App {
    config: Config,
    checker: Arc<dyn SymptomChecker>,
    state: UiState,
    msg_tx: mpsc::UnboundedSender<AppMessage>,
    msg_rx: mpsc::UnboundedReceiver<AppMessage>,
}

impl App {
    pub fn new(config: Config, checker: Arc<dyn SymptomChecker>) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        Self {
            config,
            checker,
            state: UiState::new(),
            msg_tx,
            msg_rx,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub async fn run(&mut self) -> Result<()> {
        // Hook first, so a panic anywhere below still restores the terminal.
        let original_hook = Arc::new(std::panic::take_hook());
        let chained = Arc::clone(&original_hook);
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            (**chained)(info);
        }));

        let result = match enter_terminal() {
            Ok(mut terminal) => {
                tracing::info!(endpoint = %self.config.backend.endpoint, "session started");
                self.probe_backend();

                let result = self.event_loop(&mut terminal).await;
                restore_terminal();
                result.and_then(|()| Ok(terminal.show_cursor()?))
            }
            Err(e) => {
                restore_terminal();
                Err(e)
            }
        };

        let _ = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| (**original_hook)(info)));

        if self.state.pending() > 0 {
            tracing::info!(pending = self.state.pending(), "leaving with checks in flight");
        }
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            let size = terminal.size()?;
            let limit =
                ui::result_scroll_limit(&self.state, Rect::new(0, 0, size.width, size.height));
            self.state.set_scroll_limit(limit);

            let title = self.config.general.title.as_str();
            terminal.draw(|frame| ui::render(frame, &self.state, title))?;

            if self.state.should_quit {
                return Ok(());
            }

            tokio::select! {
                Some(event) = events.next() => {
                    if let Event::Key(key) = event? {
                        let action = KeyHandler::handle(&self.state, key);
                        self.apply(action);
                    }
                }
                Some(msg) = self.msg_rx.recv() => {
                    self.handle_message(msg);
                }
                _ = tick.tick() => {}
            }
        }
    }

    pub fn apply(&mut self, action: Action) {
        let policy = self.config.general.exit_warning;
        match action {
            Action::InsertChar(c) => self.state.push_char(c),
            Action::DeleteChar => self.state.pop_char(),
            Action::Submit => {
                if let Submission::Dispatched { ticket, symptoms } = self.state.submit() {
                    self.dispatch(ticket, symptoms);
                }
            }
            Action::ReturnToInput => self.state.return_to_input(),
            Action::RequestQuit => {
                self.state.request_exit(policy);
            }
            Action::ConfirmExit => self.state.answer_exit_prompt(true),
            Action::CancelExit => self.state.answer_exit_prompt(false),
            Action::DismissAlert => self.state.dismiss_alert(),
            Action::ScrollUp => self.state.scroll_up(),
            Action::ScrollDown => self.state.scroll_down(),
            Action::None => {}
        }
    }

    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Checked(checked) => self.state.settle(checked),
            AppMessage::Backend(status) => self.state.backend = status,
        }
    }

    /// Wait for the next message from a background task.
    pub async fn next_message(&mut self) -> Option<AppMessage> {
        self.msg_rx.recv().await
    }

    fn dispatch(&self, ticket: u64, symptoms: String) {
        let checker = Arc::clone(&self.checker);
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            let outcome = checker.check(&symptoms).await;
            let message = resolve_message(&outcome);
            let _ = tx.send(AppMessage::Checked(CheckMessage { ticket, message }));
        });
    }

    fn probe_backend(&self) {
        let checker = Arc::clone(&self.checker);
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            let probe = checker.health().await;
            if let Err(ref e) = probe {
                tracing::warn!(error = %e, "backend health probe failed");
            }
            let _ = tx.send(AppMessage::Backend(BackendStatus::from_probe(probe)));
        });
    }
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leave raw mode and the alternate screen. Safe to call when only part of
/// the setup happened.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!(error = %e, "failed to disable raw mode");
    }
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

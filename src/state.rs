//! Screen state for the checker and the transitions that change it.
//!
//! Rendering reads this state and never mutates it; every change goes
//! through one of the methods below.

use crate::checker::{CheckMessage, HealthReport, EMPTY_INPUT_WARNING, LOADING_MESSAGE};
use crate::config::ExitWarning;

pub const EXIT_WARNING_MESSAGE: &str = "Are you sure you want to leave? Your result will be lost.";

/// Which of the two mutually exclusive regions is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Input,
    Result,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online {
        mock: bool,
    },
    Offline,
}

impl BackendStatus {
    pub fn from_probe<E>(probe: Result<HealthReport, E>) -> Self {
        match probe {
            Ok(report) => Self::Online {
                mock: report.use_mock,
            },
            Err(_) => Self::Offline,
        }
    }
}

/// What a submit attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Empty input; a warning is up and nothing else changed.
    Rejected,
    /// The caller must send `symptoms` and settle `ticket` with the reply.
    Dispatched { ticket: u64, symptoms: String },
}

/// Outcome of asking to quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitRequest {
    Quit,
    Prompted,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub display_mode: DisplayMode,
    /// Text in the symptoms field.
    pub query: String,
    pub result_message: String,
    /// Blocking warning; swallows input until dismissed.
    pub alert: Option<String>,
    pub exit_prompt: bool,
    pub should_quit: bool,
    pub backend: BackendStatus,
    pub result_scroll: u16,
    /// Furthest the result can scroll at the current screen size.
    scroll_limit: u16,
    pending: usize,
    next_ticket: u64,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    pub fn submit(&mut self) -> Submission {
        let symptoms = self.query.trim();
        if symptoms.is_empty() {
            self.alert = Some(EMPTY_INPUT_WARNING.to_string());
            return Submission::Rejected;
        }
        let symptoms = symptoms.to_string();

        self.display_mode = DisplayMode::Result;
        self.result_message = LOADING_MESSAGE.to_string();
        self.result_scroll = 0;
        self.pending += 1;
        self.next_ticket += 1;

        Submission::Dispatched {
            ticket: self.next_ticket,
            symptoms,
        }
    }

    /// Write the settled message for a submission.
    ///
    /// Overlapping submissions are not guarded: whichever settles last owns
    /// the result text, whether or not the result region is showing.
    pub fn settle(&mut self, msg: CheckMessage) {
        if msg.ticket == 0 || msg.ticket > self.next_ticket {
            tracing::warn!(ticket = msg.ticket, "ignoring message for unknown ticket");
            return;
        }
        self.pending = self.pending.saturating_sub(1);
        self.result_message = msg.message;
        self.result_scroll = 0;
    }

    pub fn return_to_input(&mut self) {
        self.query.clear();
        self.display_mode = DisplayMode::Input;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn should_warn_on_exit(&self, policy: ExitWarning) -> bool {
        match policy {
            ExitWarning::Always => true,
            ExitWarning::Never => false,
            ExitWarning::Result => self.display_mode == DisplayMode::Result,
        }
    }

    pub fn request_exit(&mut self, policy: ExitWarning) -> ExitRequest {
        if self.should_warn_on_exit(policy) {
            self.exit_prompt = true;
            ExitRequest::Prompted
        } else {
            self.should_quit = true;
            ExitRequest::Quit
        }
    }

    pub fn answer_exit_prompt(&mut self, leave: bool) {
        self.exit_prompt = false;
        if leave {
            self.should_quit = true;
        }
    }

    pub fn scroll_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.result_scroll = self.result_scroll.saturating_add(1).min(self.scroll_limit);
    }

    /// Record how far the result can scroll; set before every draw since
    /// the limit depends on the message and the terminal size.
    pub fn set_scroll_limit(&mut self, limit: u16) {
        self.scroll_limit = limit;
        self.result_scroll = self.result_scroll.min(limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_query(text: &str) -> UiState {
        let mut state = UiState::new();
        state.query = text.to_string();
        state
    }

    #[test]
    fn test_initial_state() {
        let state = UiState::new();
        assert_eq!(state.display_mode, DisplayMode::Input);
        assert!(state.alert.is_none());
        assert_eq!(state.pending(), 0);
    }

    #[test]
    fn test_blank_submit_warns_once_and_stays() {
        for text in ["", "   ", "\t\n "] {
            let mut state = with_query(text);
            assert_eq!(state.submit(), Submission::Rejected);
            assert_eq!(state.display_mode, DisplayMode::Input);
            assert_eq!(state.alert.as_deref(), Some("Please enter your symptoms."));
            assert_eq!(state.pending(), 0);
            assert_eq!(state.result_message, "");
        }
    }

    #[test]
    fn test_submit_switches_to_result_with_placeholder() {
        let mut state = with_query("  headache and fever \n");
        let submission = state.submit();

        assert_eq!(
            submission,
            Submission::Dispatched {
                ticket: 1,
                symptoms: "headache and fever".to_string()
            }
        );
        assert_eq!(state.display_mode, DisplayMode::Result);
        assert_eq!(state.result_message, "⏳ Analyzing your symptoms...");
        assert_eq!(state.pending(), 1);
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_settle_writes_message() {
        let mut state = with_query("cough");
        let Submission::Dispatched { ticket, .. } = state.submit() else {
            panic!("expected dispatch");
        };
        state.settle(CheckMessage {
            ticket,
            message: "Drink water".to_string(),
        });
        assert_eq!(state.result_message, "Drink water");
        assert_eq!(state.pending(), 0);
    }

    #[test]
    fn test_unknown_ticket_ignored() {
        let mut state = UiState::new();
        state.settle(CheckMessage {
            ticket: 7,
            message: "stray".to_string(),
        });
        assert_eq!(state.result_message, "");
    }

    #[test]
    fn test_last_settled_wins() {
        let mut state = with_query("first");
        state.submit();
        state.return_to_input();
        state.query = "second".to_string();
        state.submit();
        assert_eq!(state.pending(), 2);

        state.settle(CheckMessage {
            ticket: 2,
            message: "second answer".to_string(),
        });
        state.settle(CheckMessage {
            ticket: 1,
            message: "first answer".to_string(),
        });
        assert_eq!(state.result_message, "first answer");
        assert_eq!(state.pending(), 0);
    }

    #[test]
    fn test_return_to_input_clears_query() {
        let mut state = with_query("rash");
        state.submit();
        state.return_to_input();
        assert_eq!(state.display_mode, DisplayMode::Input);
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_return_to_input_from_input_and_twice() {
        let mut state = with_query("typing");
        state.return_to_input();
        let once = (state.display_mode, state.query.clone());
        state.return_to_input();
        assert_eq!((state.display_mode, state.query.clone()), once);
        assert_eq!(once, (DisplayMode::Input, String::new()));
    }

    #[test]
    fn test_exit_warning_policies() {
        let mut state = UiState::new();
        assert!(!state.should_warn_on_exit(ExitWarning::Result));
        assert!(state.should_warn_on_exit(ExitWarning::Always));

        state.query = "nausea".to_string();
        state.submit();
        assert!(state.should_warn_on_exit(ExitWarning::Result));
        assert!(!state.should_warn_on_exit(ExitWarning::Never));
    }

    #[test]
    fn test_request_exit_prompts_then_quits() {
        let mut state = with_query("nausea");
        state.submit();

        assert_eq!(state.request_exit(ExitWarning::Result), ExitRequest::Prompted);
        assert!(state.exit_prompt);
        assert!(!state.should_quit);

        state.answer_exit_prompt(false);
        assert!(!state.exit_prompt);
        assert!(!state.should_quit);
        assert_eq!(state.display_mode, DisplayMode::Result);

        state.request_exit(ExitWarning::Result);
        state.answer_exit_prompt(true);
        assert!(state.should_quit);
    }

    #[test]
    fn test_request_exit_on_input_quits() {
        let mut state = UiState::new();
        assert_eq!(state.request_exit(ExitWarning::Result), ExitRequest::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn test_backend_status_from_probe() {
        let ok: Result<HealthReport, ()> = Ok(HealthReport {
            message: "running".to_string(),
            use_mock: true,
        });
        assert_eq!(
            BackendStatus::from_probe(ok),
            BackendStatus::Online { mock: true }
        );
        assert_eq!(
            BackendStatus::from_probe::<()>(Err(())),
            BackendStatus::Offline
        );
    }

    #[test]
    fn test_scroll_saturates() {
        let mut state = UiState::new();
        state.set_scroll_limit(10);
        state.scroll_up();
        assert_eq!(state.result_scroll, 0);
        state.scroll_down();
        state.scroll_down();
        state.scroll_up();
        assert_eq!(state.result_scroll, 1);
    }

    #[test]
    fn test_scroll_down_stops_at_limit() {
        let mut state = UiState::new();
        state.set_scroll_limit(3);
        for _ in 0..50 {
            state.scroll_down();
        }
        assert_eq!(state.result_scroll, 3);
        state.scroll_up();
        assert_eq!(state.result_scroll, 2);
    }

    #[test]
    fn test_shrinking_limit_pulls_scroll_back() {
        let mut state = UiState::new();
        state.set_scroll_limit(8);
        for _ in 0..8 {
            state.scroll_down();
        }
        state.set_scroll_limit(2);
        assert_eq!(state.result_scroll, 2);
    }
}

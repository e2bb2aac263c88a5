use crate::state::{DisplayMode, UiState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User action derived from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    InsertChar(char),
    DeleteChar,
    Submit,
    /// "Close" and "Check Another" both map here.
    ReturnToInput,
    RequestQuit,
    ConfirmExit,
    CancelExit,
    DismissAlert,
    ScrollUp,
    ScrollDown,
    None,
}

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(state: &UiState, key: KeyEvent) -> Action {
        if key.kind == KeyEventKind::Release {
            return Action::None;
        }

        // Dialogs are modal: nothing reaches the screen underneath.
        if state.alert.is_some() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Action::DismissAlert,
                _ => Action::None,
            };
        }

        if state.exit_prompt {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::ConfirmExit,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::CancelExit,
                _ => Action::None,
            };
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::RequestQuit;
        }

        match state.display_mode {
            DisplayMode::Input => Self::handle_input(key),
            DisplayMode::Result => Self::handle_result(key),
        }
    }

    fn handle_input(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::Submit,
            KeyCode::Backspace => Action::DeleteChar,
            KeyCode::Esc => Action::RequestQuit,
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Action::InsertChar(c)
            }
            _ => Action::None,
        }
    }

    fn handle_result(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Action::ReturnToInput,
            KeyCode::Char('a') | KeyCode::Char('A') => Action::ReturnToInput,
            KeyCode::Char('q') | KeyCode::Esc => Action::RequestQuit,
            KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown,
            _ => Action::None,
        }
    }
}

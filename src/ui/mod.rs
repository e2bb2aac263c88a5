pub mod keys;
pub mod widgets;

use crate::state::{DisplayMode, UiState, EXIT_WARNING_MESSAGE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use widgets::{Dialog, HeaderWidget, InputPanel, ResultPanel};

struct ScreenLayout {
    header: Rect,
    body: Rect,
    footer: Rect,
}

impl ScreenLayout {
    fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            footer: chunks[2],
        }
    }
}

/// Draw `state`. Exactly one of the input and result regions is drawn.
pub fn render(frame: &mut Frame, state: &UiState, title: &str) {
    let layout = ScreenLayout::compute(frame.area());

    frame.render_widget(HeaderWidget::new(title, state), layout.header);

    match state.display_mode {
        DisplayMode::Input => frame.render_widget(InputPanel::new(state), layout.body),
        DisplayMode::Result => frame.render_widget(ResultPanel::new(state), layout.body),
    }

    frame.render_widget(footer(state), layout.footer);

    if let Some(ref alert) = state.alert {
        frame.render_widget(Dialog::alert(alert), frame.area());
    } else if state.exit_prompt {
        frame.render_widget(Dialog::confirm(EXIT_WARNING_MESSAGE), frame.area());
    }
}

/// Scroll limit of the result region for a screen of size `area`.
pub fn result_scroll_limit(state: &UiState, area: Rect) -> u16 {
    let layout = ScreenLayout::compute(area);
    widgets::result_panel::scroll_limit(&state.result_message, layout.body)
}

fn footer(state: &UiState) -> Paragraph<'static> {
    let hints = match state.display_mode {
        DisplayMode::Input => "Enter: Check | Esc: Quit",
        DisplayMode::Result => "c: Close | a: Check Another | ↑/↓: Scroll | q: Quit",
    };
    Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )))
}

use crate::state::{BackendStatus, UiState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    title: &'a str,
    state: &'a UiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(title: &'a str, state: &'a UiState) -> Self {
        Self { title, state }
    }

    fn backend_span(&self) -> Span<'static> {
        match self.state.backend {
            BackendStatus::Unknown => {
                Span::styled("○ backend: probing", Style::default().fg(Color::DarkGray))
            }
            BackendStatus::Online { mock: false } => {
                Span::styled("● backend: online", Style::default().fg(Color::Green))
            }
            BackendStatus::Online { mock: true } => {
                Span::styled("● backend: online (mock)", Style::default().fg(Color::Yellow))
            }
            BackendStatus::Offline => {
                Span::styled("● backend: unreachable", Style::default().fg(Color::Red))
            }
        }
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![self.backend_span()];
        if self.state.pending() > 0 {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("{} pending", self.state.pending()),
                Style::default().fg(Color::Cyan),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().fg(Color::White));

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}

use crate::state::UiState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// The symptoms form.
pub struct InputPanel<'a> {
    state: &'a UiState,
}

impl<'a> InputPanel<'a> {
    pub fn new(state: &'a UiState) -> Self {
        Self { state }
    }
}

impl Widget for InputPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Describe your symptoms ");
        let inner = outer.inner(area);
        outer.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(inner);

        Paragraph::new(Line::from(Span::styled(
            "e.g. fever since yesterday, sore throat, mild headache",
            Style::default().fg(Color::DarkGray),
        )))
        .render(chunks[0], buf);

        let field = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let text = Line::from(vec![
            Span::raw(self.state.query.as_str()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ]);
        Paragraph::new(text)
            .block(field)
            .wrap(Wrap { trim: false })
            .render(chunks[1], buf);

        Paragraph::new(Line::from(Span::styled(
            "Educational use only. Not medical advice.",
            Style::default().fg(Color::DarkGray),
        )))
        .render(chunks[2], buf);
    }
}

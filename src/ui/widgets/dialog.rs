use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// A centered modal box with a message and a key hint.
pub struct Dialog<'a> {
    title: &'a str,
    message: &'a str,
    hint: &'a str,
    color: Color,
}

impl<'a> Dialog<'a> {
    pub fn alert(message: &'a str) -> Self {
        Self {
            title: " Warning ",
            message,
            hint: "Enter to dismiss",
            color: Color::Yellow,
        }
    }

    pub fn confirm(message: &'a str) -> Self {
        Self {
            title: " Leave HealBuddy? ",
            message,
            hint: "y: leave | n: stay",
            color: Color::Red,
        }
    }
}

pub fn center_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = center_rect(60, 30, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.color))
            .title(Span::styled(
                self.title,
                Style::default().fg(self.color).add_modifier(Modifier::BOLD),
            ));

        let text = vec![
            Line::from(""),
            Line::from(self.message),
            Line::from(""),
            Line::from(Span::styled(self.hint, Style::default().fg(Color::DarkGray))),
        ];

        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(modal_area, buf);
    }
}

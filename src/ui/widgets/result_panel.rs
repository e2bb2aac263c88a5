use crate::state::UiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// The result region. Long answers are wrapped to the panel width and
/// scrolled with the arrow keys.
pub struct ResultPanel<'a> {
    state: &'a UiState,
}

impl<'a> ResultPanel<'a> {
    pub fn new(state: &'a UiState) -> Self {
        Self { state }
    }
}

/// Wrap each paragraph of `text` to `width` columns.
pub fn wrap_message(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    text.lines()
        .flat_map(|line| {
            if line.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, width)
                    .into_iter()
                    .map(|cow| cow.into_owned())
                    .collect()
            }
        })
        .collect()
}

fn text_area(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// How many lines `message` can scroll when drawn into `area`.
pub fn scroll_limit(message: &str, area: Rect) -> u16 {
    let inner = text_area(area);
    let line_count = wrap_message(message, inner.width as usize).len();
    u16::try_from(line_count)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner.height)
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = if self.state.pending() > 0 {
            Color::Yellow
        } else {
            Color::Green
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(" Result ");

        let inner = text_area(area);
        let lines: Vec<Line> = wrap_message(&self.state.result_message, inner.width as usize)
            .into_iter()
            .map(Line::from)
            .collect();

        let max_scroll = scroll_limit(&self.state.result_message, area);
        Paragraph::new(lines)
            .block(block)
            .scroll((self.state.result_scroll.min(max_scroll), 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_message_keeps_blank_lines() {
        let lines = wrap_message("one two three\n\nfour", 7);
        assert_eq!(lines, vec!["one two", "three", "", "four"]);
    }

    #[test]
    fn test_wrap_message_zero_width() {
        assert!(!wrap_message("abc", 0).is_empty());
    }

    #[test]
    fn test_scroll_limit() {
        let message = (0..20)
            .map(|i| format!("line{}", i))
            .collect::<Vec<_>>()
            .join("\n");
        // 8 rows inside the border.
        assert_eq!(scroll_limit(&message, Rect::new(0, 0, 40, 10)), 12);
        assert_eq!(scroll_limit("short", Rect::new(0, 0, 40, 10)), 0);
    }

    #[test]
    fn test_scroll_limit_saturates_huge_messages() {
        let message = "x\n".repeat(70_000);
        assert_eq!(
            scroll_limit(&message, Rect::new(0, 0, 40, 10)),
            u16::MAX - 8
        );
    }
}

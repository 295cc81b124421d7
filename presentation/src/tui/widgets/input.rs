//! Input widget: the message field and its `[ Send ]` button
//!
//! The field is a single line. When the text is wider than the box it
//! scrolls horizontally so the cursor stays visible.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tripchat_domain::InputField;

const PROMPT: &str = "> ";
pub const SEND_LABEL: &str = "[ Send ]";

pub struct InputWidget<'a> {
    input: &'a InputField,
    active: bool,
}

impl<'a> InputWidget<'a> {
    pub fn new(input: &'a InputField) -> Self {
        Self {
            input,
            active: true,
        }
    }

    /// Render without the block cursor (e.g. while the help overlay is open)
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    fn build_line(&self, text_width: usize) -> Line<'static> {
        let color = if self.active {
            Color::Green
        } else {
            Color::DarkGray
        };
        let chars: Vec<char> = self.input.value().chars().collect();
        let cursor = self.input.cursor_chars();

        // Keep one column free for the cursor block at the end
        let skip = (cursor + 1).saturating_sub(text_width);

        let mut spans = vec![Span::styled(
            PROMPT,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )];

        if !self.active {
            spans.push(Span::styled(
                chars[skip..].iter().collect::<String>(),
                Style::default().fg(color),
            ));
            return Line::from(spans);
        }

        let cursor_style = Style::default().fg(Color::Black).bg(color);
        spans.push(Span::raw(chars[skip..cursor].iter().collect::<String>()));
        match chars.get(cursor) {
            Some(c) => {
                spans.push(Span::styled(c.to_string(), cursor_style));
                spans.push(Span::raw(chars[cursor + 1..].iter().collect::<String>()));
            }
            None => spans.push(Span::styled(" ", cursor_style)),
        }
        Line::from(spans)
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let text_width = inner_width.saturating_sub(PROMPT.len()).max(1);

        let border_style = if self.active {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Message ")
            .style(border_style);

        Paragraph::new(self.build_line(text_width))
            .block(block)
            .render(area, buf);
    }
}

/// The clickable send button
pub struct SendButton {
    enabled: bool,
}

impl SendButton {
    /// `enabled` is false when there is nothing to send
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Widget for SendButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.enabled {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        Paragraph::new(Span::styled(SEND_LABEL, style))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    fn field(text: &str) -> InputField {
        let mut input = InputField::new();
        input.set_value(text);
        input
    }

    #[test]
    fn test_renders_prompt_and_text() {
        let input = field("Rome");
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        InputWidget::new(&input).render(area, &mut buf);

        assert!(row_text(&buf, 1).starts_with("│> Rome"));
    }

    #[test]
    fn test_cursor_block_on_character() {
        let mut input = field("abc");
        input.cursor_left();
        let line = InputWidget::new(&input).build_line(20);

        // prompt, before, cursor char, after
        assert_eq!(line.spans.len(), 4);
        assert_eq!(line.spans[1].content, "ab");
        assert_eq!(line.spans[2].content, "c");
        assert_eq!(line.spans[2].style.bg, Some(Color::Green));
    }

    #[test]
    fn test_long_text_scrolls_to_cursor() {
        let input = field("0123456789");
        let line = InputWidget::new(&input).build_line(5);

        // Four chars before the cursor block fit in five columns
        assert_eq!(line.spans[1].content, "6789");
        assert_eq!(line.spans[2].content, " ");
    }

    #[test]
    fn test_inactive_has_no_cursor() {
        let input = field("hi");
        let line = InputWidget::new(&input).inactive().build_line(20);

        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[1].content, "hi");
    }

    #[test]
    fn test_send_button_label() {
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        SendButton::new(true).render(area, &mut buf);

        assert!(row_text(&buf, 1).contains(SEND_LABEL));
    }
}

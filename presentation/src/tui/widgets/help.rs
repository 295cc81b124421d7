//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Widget for rendering help overlay
pub struct HelpWidget;

impl HelpWidget {
    pub fn new() -> Self {
        Self
    }

    fn key(key: &'static str, description: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{:<12}", key), Style::default().fg(Color::Yellow)),
            Span::raw(description),
        ])
    }

    fn build_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Self::key("Enter", "Send message"),
            Self::key("Backspace", "Delete character before cursor"),
            Self::key("Delete", "Delete character under cursor"),
            Self::key("Left/Right", "Move cursor"),
            Self::key("Home/End", "Jump to start/end of input"),
            Self::key("Up/Down", "Scroll one line"),
            Self::key("PgUp/PgDn", "Scroll one page"),
            Self::key("F1", "Toggle this help"),
            Self::key("Esc", "Close help / quit"),
            Self::key("Ctrl+C", "Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "Mouse",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Self::key("Click", "[ Send ] sends the message"),
            Self::key("Wheel", "Scroll the conversation"),
            Line::from(""),
            Line::from(Span::styled(
                "Press F1 or ESC to close",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = Self::build_help_text();

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true });

        paragraph.render(area, buf);
    }
}

impl Default for HelpWidget {
    fn default() -> Self {
        Self::new()
    }
}

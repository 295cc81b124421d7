//! Conversation widget: the scrolling transcript

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use tripchat_domain::{Message, Sender, Transcript};

/// First visible line for a pane whose `offset` is counted up from the bottom.
///
/// An offset of zero pins the view to the tail, i.e. the scroll position equals
/// the full scrollable height.
pub fn scroll_top(total_lines: usize, visible_height: usize, offset: usize) -> u16 {
    if total_lines <= visible_height {
        return 0;
    }
    let max_scroll = total_lines - visible_height;
    u16::try_from(max_scroll - offset.min(max_scroll)).unwrap_or(u16::MAX)
}

fn sender_style(sender: Sender) -> Style {
    let color = match sender {
        Sender::User => Color::Cyan,
        Sender::Bot => Color::Green,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn body_style(message: &Message) -> Style {
    if message.is_pending() {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    } else if message.is_failure() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    }
}

/// Label line, indented body lines and a trailing blank line
fn message_lines(message: &Message) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!("{}: ", message.sender().label()),
        sender_style(message.sender()),
    ))];

    let style = body_style(message);
    for content_line in message.text().lines() {
        lines.push(Line::from(Span::styled(format!("  {}", content_line), style)));
    }
    lines.push(Line::from(""));
    lines
}

/// Rows the lines occupy once wrapped to `width`.
///
/// Wrapping never crosses a `Line`, so heights of consecutive blocks add up.
fn wrapped_height(lines: &[Line<'static>], width: u16) -> usize {
    Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width)
}

pub struct ConversationWidget<'a> {
    transcript: &'a Transcript,
    scroll_offset: usize,
}

impl<'a> ConversationWidget<'a> {
    pub fn new(transcript: &'a Transcript, scroll_offset: usize) -> Self {
        Self {
            transcript,
            scroll_offset,
        }
    }

    fn hint() -> Text<'static> {
        Text::from(Line::from(Span::styled(
            "Ask for a trip, e.g. \"Plan a 3-day trip from New York to London\"",
            Style::default().fg(Color::DarkGray),
        )))
    }

    /// Trailing messages covering `needed` wrapped rows, plus their height.
    ///
    /// Paragraph scrolling is limited to `u16`, so only the part of the
    /// transcript that can reach the screen is handed to it.
    fn tail_window(&self, needed: usize, width: u16) -> (Vec<Line<'static>>, usize) {
        let mut blocks = Vec::new();
        let mut height = 0;
        for message in self.transcript.messages().iter().rev() {
            if height >= needed {
                break;
            }
            let lines = message_lines(message);
            height += wrapped_height(&lines, width);
            blocks.push(lines);
        }
        (blocks.into_iter().rev().flatten().collect(), height)
    }

    /// Largest useful offset from the bottom for a pane of this size
    pub fn max_scroll(&self, area: Rect) -> usize {
        let visible_height = area.height.saturating_sub(2) as usize;
        let content_width = area.width.saturating_sub(2);
        let total_lines: usize = self
            .transcript
            .messages()
            .iter()
            .map(|message| wrapped_height(&message_lines(message), content_width))
            .sum();
        total_lines.saturating_sub(visible_height)
    }
}

impl<'a> Widget for ConversationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible_height = area.height.saturating_sub(2) as usize; // borders
        let content_width = area.width.saturating_sub(2); // borders

        let title = if self.scroll_offset > 0 {
            format!(" Conversation (↑{}) ", self.scroll_offset)
        } else {
            " Conversation ".to_string()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(Color::White));

        if self.transcript.is_empty() {
            Paragraph::new(Self::hint())
                .wrap(Wrap { trim: false })
                .block(block)
                .render(area, buf);
            return;
        }

        let needed = visible_height.saturating_add(self.scroll_offset);
        let (lines, window_lines) = self.tail_window(needed, content_width);
        let scroll = scroll_top(window_lines, visible_height, self.scroll_offset);

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block)
            .scroll((scroll, 0))
            .render(area, buf);
    }
}

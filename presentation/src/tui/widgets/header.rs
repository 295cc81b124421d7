//! Header widget: app title and the server in use

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    server_label: &'a str,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(server_label: &'a str) -> Self {
        Self { server_label }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(Color::Green)),
            Span::styled(
                "Travel Itinerary Planner",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(self.server_label, Style::default().fg(Color::Yellow)),
        ]);

        Paragraph::new(line)
            .style(Style::default().fg(Color::White))
            .render(area, buf);
    }
}

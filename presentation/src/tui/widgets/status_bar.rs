//! Status bar widget: in-flight count + key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const SPINNER_FRAMES: [char; 4] = ['⠋', '⠙', '⠸', '⠴'];

pub fn spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

pub struct StatusBarWidget {
    pending: usize,
    spinner_frame: usize,
    mouse_enabled: bool,
}

impl StatusBarWidget {
    pub fn new(pending: usize, spinner_frame: usize, mouse_enabled: bool) -> Self {
        Self {
            pending,
            spinner_frame,
            mouse_enabled,
        }
    }

    fn left_text(&self) -> String {
        match self.pending {
            0 => " READY ".to_string(),
            1 => format!(" {} 1 waiting ", spinner_char(self.spinner_frame)),
            n => format!(" {} {} waiting ", spinner_char(self.spinner_frame), n),
        }
    }

    fn hints(&self) -> &'static str {
        if self.mouse_enabled {
            "Enter/click:send  PgUp/PgDn:scroll  F1:help  Esc:quit"
        } else {
            "Enter:send  PgUp/PgDn:scroll  F1:help  Esc:quit"
        }
    }
}

impl Widget for StatusBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let left_text = self.left_text();
        let left_bg = if self.pending > 0 {
            Color::Yellow
        } else {
            Color::Blue
        };
        let left_style = Style::default()
            .fg(Color::Black)
            .bg(left_bg)
            .add_modifier(Modifier::BOLD);
        let left_width = left_text.chars().count() as u16;

        buf.set_line(
            area.x,
            area.y,
            &Line::from(Span::styled(left_text, left_style)),
            left_width,
        );

        // Right-aligned hints, dropped when the terminal is too narrow
        let hints = self.hints();
        let right_width = hints.len() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + left_width {
            let right_line = Line::from(Span::styled(
                hints,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(widget: StatusBarWidget, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_idle_shows_ready_and_hints() {
        let text = render(StatusBarWidget::new(0, 0, true), 80);
        assert!(text.starts_with(" READY "));
        assert!(text.contains("F1:help"));
    }

    #[test]
    fn test_pending_count_is_shown() {
        let text = render(StatusBarWidget::new(3, 1, true), 80);
        assert!(text.contains("3 waiting"));
        assert!(text.contains(spinner_char(1)));
    }

    #[test]
    fn test_narrow_terminal_drops_hints() {
        let text = render(StatusBarWidget::new(0, 0, false), 20);
        assert!(text.starts_with(" READY "));
        assert!(!text.contains("help"));
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_char(0), spinner_char(SPINNER_FRAMES.len()));
    }
}

//! TUI view state
//!
//! Everything the terminal needs beyond the chat itself: scroll position,
//! overlays and the last known geometry for mouse hit-testing. The chat
//! transcript and input live in `ChatState`, owned by the controller.

use ratatui::layout::Rect;

#[derive(Debug, Clone, Default)]
pub struct TuiState {
    /// Lines scrolled up from the bottom; 0 follows the tail
    pub scroll_offset: usize,
    pub show_help: bool,
    pub should_quit: bool,
    pub mouse_enabled: bool,
    /// Shown in the header (the endpoint URL)
    pub server_label: String,
    pub spinner_frame: usize,
    /// Geometry recorded by the last draw
    pub send_button: Rect,
    pub page_height: u16,
    max_scroll: usize,
    rendered_len: usize,
}

impl TuiState {
    pub fn new(server_label: impl Into<String>, mouse_enabled: bool) -> Self {
        Self {
            server_label: server_label.into(),
            mouse_enabled,
            ..Self::default()
        }
    }

    /// Record the transcript length; snaps the view to the bottom when
    /// messages were appended since the last call.
    pub fn observe_transcript(&mut self, len: usize) -> bool {
        let appended = len > self.rendered_len;
        self.rendered_len = len;
        if appended {
            self.scroll_to_bottom();
        }
        appended
    }

    /// Record the scrollable height of the last draw and clamp to it
    pub fn set_max_scroll(&mut self, max_scroll: usize) {
        self.max_scroll = max_scroll;
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(self.max_scroll);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page_step());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page_step());
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    fn page_step(&self) -> usize {
        (self.page_height as usize).saturating_sub(1).max(1)
    }
}

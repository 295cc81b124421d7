//! TUI application: main loop
//!
//! ```text
//! TuiApp (select! loop, owns ChatController)     request tasks (tokio::spawn)
//!   ├─ crossterm EventStream ── submit ──────────>  POST /generate
//!   ├─ resolution_rx  <──────── Resolution ───────┘
//!   └─ tick_interval (spinner)
//! ```
//!
//! The loop is the only place chat state is mutated. Request tasks report
//! back through the controller's resolution channel.

use super::keymap::{self, Action};
use super::state::TuiState;
use super::widgets::{
    MainLayout,
    conversation::ConversationWidget,
    header::HeaderWidget,
    help::HelpWidget,
    input::{InputWidget, SendButton},
    status_bar::StatusBarWidget,
};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};
use tripchat_application::{ChatController, ItineraryGateway};
use tripchat_domain::Resolution;

/// Options for the chat UI
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// Shown in the header
    pub server_label: String,
    /// Capture the mouse (click to send, wheel to scroll)
    pub mouse: bool,
    pub show_help_on_start: bool,
}

/// Main TUI application
pub struct TuiApp<G: ItineraryGateway + ?Sized + 'static> {
    controller: ChatController<G>,
    resolution_rx: mpsc::UnboundedReceiver<Resolution>,
    state: TuiState,
}

impl<G: ItineraryGateway + ?Sized + 'static> TuiApp<G> {
    pub fn new(gateway: Arc<G>, options: TuiOptions) -> Self {
        let (controller, resolution_rx) = ChatController::new(gateway);
        let mut state = TuiState::new(options.server_label, options.mouse);
        state.show_help = options.show_help_on_start;

        Self {
            controller,
            resolution_rx,
            state,
        }
    }

    /// Run the TUI main loop until the user quits
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if self.state.mouse_enabled {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(info);
        }));

        info!(server = %self.state.server_label, "Chat UI started");
        let result = self.event_loop(&mut terminal).await;

        // In-flight requests are abandoned; their placeholders are never read again
        self.controller.shutdown();

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        if self.state.mouse_enabled {
            execute!(terminal.backend_mut(), DisableMouseCapture)?;
        }
        terminal.show_cursor()?;

        info!("Chat UI stopped");
        result
    }

    async fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.state.should_quit {
                return Ok(());
            }

            tokio::select! {
                // Terminal events (keyboard, mouse, resize)
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_terminal_event(event),
                    Some(Err(e)) => return Err(e),
                    None => self.state.should_quit = true,
                },

                // Replies from request tasks
                Some(resolution) = self.resolution_rx.recv() => {
                    self.apply_resolution(resolution);
                }

                // Spinner animation
                _ = tick.tick() => {
                    if self.controller.pending() > 0 {
                        self.state.tick();
                    }
                }
            }
        }
    }

    /// Render all widgets and record the geometry used for hit-testing
    fn render(&mut self, frame: &mut ratatui::Frame) {
        let layout = MainLayout::compute(frame.area());
        let chat = self.controller.state();

        self.state.observe_transcript(chat.transcript.len());
        self.state.send_button = layout.send_button;
        self.state.page_height = layout.conversation.height.saturating_sub(2);
        self.state
            .set_max_scroll(ConversationWidget::new(&chat.transcript, 0).max_scroll(layout.conversation));

        frame.render_widget(HeaderWidget::new(&self.state.server_label), layout.header);
        frame.render_widget(
            ConversationWidget::new(&chat.transcript, self.state.scroll_offset),
            layout.conversation,
        );

        let input = InputWidget::new(&chat.input);
        let input = if self.state.show_help {
            input.inactive()
        } else {
            input
        };
        frame.render_widget(input, layout.input);
        frame.render_widget(
            SendButton::new(!chat.input.value().trim().is_empty()),
            layout.send_button,
        );
        frame.render_widget(
            StatusBarWidget::new(
                self.controller.pending(),
                self.state.spinner_frame,
                self.state.mouse_enabled,
            ),
            layout.status_bar,
        );

        // Help overlay
        if self.state.show_help {
            let help_area = MainLayout::centered_overlay(60, 70, frame.area());
            frame.render_widget(ratatui::widgets::Clear, help_area);
            frame.render_widget(HelpWidget::new(), help_area);
        }
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(&mut self, event: Event) {
        let action = match event {
            Event::Key(key) => keymap::handle_key(key, self.state.show_help),
            Event::Mouse(mouse) if self.state.mouse_enabled && !self.state.show_help => {
                keymap::mouse_action(mouse, self.state.send_button)
            }
            // Terminal auto-resizes on next draw
            _ => Action::None,
        };
        self.handle_action(action);
    }

    /// Handle a semantic action
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::None => {}

            // Text editing
            Action::InsertChar(c) => self.controller.input_mut().insert_char(c),
            Action::DeleteBefore => self.controller.input_mut().delete_before(),
            Action::DeleteAt => self.controller.input_mut().delete_at(),
            Action::CursorLeft => self.controller.input_mut().cursor_left(),
            Action::CursorRight => self.controller.input_mut().cursor_right(),
            Action::CursorHome => self.controller.input_mut().cursor_home(),
            Action::CursorEnd => self.controller.input_mut().cursor_end(),

            // Submit
            Action::Submit => {
                if let Some(id) = self.controller.submit_input() {
                    debug!(submission = %id, "Submitted from input field");
                    let len = self.controller.state().transcript.len();
                    self.state.observe_transcript(len);
                }
            }

            // Scrolling
            Action::ScrollUp => self.state.scroll_up(1),
            Action::ScrollDown => self.state.scroll_down(1),
            Action::PageUp => self.state.page_up(),
            Action::PageDown => self.state.page_down(),

            // Application
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::Quit => self.state.should_quit = true,
        }
    }

    fn apply_resolution(&mut self, resolution: Resolution) {
        // Unknown submissions are logged by the controller and otherwise ignored
        let _ = self.controller.apply(resolution);
    }
}

//! Key and mouse bindings
//!
//! Maps crossterm events to semantic [`Action`]s. The chat has a single
//! input mode, so the only context a key needs is whether the help overlay
//! is open.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

/// User action derived from terminal events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Insert character at the cursor
    InsertChar(char),
    /// Delete character before the cursor (Backspace)
    DeleteBefore,
    /// Delete character under the cursor (Delete)
    DeleteAt,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Send the input field's value
    Submit,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ToggleHelp,
    Quit,
    None,
}

/// Map a key press to an action
pub fn handle_key(key: KeyEvent, help_open: bool) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    if help_open {
        return match key.code {
            KeyCode::Esc | KeyCode::F(1) => Action::ToggleHelp,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::F(1) => Action::ToggleHelp,
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::DeleteBefore,
        KeyCode::Delete => Action::DeleteAt,
        KeyCode::Left => Action::CursorLeft,
        KeyCode::Right => Action::CursorRight,
        KeyCode::Home => Action::CursorHome,
        KeyCode::End => Action::CursorEnd,
        KeyCode::Up => Action::ScrollUp,
        KeyCode::Down => Action::ScrollDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        // Control+Alt together is how AltGr arrives on Windows, so only a
        // lone Control or Alt makes a chord.
        KeyCode::Char(c)
            if key.modifiers.contains(KeyModifiers::CONTROL)
                == key.modifiers.contains(KeyModifiers::ALT) =>
        {
            Action::InsertChar(c)
        }
        _ => Action::None,
    }
}

/// Map a mouse event to an action; `send_button` is the button's last drawn area
pub fn mouse_action(event: MouseEvent, send_button: Rect) -> Action {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left)
            if send_button.contains(Position::new(event.column, event.row)) =>
        {
            Action::Submit
        }
        MouseEventKind::ScrollUp => Action::ScrollUp,
        MouseEventKind::ScrollDown => Action::ScrollDown,
        _ => Action::None,
    }
}

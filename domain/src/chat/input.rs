//! Single-line text input buffer

/// Editable text field with a cursor (Entity)
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    value: String,
    cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the whole value and move the cursor to the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the char before the cursor (Backspace)
    pub fn delete_before(&mut self) {
        if let Some(len) = self.prev_char_len() {
            self.cursor -= len;
            self.value.remove(self.cursor);
        }
    }

    /// Delete the char under the cursor (Delete)
    pub fn delete_at(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(len) = self.prev_char_len() {
            self.cursor -= len;
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Number of chars before the cursor (for terminal column placement)
    pub fn cursor_chars(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }

    fn prev_char_len(&self) -> Option<usize> {
        self.value[..self.cursor]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete() {
        let mut input = InputField::new();
        for c in "Rome".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.value(), "Rome");
        input.delete_before();
        assert_eq!(input.value(), "Rom");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_multibyte_cursor_movement() {
        let mut input = InputField::new();
        input.set_value("Zürich ⏳");
        input.cursor_left();
        assert_eq!(input.cursor_chars(), 7);
        input.delete_before();
        assert_eq!(input.value(), "Zürich⏳");
        input.cursor_home();
        input.cursor_right();
        input.cursor_right();
        assert_eq!(input.cursor(), 3);
        input.delete_at();
        assert_eq!(input.value(), "Zürich⏳".replacen('r', "", 1));
    }

    #[test]
    fn test_delete_at_boundaries_is_noop() {
        let mut input = InputField::new();
        input.delete_before();
        input.delete_at();
        assert!(input.is_empty());

        input.set_value("ab");
        input.delete_at();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = InputField::new();
        input.set_value("Pars");
        input.cursor_left();
        input.insert_char('i');
        assert_eq!(input.value(), "Paris");
        input.cursor_end();
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut input = InputField::new();
        input.set_value("Lisbon");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}

//! Editable text buffer with cursor tracking.
//!
//! Holds the value of a text field or textarea. Keyboard capture happens
//! at the host view level; the host forwards keystrokes here through
//! [`TextBuffer::process_key`].

/// A text buffer with a byte-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

/// Outcome of feeding one keystroke to a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The text changed.
    Edited,
    /// Only the cursor moved.
    Moved,
    /// Enter was pressed.
    Submit,
    /// Escape was pressed.
    Cancel,
    /// The key was not handled.
    Unhandled,
}

impl TextBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with initial content, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    /// Current content. Embedded line breaks are preserved verbatim.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in bytes.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the content, moving the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a string at the cursor.
    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Delete the character before the cursor. Returns false at the start.
    pub fn backspace(&mut self) -> bool {
        match self.prev_boundary() {
            Some(start) => {
                self.text.remove(start);
                self.cursor = start;
                true
            }
            None => false,
        }
    }

    /// Delete the character at the cursor. Returns false at the end.
    pub fn delete(&mut self) -> bool {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
            true
        } else {
            false
        }
    }

    /// Delete the word before the cursor.
    pub fn delete_word(&mut self) {
        while self.prev_char().is_some_and(char::is_whitespace) {
            self.backspace();
        }
        while self.prev_char().is_some_and(|c| !c.is_whitespace()) {
            self.backspace();
        }
    }

    /// Move the cursor one character left.
    pub fn move_left(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.cursor = start;
        }
    }

    /// Move the cursor one character right.
    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Move the cursor to the start.
    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end.
    pub fn move_to_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Feed one keystroke to the buffer.
    ///
    /// Designed to be called from a host view's key handler. Tab is left
    /// to the host so focus traversal keeps working.
    pub fn process_key(&mut self, key: &str, shift: bool, word_modifier: bool) -> KeyOutcome {
        match key {
            "backspace" => {
                if word_modifier {
                    self.delete_word();
                } else {
                    self.backspace();
                }
                KeyOutcome::Edited
            }
            "delete" => {
                self.delete();
                KeyOutcome::Edited
            }
            "left" => {
                self.move_left();
                KeyOutcome::Moved
            }
            "right" => {
                self.move_right();
                KeyOutcome::Moved
            }
            "home" => {
                self.move_to_start();
                KeyOutcome::Moved
            }
            "end" => {
                self.move_to_end();
                KeyOutcome::Moved
            }
            "enter" => KeyOutcome::Submit,
            "escape" => KeyOutcome::Cancel,
            "tab" => KeyOutcome::Unhandled,
            "space" => {
                self.insert_char(' ');
                KeyOutcome::Edited
            }
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_graphic() => {
                        self.insert_char(if shift { c.to_ascii_uppercase() } else { c });
                        KeyOutcome::Edited
                    }
                    _ => KeyOutcome::Unhandled,
                }
            }
        }
    }

    fn prev_char(&self) -> Option<char> {
        self.text[..self.cursor].chars().next_back()
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.prev_char()
            .map(|c| self.cursor - c.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer() {
        let buffer = TextBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn with_text_puts_cursor_at_end() {
        let buffer = TextBuffer::with_text("hello");
        assert_eq!(buffer.text(), "hello");
        assert_eq!(buffer.cursor(), 5);
    }

    #[test]
    fn insert_and_backspace() {
        let mut buffer = TextBuffer::new();
        buffer.insert_str("hell");
        buffer.insert_char('o');
        assert_eq!(buffer.text(), "hello");

        assert!(buffer.backspace());
        assert_eq!(buffer.text(), "hell");
        assert!(!TextBuffer::new().backspace());
    }

    #[test]
    fn delete_at_cursor() {
        let mut buffer = TextBuffer::with_text("hello");
        buffer.move_to_start();
        assert!(buffer.delete());
        assert_eq!(buffer.text(), "ello");

        buffer.move_to_end();
        assert!(!buffer.delete());
    }

    #[test]
    fn insert_in_the_middle() {
        let mut buffer = TextBuffer::with_text("hllo");
        buffer.move_to_start();
        buffer.move_right();
        buffer.insert_char('e');
        assert_eq!(buffer.text(), "hello");
    }

    #[test]
    fn cursor_movement() {
        let mut buffer = TextBuffer::with_text("hi");
        buffer.move_left();
        assert_eq!(buffer.cursor(), 1);
        buffer.move_to_start();
        assert_eq!(buffer.cursor(), 0);
        buffer.move_right();
        assert_eq!(buffer.cursor(), 1);
        buffer.move_to_end();
        assert_eq!(buffer.cursor(), 2);
    }

    #[test]
    fn delete_word_stops_at_whitespace() {
        let mut buffer = TextBuffer::with_text("hello world");
        buffer.delete_word();
        assert_eq!(buffer.text(), "hello ");
        buffer.delete_word();
        assert_eq!(buffer.text(), "");
    }

    #[test]
    fn multibyte_characters() {
        let mut buffer = TextBuffer::with_text("héllo");
        buffer.move_to_start();
        buffer.move_right();
        buffer.move_right();
        assert_eq!(&buffer.text()[..buffer.cursor()], "hé");

        buffer.move_to_end();
        buffer.backspace();
        buffer.backspace();
        buffer.backspace();
        buffer.backspace();
        assert_eq!(buffer.text(), "h");
    }

    #[test]
    fn line_breaks_survive_verbatim() {
        let buffer = TextBuffer::with_text("line one\nline two\n");
        assert_eq!(buffer.text(), "line one\nline two\n");
    }

    #[test]
    fn process_key_typing() {
        let mut buffer = TextBuffer::new();
        assert_eq!(buffer.process_key("h", false, false), KeyOutcome::Edited);
        assert_eq!(buffer.process_key("i", true, false), KeyOutcome::Edited);
        assert_eq!(buffer.text(), "hI");
    }

    #[test]
    fn process_key_special() {
        let mut buffer = TextBuffer::with_text("hi");
        assert_eq!(
            buffer.process_key("backspace", false, false),
            KeyOutcome::Edited
        );
        assert_eq!(buffer.process_key("enter", false, false), KeyOutcome::Submit);
        assert_eq!(buffer.process_key("escape", false, false), KeyOutcome::Cancel);
        assert_eq!(buffer.process_key("tab", false, false), KeyOutcome::Unhandled);
        assert_eq!(buffer.process_key("left", false, false), KeyOutcome::Moved);
    }
}

//! Single-line text input buffer

/// Default maximum number of characters a buffer accepts
pub const DEFAULT_MAX_LEN: usize = 200;

/// Glyph drawn at the cursor position of a focused field
pub const CURSOR_GLYPH: char = '│';

/// Single-line text with a cursor
///
/// The cursor counts characters, not bytes, so multi-byte input behaves
/// like any other character. Mutating operations report whether the *text*
/// changed; pure cursor moves always report `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBuffer {
    text: String,
    cursor: usize,
    max_len: usize,
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEN)
    }
}

impl EditorBuffer {
    /// Create an empty buffer accepting at most `max_len` characters
    pub fn new(max_len: usize) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            max_len,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the character at `index`
    fn byte_offset(&self, index: usize) -> usize {
        self.text
            .char_indices()
            .nth(index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) -> bool {
        if c.is_control() || self.char_len() >= self.max_len {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor (Backspace)
    pub fn delete_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    /// Delete the character under the cursor (Delete)
    pub fn delete_at_cursor(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.cursor = self.cursor.saturating_sub(1);
        false
    }

    pub fn move_right(&mut self) -> bool {
        self.cursor = (self.cursor + 1).min(self.char_len());
        false
    }

    pub fn move_home(&mut self) -> bool {
        self.cursor = 0;
        false
    }

    pub fn move_end(&mut self) -> bool {
        self.cursor = self.char_len();
        false
    }

    /// Replace the whole text; control characters are dropped and the
    /// result is truncated to the maximum length. Cursor goes to the end.
    pub fn set_text(&mut self, text: &str) -> bool {
        let cleaned: String = text
            .chars()
            .filter(|c| !c.is_control())
            .take(self.max_len)
            .collect();
        let changed = cleaned != self.text;
        self.text = cleaned;
        self.cursor = self.char_len();
        changed
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.text.is_empty();
        self.text.clear();
        self.cursor = 0;
        changed
    }

    /// Text with the cursor glyph inserted, for display only
    pub fn with_cursor(&self, focused: bool) -> String {
        if !focused {
            return self.text.clone();
        }
        let at = self.byte_offset(self.cursor);
        let mut out = String::with_capacity(self.text.len() + CURSOR_GLYPH.len_utf8());
        out.push_str(&self.text[..at]);
        out.push(CURSOR_GLYPH);
        out.push_str(&self.text[at..]);
        out
    }
}

//! Query input line
//!
//! Single-line editor for the picker query. The cursor counts chars, not
//! bytes, so recipe names with accents edit correctly.

/// Query input state
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryInput {
    /// Current query
    query: String,
    /// Cursor position in chars
    cursor: usize,
}

impl QueryInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    fn char_len(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.query.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.query.remove(at);
        true
    }

    /// Delete character at cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.query.remove(at);
        true
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear the query
    pub fn clear(&mut self) -> bool {
        let changed = !self.query.is_empty();
        self.query.clear();
        self.cursor = 0;
        changed
    }

    /// Query split at the cursor, for drawing the caret
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.query.split_at(self.byte_offset(self.cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> QueryInput {
        let mut input = QueryInput::new();
        for c in s.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = typed("soup");
        assert_eq!(input.as_str(), "soup");
        assert_eq!(input.cursor(), 4);

        assert!(input.backspace());
        assert_eq!(input.as_str(), "sou");

        input.cursor_home();
        assert!(!input.backspace());
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = typed("crème");
        input.cursor_left();
        input.cursor_left();
        // Cursor sits before "me"
        assert_eq!(input.split_at_cursor(), ("crè", "me"));
        assert!(input.backspace());
        assert_eq!(input.as_str(), "crme");
        input.insert('é');
        assert_eq!(input.as_str(), "crème".replace('è', "é"));
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = typed("abc");
        input.cursor_home();
        assert!(input.delete());
        assert_eq!(input.as_str(), "bc");
        input.cursor_end();
        assert!(!input.delete());
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = typed("ab");
        input.cursor_right();
        assert_eq!(input.cursor(), 2);
        input.cursor_home();
        input.cursor_left();
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_clear() {
        let mut input = typed("chili");
        assert!(input.clear());
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
        assert!(!input.clear());
    }
}

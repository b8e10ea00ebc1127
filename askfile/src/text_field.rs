//! Single-line text editing for one form field.

use crate::EditOp;

/// A single-line text input owned by a [`Form`](crate::Form).
///
/// The field applies edit events itself and enforces its own focus gate: a
/// blurred field consumes nothing. The form relies on this when it forwards
/// every edit event to every field without any focus filtering of its own.
///
/// The character limit and the cursor are measured in characters, not
/// bytes, so multibyte input cannot split a code point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    placeholder: String,
    value: String,
    cursor: usize,
    char_limit: usize,
    focused: bool,
}

impl TextField {
    /// Create a blurred, empty field with the given placeholder text.
    pub fn new(placeholder: impl Into<String>, char_limit: usize) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: String::new(),
            cursor: 0,
            char_limit,
            focused: false,
        }
    }

    /// The question text, shown while the value is empty.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The text entered so far.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Maximum number of characters this field accepts.
    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    pub(crate) fn focus(&mut self) {
        self.focused = true;
    }

    pub(crate) fn blur(&mut self) {
        self.focused = false;
    }

    pub(crate) fn into_parts(self) -> (String, String) {
        (self.placeholder, self.value)
    }

    /// Apply one edit event. Returns whether the event was consumed.
    ///
    /// A blurred field ignores every event and returns `false`.
    pub fn handle_edit(&mut self, op: EditOp) -> bool {
        if !self.focused {
            return false;
        }

        match op {
            EditOp::Insert(c) => self.insert(c),
            EditOp::Backspace => self.backspace(),
            EditOp::Delete => self.delete(),
            EditOp::CursorLeft => self.cursor_left(),
            EditOp::CursorRight => self.cursor_right(),
            EditOp::CursorStart => {
                self.cursor = 0;
                true
            }
            EditOp::CursorEnd => {
                self.cursor = self.char_count();
                true
            }
        }
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn insert(&mut self, c: char) -> bool {
        if self.char_count() >= self.char_limit {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        true
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    fn cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    fn cursor_right(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

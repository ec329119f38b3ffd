//! Text-input abstraction for the query bar.
//!
//! The `TextInput` trait is the minimal capability surface any host text
//! widget must expose: text access, structural edits, caret and selection
//! placement. `LineBuffer` is the built-in single-line implementation
//! backed by a plain `String`.

use std::ops::Range;

use super::selection::Selection;

/// Minimal capability interface over a single-line text widget.
///
/// All offsets are character offsets (not bytes). Structural edits do not
/// reposition the caret beyond clamping it into the new bounds; callers are
/// expected to place the caret explicitly after each edit, which is what the
/// edit session does when it applies deferred tasks.
///
/// The caret is the selection head: `caret() == selection().head` at all
/// times. `set_caret` collapses the selection, `select` creates one.
pub trait TextInput {
    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Check if the buffer is empty
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Get the character at a given offset, None if out of bounds
    fn char_at(&self, offset: usize) -> Option<char>;

    /// Get a slice of the text by character range (clamped to bounds)
    fn slice(&self, range: Range<usize>) -> String;

    /// Get the full content
    fn text(&self) -> String;

    /// Current caret offset (== selection head)
    fn caret(&self) -> usize;

    /// Current selection (collapsed when nothing is selected)
    fn selection(&self) -> Selection;

    /// Insert text at a character offset
    fn insert(&mut self, offset: usize, text: &str);

    /// Remove a character range
    fn remove(&mut self, range: Range<usize>);

    /// Place the caret, collapsing any selection
    fn set_caret(&mut self, offset: usize);

    /// Select a range, leaving the caret at `head`
    fn select(&mut self, anchor: usize, head: usize);

    /// Replace the whole content, caret moves to the end
    fn set_text(&mut self, text: &str) {
        let len = self.len_chars();
        if len > 0 {
            self.remove(0..len);
        }
        self.insert(0, text);
        self.set_caret(self.len_chars());
    }

    /// Text covered by the current selection (empty string when collapsed)
    fn selected_text(&self) -> String {
        let sel = self.selection();
        if sel.is_empty() {
            return String::new();
        }
        self.slice(sel.range())
    }

    /// Replace the current selection with `text`, collapsing the caret to
    /// the end of the inserted text. With no selection this inserts at the
    /// caret. This is the primitive a widget runs for ordinary typing.
    fn replace_selection(&mut self, text: &str) {
        let sel = self.selection();
        let start = sel.start();
        if !sel.is_empty() {
            self.remove(sel.range());
        }
        self.insert(start, text);
        self.set_caret(start + text.chars().count());
    }
}

// =============================================================================
// LineBuffer - built-in single-line implementation
// =============================================================================

/// Single-line text buffer with caret and selection, backed by `String`.
///
/// Out-of-range offsets are a caller bug: they trip a `debug_assert!` in
/// debug builds and are clamped in release builds, never corrupting the
/// text.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    text: String,
    selection: Selection,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer from existing text, caret at the end
    pub fn from_text(s: &str) -> Self {
        let len = s.chars().count();
        Self {
            text: s.to_string(),
            selection: Selection::collapsed(len),
        }
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Convert a char offset to a byte offset
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn clamp(&self, offset: usize) -> usize {
        offset.min(self.len_chars())
    }
}

impl TextInput for LineBuffer {
    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.chars().nth(offset)
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = self.clamp(range.start);
        let end = self.clamp(range.end);
        if start >= end {
            return String::new();
        }
        self.text.chars().skip(start).take(end - start).collect()
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn caret(&self) -> usize {
        self.selection.head
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn insert(&mut self, offset: usize, text: &str) {
        debug_assert!(
            offset <= self.len_chars(),
            "insert offset {} beyond buffer length {}",
            offset,
            self.len_chars()
        );
        let byte_offset = self.char_to_byte(self.clamp(offset));
        self.text.insert_str(byte_offset, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        debug_assert!(
            range.end <= self.len_chars(),
            "remove range {}..{} beyond buffer length {}",
            range.start,
            range.end,
            self.len_chars()
        );
        let start = self.clamp(range.start);
        let end = self.clamp(range.end);
        if start >= end {
            return;
        }
        let start_byte = self.char_to_byte(start);
        let end_byte = self.char_to_byte(end);
        self.text.replace_range(start_byte..end_byte, "");

        // Keep the caret inside the shortened text
        let len = self.len_chars();
        if self.selection.anchor > len || self.selection.head > len {
            self.selection = Selection::collapsed(self.selection.head.min(len));
        }
    }

    fn set_caret(&mut self, offset: usize) {
        debug_assert!(
            offset <= self.len_chars(),
            "caret offset {} beyond buffer length {}",
            offset,
            self.len_chars()
        );
        self.selection = Selection::collapsed(self.clamp(offset));
    }

    fn select(&mut self, anchor: usize, head: usize) {
        debug_assert!(
            anchor <= self.len_chars() && head <= self.len_chars(),
            "selection {}..{} beyond buffer length {}",
            anchor,
            head,
            self.len_chars()
        );
        self.selection = Selection::new(self.clamp(anchor), self.clamp(head));
    }
}

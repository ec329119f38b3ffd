//! Token extraction and prefix lookup.
//!
//! Runs synchronously inside the insertion notification, read-only: it
//! decides *whether* a completion exists and what text it would add, and the
//! session turns that decision into a deferred buffer edit.

use super::buffer::TextInput;
use super::vocabulary::Vocabulary;
use crate::util::is_word_char;

/// A completion the resolver wants staged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The remainder beyond what the user already typed
    pub text: String,
    /// Offset where the remainder is inserted (the caret after the
    /// triggering keystroke)
    pub anchor: usize,
}

/// Resolve the token ending at `caret` against one of the two vocabularies.
///
/// The token is the maximal run of word characters ending at the caret. The
/// character just before the token picks the vocabulary: the trigger
/// character (the path separator) selects the per-document one, anything
/// else (including the start of the buffer) selects the global one.
///
/// Returns None when the caret sits on a token boundary, when no entry
/// starts with the token, or when the token already equals an entry
/// outright.
pub fn resolve<W: TextInput + ?Sized>(
    widget: &W,
    caret: usize,
    trigger: char,
    global: &Vocabulary,
    context: &Vocabulary,
) -> Option<Suggestion> {
    if caret == 0 {
        return None;
    }

    // Walk back over word characters to the token start. A token reaching
    // offset 0 has no boundary character at all.
    let mut start = caret;
    while start > 0 {
        match widget.char_at(start - 1) {
            Some(ch) if is_word_char(ch) => start -= 1,
            _ => break,
        }
    }

    let prefix = widget.slice(start..caret);
    if prefix.is_empty() {
        return None;
    }

    let before = if start > 0 {
        widget.char_at(start - 1)
    } else {
        None
    };
    let vocabulary = if before == Some(trigger) {
        context
    } else {
        global
    };

    let completion = vocabulary.completion_for(&prefix)?;
    Some(Suggestion {
        text: completion.to_string(),
        anchor: caret,
    })
}

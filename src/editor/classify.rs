//! Classification of raw buffer edits.
//!
//! Every single-character insertion is classified against the pair table and
//! the buffer contents around the caret before anything else happens. The
//! classification itself is read-only; acting on it is the session's job.

use std::ops::Range;

use super::buffer::TextInput;
use super::pairs::{closer_for, is_closer, matching};
use crate::util::is_word_char;

/// What a just-inserted character means for the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertClass {
    /// An opener was typed: the matching closer should appear right after it
    AutoPair { closer: char },
    /// A closer was typed in front of an identical closer: absorb the
    /// duplicate and step over the existing one
    SkipClose,
    /// A word character was typed: hand off to the completion resolver
    Word,
    /// Nothing the editor reacts to
    Inert,
}

/// Classify a single-character insertion.
///
/// `pos` is the offset of the freshly inserted character, which the widget
/// has already applied; the character after it (if any) is the one that was
/// at `pos` before the edit.
pub fn classify_insertion<W: TextInput + ?Sized>(widget: &W, pos: usize, ch: char) -> InsertClass {
    debug_assert_eq!(
        widget.char_at(pos),
        Some(ch),
        "classification expects the inserted character to be in the buffer"
    );

    let following = widget.char_at(pos + 1);

    // Do not duplicate an already-present closing mate
    if following == Some(ch) && is_closer(ch) {
        return InsertClass::SkipClose;
    }

    // Insert mates together
    if let Some(closer) = closer_for(ch) {
        return InsertClass::AutoPair { closer };
    }

    if is_word_char(ch) {
        InsertClass::Word
    } else {
        InsertClass::Inert
    }
}

/// Widen a pending removal so that deleting the opener of an empty pair
/// takes its closer along in the same operation.
///
/// This runs BEFORE the removal is applied (the widget still holds the text
/// about to disappear). If the characters at `offset..offset + len` plus the
/// one right after them spell out a known pair, the returned range covers
/// both sides; otherwise it is exactly the requested range.
pub fn removal_span<W: TextInput + ?Sized>(widget: &W, offset: usize, len: usize) -> Range<usize> {
    debug_assert!(
        offset + len <= widget.len_chars(),
        "removal {}..{} beyond buffer length {}",
        offset,
        offset + len,
        widget.len_chars()
    );

    let probe: Vec<char> = widget.slice(offset..offset + len + 1).chars().collect();
    if probe.len() == len + 1 && probe.len() == 2 && matching(probe[0], probe[1]).is_some() {
        return offset..offset + len + 1;
    }
    offset..offset + len
}

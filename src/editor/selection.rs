//! Selection type for the single-line editor.

use std::ops::Range;

/// A text selection over character offsets, with an anchor (fixed point) and
/// a head (the caret). The anchor stays put while the head moves.
///
/// A staged completion is a *reversed* selection: the head (caret) sits at
/// the start of the inserted text and the anchor at its end, so that typing
/// replaces the speculative text while the caret stays where the user left
/// off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the caret is (moving point)
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (a bare caret)
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    /// Check if the selection is empty (anchor == head)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Start offset (minimum of anchor and head)
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// End offset (maximum of anchor and head), exclusive
    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    /// The covered offsets as a `start..end` range
    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Check if the head sits before the anchor
    pub fn is_reversed(&self) -> bool {
        self.head < self.anchor
    }

    /// Move the head, leaving the anchor in place
    pub fn extend_to(&mut self, offset: usize) {
        self.head = offset;
    }

    /// Collapse to the start offset
    pub fn collapse_to_start(&mut self) {
        let start = self.start();
        self.anchor = start;
        self.head = start;
    }

    /// Collapse to the end offset
    pub fn collapse_to_end(&mut self) {
        let end = self.end();
        self.anchor = end;
        self.head = end;
    }

    /// Check if an offset falls inside the selection (end exclusive)
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start() && offset < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed() {
        let sel = Selection::collapsed(5);
        assert!(sel.is_empty());
        assert_eq!(sel.anchor, sel.head);
        assert_eq!(sel.len(), 0);
    }

    #[test]
    fn test_start_end() {
        let forward = Selection::new(0, 5);
        assert_eq!(forward.start(), 0);
        assert_eq!(forward.end(), 5);
        assert!(!forward.is_reversed());

        let backward = Selection::new(5, 0);
        assert_eq!(backward.start(), 0);
        assert_eq!(backward.end(), 5);
        assert!(backward.is_reversed());
        assert_eq!(backward.range(), 0..5);
    }

    #[test]
    fn test_extend_and_collapse() {
        let mut sel = Selection::collapsed(0);
        sel.extend_to(10);
        assert_eq!(sel.anchor, 0);
        assert_eq!(sel.head, 10);

        sel.collapse_to_end();
        assert!(sel.is_empty());
        assert_eq!(sel.head, 10);

        let mut sel2 = Selection::new(10, 3);
        sel2.collapse_to_start();
        assert!(sel2.is_empty());
        assert_eq!(sel2.head, 3);
    }

    #[test]
    fn test_contains() {
        let sel = Selection::new(2, 8);
        assert!(!sel.contains(1));
        assert!(sel.contains(2));
        assert!(sel.contains(7));
        assert!(!sel.contains(8)); // End is exclusive
    }
}

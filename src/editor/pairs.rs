//! Bracket and quote pairs eligible for auto-balancing.

/// An open/close character pair. Quote-style pairs use the same character on
/// both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub open: char,
    pub close: char,
}

impl Pair {
    pub const fn new(open: char, close: char) -> Self {
        Self { open, close }
    }

    /// Quote-style pair (open == close)
    pub fn is_symmetric(&self) -> bool {
        self.open == self.close
    }
}

/// Every pair the editor balances. Order matters only for display.
pub static PAIRS: &[Pair] = &[
    Pair::new('(', ')'),
    Pair::new('{', '}'),
    Pair::new('[', ']'),
    Pair::new('\'', '\''),
    Pair::new('"', '"'),
];

/// The closing character for `open`, if `open` starts a known pair
pub fn closer_for(open: char) -> Option<char> {
    PAIRS.iter().find(|p| p.open == open).map(|p| p.close)
}

/// Check if `ch` closes any known pair
pub fn is_closer(ch: char) -> bool {
    PAIRS.iter().any(|p| p.close == ch)
}

/// The pair whose two sides are exactly (`open`, `close`), if any
pub fn matching(open: char, close: char) -> Option<Pair> {
    PAIRS
        .iter()
        .copied()
        .find(|p| p.open == open && p.close == close)
}

//! Utility functions for query-text classification

/// Check if a character can be part of a completable token.
///
/// Tokens are made of letters and underscores only. Digits deliberately do
/// not count: a digit ends the token scan, so typing `addr2` stops offering
/// completions after the `2`.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Check if a character ends a token (anything that is not a word character)
pub fn is_token_boundary(ch: char) -> bool {
    !is_word_char(ch)
}

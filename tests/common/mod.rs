//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use jqbar::config::EditorConfig;
use jqbar::editor::{EditSession, LineBuffer};

/// Create a session over an empty bar with the builtin jq vocabulary
pub fn test_session() -> EditSession<LineBuffer> {
    EditSession::new(LineBuffer::new())
}

/// Create a session whose context vocabulary holds the given document keys
pub fn test_session_with_keys(keys: &[&str]) -> EditSession<LineBuffer> {
    let mut session = test_session();
    session.publish_context_vocabulary(keys.iter().copied());
    session
}

/// Create a session with a custom configuration
pub fn test_session_with_config(config: EditorConfig) -> EditSession<LineBuffer> {
    EditSession::with_config(LineBuffer::new(), config)
}

/// Type one character and run whatever it scheduled
pub fn press(session: &mut EditSession<LineBuffer>, ch: char) {
    session.type_char(ch);
    session.pump();
}

/// Type a string, settling scheduled work after every character
pub fn type_all(session: &mut EditSession<LineBuffer>, text: &str) {
    for ch in text.chars() {
        press(session, ch);
    }
}

//! Inline query editor with live completion.
//!
//! This module is the whole interactive core of the query bar: as the user
//! types a jq expression, it balances bracket/quote pairs, proposes
//! completions from two vocabularies and stages them as selected text that
//! the next keystroke accepts or replaces.
//!
//! # Architecture
//!
//! The core components are:
//!
//! - [`TextInput`]: Trait abstracting over the host text widget
//! - [`LineBuffer`]: Built-in single-line implementation (backed by `String`)
//! - [`Vocabulary`]: Sorted candidate lists with binary prefix lookup
//! - [`classify_insertion`] / [`removal_span`]: Read-only edit classification
//! - [`resolve`]: Token extraction and vocabulary search
//! - [`TaskQueue`] / [`EditTask`]: Mutations deferred out of notifications
//! - [`EditSession`]: Owner of all of the above plus the INSERT/COMPLETION
//!   state machine
//!
//! # Example
//!
//! ```
//! use jqbar::editor::{EditMode, EditSession, LineBuffer};
//!
//! let mut session = EditSession::new(LineBuffer::new());
//! session.publish_context_vocabulary(["id", "name"]);
//!
//! session.type_str(".na");
//! session.pump();
//! assert_eq!(session.text(), ".name");
//! assert_eq!(session.mode(), EditMode::Completion);
//!
//! session.commit();
//! assert_eq!(session.caret(), 5);
//! ```

mod buffer;
mod classify;
mod pairs;
mod queue;
mod resolver;
mod selection;
mod session;
mod vocabulary;

// Re-export main types
pub use buffer::{LineBuffer, TextInput};
pub use classify::{classify_insertion, removal_span, InsertClass};
pub use pairs::{closer_for, is_closer, matching, Pair, PAIRS};
pub use queue::{EditTask, TaskQueue};
pub use resolver::{resolve, Suggestion};
pub use selection::Selection;
pub use session::{EditMode, EditSession};
pub use vocabulary::{Vocabulary, JQ_BUILTINS};

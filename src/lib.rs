//! jqbar - inline jq query bar with live completion
//!
//! This crate provides the core types and logic for a single-line query
//! editor: bracket/quote auto-pairing, prefix completion against a fixed
//! jq builtin vocabulary plus keys harvested from the current document,
//! and a deferred task queue that keeps widget mutation out of change
//! notification callbacks.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editor;
pub mod json_keys;
pub mod query;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::EditorConfig;
pub use editor::{EditMode, EditSession, LineBuffer, TextInput, Vocabulary};
pub use json_keys::document_keys;
pub use query::{effective_query, QueryFlags};

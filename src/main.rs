//! Replay harness for the jq query bar.
//!
//! Feeds a keystroke script through an `EditSession` and prints the bar
//! state after every step, then the final query with helper wrapping
//! applied. Lets the completion and pairing machinery be exercised from
//! a terminal without a host widget:
//!
//! ```text
//! jqbar sample.json -s '.na\t'
//! ```

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use jqbar::cli::{CliArgs, Key};
use jqbar::config::EditorConfig;
use jqbar::editor::{EditSession, LineBuffer, Selection};
use jqbar::json_keys::document_keys;
use jqbar::query::effective_query;

fn main() -> Result<()> {
    jqbar::tracing::init();

    let replay = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!("Invalid arguments: {}", e))?;

    let mut config = EditorConfig::load();
    if !replay.auto_pair {
        config.auto_pair = false;
    }
    if replay.save_config {
        config
            .save()
            .map_err(|e| anyhow::anyhow!("Failed to save config: {}", e))?;
    }

    let mut session = EditSession::with_config(LineBuffer::new(), config);

    if let Some(path) = &replay.document {
        let keys = harvest_keys(path)?;
        tracing::info!("Loaded {} keys from {}", keys.len(), path.display());
        session.publish_context_vocabulary(keys);
    }

    if let Some(text) = &replay.initial {
        session.paste(text);
        session.pump();
    }

    for (step, key) in replay.script.iter().enumerate() {
        match key {
            Key::Char(ch) => session.type_char(*ch),
            Key::Commit => session.commit(),
            Key::Backspace => session.delete_backward(),
            Key::Delete => session.delete_forward(),
        }
        session.pump();
        println!(
            "{:>3}  {:<7}  {:<32}  {:?}",
            step + 1,
            describe(*key),
            render_bar(&session.text(), session.selection()),
            session.mode()
        );
    }

    println!();
    println!("{}", effective_query(&session.text(), replay.flags));

    Ok(())
}

/// Read a JSON document and collect every object key in it
fn harvest_keys(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    let document: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
    Ok(document_keys(&document))
}

/// Short display form of a replay key
fn describe(key: Key) -> String {
    match key {
        Key::Char(ch) => format!("{:?}", ch),
        Key::Commit => "<tab>".to_string(),
        Key::Backspace => "<bs>".to_string(),
        Key::Delete => "<del>".to_string(),
    }
}

/// Render the bar with `|` at the caret and `[...]` around the selection.
/// A staged suggestion renders as e.g. `sel[|ect()]`.
fn render_bar(text: &str, selection: Selection) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    for offset in 0..=chars.len() {
        if !selection.is_empty() && offset == selection.start() {
            out.push('[');
        }
        if offset == selection.head {
            out.push('|');
        }
        if !selection.is_empty() && offset == selection.end() {
            out.push(']');
        }
        if let Some(&ch) = chars.get(offset) {
            if ch == '\t' {
                out.push_str("\\t");
            } else {
                out.push(ch);
            }
        }
    }
    out
}

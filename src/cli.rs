//! Command-line argument parsing for the replay harness
//!
//! Supports:
//! - Loading a JSON document to harvest completion keys from
//! - A keystroke script replayed through the edit session
//! - The helper toggles that wrap the final query

use clap::Parser;
use std::path::PathBuf;

use crate::query::QueryFlags;

/// Inline jq query bar with live completion
#[derive(Parser, Debug)]
#[command(name = "jqbar", version, about = "Inline jq query bar with live completion")]
pub struct CliArgs {
    /// JSON document whose keys feed the completion vocabulary
    #[arg(value_name = "DOCUMENT")]
    pub document: Option<PathBuf>,

    /// Keystrokes to replay: plain characters, \t commit, \b backspace,
    /// \d forward delete, \\ literal backslash
    #[arg(short = 's', long, value_name = "KEYS", default_value = "")]
    pub script: String,

    /// Pre-fill the bar with this text (pasted, no completion)
    #[arg(long, value_name = "TEXT")]
    pub initial: Option<String>,

    /// Append |keys to the query
    #[arg(long)]
    pub keys: bool,

    /// Append |select(.!=null) to the query
    #[arg(long)]
    pub filter_nulls: bool,

    /// Wrap the query as [q]|sort|.[]
    #[arg(long)]
    pub sort: bool,

    /// Wrap the query as [q]|unique|.[]
    #[arg(long)]
    pub unique: bool,

    /// Disable bracket/quote auto-pairing
    #[arg(long)]
    pub no_auto_pair: bool,

    /// Persist the effective configuration to the config file
    #[arg(long)]
    pub save_config: bool,
}

/// One keystroke of the replay script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// An ordinary character
    Char(char),
    /// The commit key, written `\t` in scripts
    Commit,
    /// Backspace
    Backspace,
    /// Forward delete
    Delete,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// JSON document to harvest keys from, if any
    pub document: Option<PathBuf>,
    /// Parsed keystroke sequence
    pub script: Vec<Key>,
    /// Text pasted into the bar before the script runs
    pub initial: Option<String>,
    /// Helper toggles for the final query
    pub flags: QueryFlags,
    /// Auto-pairing enabled
    pub auto_pair: bool,
    /// Write the effective configuration back to disk
    pub save_config: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a replay configuration
    pub fn into_config(self) -> Result<ReplayConfig, String> {
        let script = parse_script(&self.script)?;

        Ok(ReplayConfig {
            document: self.document,
            script,
            initial: self.initial,
            flags: QueryFlags {
                keys: self.keys,
                filter_nulls: self.filter_nulls,
                sort: self.sort,
                unique: self.unique,
            },
            auto_pair: !self.no_auto_pair,
            save_config: self.save_config,
        })
    }
}

/// Parse a keystroke script into keys.
///
/// Backslash escapes: `\t` commit, `\b` backspace, `\d` forward delete,
/// `\\` a literal backslash. Any other character is a plain keystroke.
fn parse_script(script: &str) -> Result<Vec<Key>, String> {
    let mut keys = Vec::new();
    let mut chars = script.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            keys.push(Key::Char(ch));
            continue;
        }
        match chars.next() {
            Some('t') => keys.push(Key::Commit),
            Some('b') => keys.push(Key::Backspace),
            Some('d') => keys.push(Key::Delete),
            Some('\\') => keys.push(Key::Char('\\')),
            Some(other) => return Err(format!("Unknown escape \\{} in script", other)),
            None => return Err("Trailing backslash in script".to_string()),
        }
    }
    Ok(keys)
}

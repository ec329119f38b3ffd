//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/jqbar/config.yaml`

use serde::{Deserialize, Serialize};

/// Query-bar configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Character that selects the per-document vocabulary when it precedes
    /// the token being completed (the jq path separator)
    #[serde(default = "default_trigger")]
    pub trigger: char,

    /// Auto-insert the matching closer when an opener is typed
    #[serde(default = "default_auto_pair")]
    pub auto_pair: bool,

    /// Text the commit key inserts when no suggestion is pending
    #[serde(default = "default_commit_fallback")]
    pub commit_fallback: String,
}

fn default_trigger() -> char {
    '.'
}

fn default_auto_pair() -> bool {
    true
}

fn default_commit_fallback() -> String {
    "\t".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            trigger: default_trigger(),
            auto_pair: default_auto_pair(),
            commit_fallback: default_commit_fallback(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

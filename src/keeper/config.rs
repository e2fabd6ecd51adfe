use crate::error::{KeeperError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_EDITOR_EXT: &str = ".md";

/// Configuration for keeper, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeeperConfig {
    /// Origin prefixed to share links (e.g., "https://notes.example.com")
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Extension of the scratch file handed to the editor
    #[serde(default = "default_editor_ext")]
    pub editor_ext: String,
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

fn default_editor_ext() -> String {
    DEFAULT_EDITOR_EXT.to_string()
}

impl Default for KeeperConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            editor_ext: default_editor_ext(),
        }
    }
}

impl KeeperConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(KeeperError::Io)?;
        let config: KeeperConfig =
            serde_json::from_str(&content).map_err(KeeperError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(KeeperError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(KeeperError::Serialization)?;
        fs::write(config_path, content).map_err(KeeperError::Io)?;
        Ok(())
    }

    /// Set the share origin. Must be an http(s) origin; a trailing slash is dropped.
    pub fn set_origin(&mut self, origin: &str) -> Result<()> {
        let origin = origin.trim().trim_end_matches('/');
        let host = origin
            .strip_prefix("https://")
            .or_else(|| origin.strip_prefix("http://"))
            .ok_or_else(|| {
                KeeperError::Config(format!(
                    "Origin must start with http:// or https://: {}",
                    origin
                ))
            })?;
        if host.is_empty() {
            return Err(KeeperError::Config("Origin has no host".to_string()));
        }
        self.origin = origin.to_string();
        Ok(())
    }

    /// Set the editor file extension (normalizes to start with a dot)
    pub fn set_editor_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.editor_ext = ext.to_string();
        } else {
            self.editor_ext = format!(".{}", ext);
        }
    }
}

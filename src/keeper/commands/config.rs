use crate::commands::{CmdMessage, CmdResult};
use crate::config::KeeperConfig;
use crate::error::{KeeperError, Result};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub const CONFIG_KEYS: &[&str] = &["origin", "editor-ext"];

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = KeeperConfig::load(data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = match key.as_str() {
                "origin" => config.origin.clone(),
                "editor-ext" => config.editor_ext.clone(),
                other => return Err(unknown_key(other)),
            };
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            return Ok(result);
        }
        ConfigAction::Set(key, value) => {
            match key.as_str() {
                "origin" => config.set_origin(&value)?,
                "editor-ext" => config.set_editor_ext(&value),
                other => return Err(unknown_key(other)),
            }
            config.save(data_dir)?;
            result.add_message(CmdMessage::success(format!("Set {}", key)));
        }
    }

    Ok(result.with_config(config))
}

fn unknown_key(key: &str) -> KeeperError {
    KeeperError::Config(format!(
        "Unknown config key: {} (known: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn show_all_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(KeeperConfig::default()));
    }

    #[test]
    fn set_origin_persists() {
        let dir = TempDir::new().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("origin".into(), "https://notes.example.com/".into()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowKey("origin".into())).unwrap();
        assert_eq!(
            result.messages[0].content,
            "origin = https://notes.example.com"
        );
    }

    #[test]
    fn invalid_origin_is_not_saved() {
        let dir = TempDir::new().unwrap();
        let err = run(
            dir.path(),
            ConfigAction::Set("origin".into(), "ftp://x".into()),
        )
        .unwrap_err();
        assert!(matches!(err, KeeperError::Config(_)));
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(run(dir.path(), ConfigAction::ShowKey("theme".into())).is_err());
    }
}

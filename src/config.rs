use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file with the initial projects; built-in samples when unset
    pub seed_path: Option<PathBuf>,
    pub log_level: String,
    /// Directory for rotated log files; `~/.project-board/logs` when unset
    pub log_dir: Option<PathBuf>,
    pub tick_rate_ms: u64,
    pub mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_path: None,
            log_level: "info".to_string(),
            log_dir: None,
            tick_rate_ms: 100,
            mouse: true,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".project-board"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the user config, falling back to defaults when there is none
    pub fn load() -> Result<Config> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Resolved log directory
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log_dir
            .clone()
            .or_else(|| Self::config_dir().map(|dir| dir.join("logs")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"log_level": "debug"}}"#).unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.tick_rate_ms, 100);
        assert!(config.mouse);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn test_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"seed_path": "/tmp/seeds.json", "log_level": "warn", "log_dir": "/tmp/logs", "tick_rate_ms": 250, "mouse": false}}"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/seeds.json")));
        assert_eq!(config.log_dir(), Some(PathBuf::from("/tmp/logs")));
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert!(!config.mouse);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn test_zero_tick_rate_is_clamped() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }
}

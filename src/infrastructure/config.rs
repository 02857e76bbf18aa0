//! Configuration management

use crate::error::{MoodriseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Check-in cadence settings. The daily cap lives in the key-value
/// store (DAILY_CAP_MIN), not here, so that it shares the namespace
/// with the per-day counters it gates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Minutes into a session before the first check-in prompt
    #[serde(default = "default_first_check_min")]
    pub first_check_min: u32,
    /// Minutes between subsequent check-in prompts
    #[serde(default = "default_check_in_interval_min")]
    pub check_in_interval_min: u32,
}

fn default_first_check_min() -> u32 {
    5
}

fn default_check_in_interval_min() -> u32 {
    15
}

impl Default for Config {
    fn default() -> Self {
        Config {
            first_check_min: default_first_check_min(),
            check_in_interval_min: default_check_in_interval_min(),
        }
    }
}

impl Config {
    /// Load config from .moodrise/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".moodrise").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodriseError::NotMoodriseDirectory(path.to_path_buf())
            } else {
                MoodriseError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodriseError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodrise/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let moodrise_dir = path.join(".moodrise");
        let config_path = moodrise_dir.join("config.toml");

        if !moodrise_dir.exists() {
            fs::create_dir(&moodrise_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodriseError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_cadence() {
        let config = Config::default();
        assert_eq!(config.first_check_min, 5);
        assert_eq!(config.check_in_interval_min, 15);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            first_check_min: 2,
            check_in_interval_min: 30,
        };

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".moodrise").exists());
        assert!(temp.path().join(".moodrise/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            MoodriseError::NotMoodriseDirectory(_) => {}
            _ => panic!("Expected NotMoodriseDirectory error"),
        }
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".moodrise");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("config.toml"), "first_check_min = 1\n").unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.first_check_min, 1);
        assert_eq!(loaded.check_in_interval_min, 15);
    }
}

//! Config management use case

use crate::error::{MoodriseError, Result};
use crate::infrastructure::{FileSystemRepository, MoodStore, WellnessRepository};

/// Service for managing settings. Fronts both the TOML config
/// (check-in cadence) and the store-backed daily cap, so all knobs
/// share one command.
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "daily-cap" => {
                let store = MoodStore::open(self.repository.root())?;
                Ok(store.daily_cap_min().to_string())
            }
            "first-check-min" => {
                let config = self.repository.load_config()?;
                Ok(config.first_check_min.to_string())
            }
            "check-in-interval-min" => {
                let config = self.repository.load_config()?;
                Ok(config.check_in_interval_min.to_string())
            }
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let minutes = parse_minutes(key, value)?;

        match key {
            "daily-cap" => {
                let mut store = MoodStore::open(self.repository.root())?;
                store.set_daily_cap_min(minutes)?;
            }
            "first-check-min" => {
                let mut config = self.repository.load_config()?;
                config.first_check_min = minutes;
                self.repository.save_config(&config)?;
            }
            "check-in-interval-min" => {
                let mut config = self.repository.load_config()?;
                config.check_in_interval_min = minutes;
                self.repository.save_config(&config)?;
            }
            _ => return Err(unknown_key(key)),
        }

        Ok(())
    }

    /// List all config values as (key, value) pairs
    pub fn list(&self) -> Result<Vec<(String, String)>> {
        let config = self.repository.load_config()?;
        let store = MoodStore::open(self.repository.root())?;

        Ok(vec![
            ("daily-cap".to_string(), store.daily_cap_min().to_string()),
            (
                "first-check-min".to_string(),
                config.first_check_min.to_string(),
            ),
            (
                "check-in-interval-min".to_string(),
                config.check_in_interval_min.to_string(),
            ),
        ])
    }
}

fn unknown_key(key: &str) -> MoodriseError {
    MoodriseError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: daily-cap, first-check-min, check-in-interval-min",
        key
    ))
}

fn parse_minutes(key: &str, value: &str) -> Result<u32> {
    match value.parse::<u32>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(MoodriseError::Config(format!(
            "Invalid value for '{}': '{}'. Expected a positive number of minutes.",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Config;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::default()).unwrap();
        ConfigService::new(repo)
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let svc = service(&temp);

        assert_eq!(svc.get("daily-cap").unwrap(), "60");
        assert_eq!(svc.get("first-check-min").unwrap(), "5");
        assert_eq!(svc.get("check-in-interval-min").unwrap(), "15");
    }

    #[test]
    fn test_set_daily_cap_goes_to_store() {
        let temp = TempDir::new().unwrap();
        let svc = service(&temp);

        svc.set("daily-cap", "45").unwrap();
        assert_eq!(svc.get("daily-cap").unwrap(), "45");

        // The cadence config is untouched.
        assert_eq!(svc.get("first-check-min").unwrap(), "5");
    }

    #[test]
    fn test_set_cadence_persists() {
        let temp = TempDir::new().unwrap();
        let svc = service(&temp);

        svc.set("check-in-interval-min", "20").unwrap();
        assert_eq!(svc.get("check-in-interval-min").unwrap(), "20");
    }

    #[test]
    fn test_unknown_key_fails() {
        let temp = TempDir::new().unwrap();
        let svc = service(&temp);

        assert!(svc.get("editor").is_err());
        assert!(svc.set("editor", "vim").is_err());
    }

    #[test]
    fn test_invalid_values_fail() {
        let temp = TempDir::new().unwrap();
        let svc = service(&temp);

        assert!(svc.set("daily-cap", "0").is_err());
        assert!(svc.set("daily-cap", "-3").is_err());
        assert!(svc.set("daily-cap", "lots").is_err());
    }

    #[test]
    fn test_list_contains_all_keys() {
        let temp = TempDir::new().unwrap();
        let svc = service(&temp);

        let entries = svc.list().unwrap();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["daily-cap", "first-check-min", "check-in-interval-min"]
        );
    }
}

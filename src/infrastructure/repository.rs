//! File system repository

use crate::error::{MoodriseError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for wellness data operations
pub trait WellnessRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodrise/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodrise/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodrise directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodrise directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of WellnessRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the data root by walking up from the current directory.
    /// First checks the MOODRISE_ROOT environment variable, then falls
    /// back to discovery.
    pub fn discover() -> Result<Self> {
        // 1. Check MOODRISE_ROOT environment variable first
        if let Ok(root_path) = std::env::var("MOODRISE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_moodrise_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodriseError::Config(format!(
                    "MOODRISE_ROOT is set to '{}' but no .moodrise directory found. \
                    Run 'moodrise init' in that directory or unset MOODRISE_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the data root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_moodrise_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .moodrise
                    return Err(MoodriseError::NotMoodriseDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .moodrise directory
    fn has_moodrise_dir(path: &Path) -> bool {
        path.join(".moodrise").is_dir()
    }
}

impl WellnessRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_moodrise_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let moodrise_dir = self.root.join(".moodrise");

        if moodrise_dir.exists() {
            return Err(MoodriseError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&moodrise_dir)?;
        Ok(())
    }
}

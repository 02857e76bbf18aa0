//! Initialize data directory use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, WellnessRepository};
use std::fs;
use std::path::Path;

/// Initialize a new moodrise data directory at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .moodrise directory
    repo.initialize()?;

    // Save default config
    repo.save_config(&Config::default())?;

    println!("Initialized moodrise data directory at {}", path.display());

    Ok(())
}

//! Cross-platform application paths

use std::path::{Path, PathBuf};

const APP_DIR: &str = "hebrew-wordle";

/// Where the game keeps its files
#[derive(Debug, Clone)]
pub struct AppPaths {
    data_dir: PathBuf,
}

impl AppPaths {
    /// Use the platform data directory, falling back to the working directory
    #[must_use]
    pub fn from_platform() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(APP_DIR))
    }

    #[must_use]
    pub const fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("hebrew-wordle.log")
    }
}

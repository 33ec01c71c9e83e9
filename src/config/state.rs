// Application state module
// Read-only state shared by every connection

use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::StartupError;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Canonical root directory, resolved once at startup
    pub root: PathBuf,
}

impl AppState {
    /// Build state from configuration, canonicalizing the root directory
    pub fn new(config: &Config) -> Result<Self, StartupError> {
        let root_path = Path::new(&config.server.root);
        let root = root_path
            .canonicalize()
            .map_err(|source| StartupError::Root {
                path: root_path.to_path_buf(),
                source,
            })?;

        if !root.is_dir() {
            return Err(StartupError::Root {
                path: root,
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "not a directory",
                ),
            });
        }

        Ok(Self {
            config: config.clone(),
            root,
        })
    }
}

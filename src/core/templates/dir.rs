//! Templates directory resolution

use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::core::error::{Result, ScaffoldError};

/// Name of the directory holding `*.tmpl` files
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// A resolved directory of `*.tmpl` files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatesDir {
    path: PathBuf,
}

impl TemplatesDir {
    /// Use the configured directory when given, otherwise search the
    /// standard locations for a `templates/` directory.
    pub fn discover(configured: Option<&Path>) -> Result<Self> {
        Self::discover_in(configured, &Self::search_locations())
    }

    /// [`TemplatesDir::discover`] with explicit search locations
    pub fn discover_in(configured: Option<&Path>, locations: &[PathBuf]) -> Result<Self> {
        if let Some(dir) = configured {
            debug!("Using configured templates directory: {}", dir.display());
            if !dir.is_dir() {
                error!("Configured templates directory not found: {}", dir.display());
                return Err(ScaffoldError::TemplatesNotFound {
                    searched: dir.display().to_string(),
                });
            }
            return Ok(Self {
                path: dir.to_path_buf(),
            });
        }

        debug!("Auto-discovering templates directory...");
        match locations
            .iter()
            .map(|location| location.join(TEMPLATES_DIR_NAME))
            .find(|candidate| candidate.is_dir())
        {
            Some(path) => {
                info!("Using templates directory: {}", path.display());
                Ok(Self { path })
            }
            None => {
                error!("Could not find templates directory in any standard location");
                Err(ScaffoldError::TemplatesNotFound {
                    searched: locations
                        .iter()
                        .map(|l| l.display().to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                })
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }

    /// Get list of locations to search for a `templates/` directory
    fn search_locations() -> Vec<PathBuf> {
        let mut locations = Vec::new();

        // Executable directory and its parent (installed layout)
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                if let Ok(exe_dir_abs) = exe_dir.canonicalize() {
                    locations.push(exe_dir_abs.clone());
                    if let Some(parent_dir) = exe_dir_abs.parent() {
                        locations.push(parent_dir.to_path_buf());
                    }
                }
            }
        }

        if let Ok(current_dir) = std::env::current_dir() {
            locations.push(current_dir);
        }

        // Crate root, for `cargo run` during development
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            locations.push(PathBuf::from(manifest_dir));
        }
        locations.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));

        if let Some(config_dir) = dirs::config_dir() {
            locations.push(config_dir.join("csscaffold"));
        }

        locations
    }
}

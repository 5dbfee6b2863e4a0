//! Upward search for project files and the reader capability.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use globset::{Glob, GlobMatcher};
use tokio::fs;
use tracing::{debug, warn};

/// Read access to a discovered project file
#[async_trait]
pub trait ProjectReader: Send + Sync {
    /// Path of the project file this reader was created for
    fn file_path(&self) -> &Path;

    /// The first root namespace declared by the project, if any
    async fn root_namespace(&self) -> Option<String>;

    /// Whether the project's language version allows `namespace X;`
    async fn supports_file_scoped_namespaces(&self) -> bool;
}

/// Finds the nearest project file upwards from `from_path`.
///
/// Patterns are tried in order; a later pattern is only used when the
/// earlier ones match nothing between the start directory and the root.
/// Unreadable directories and invalid patterns count as no match. A relative
/// `from_path` is resolved against the current directory first.
pub async fn find_project_path(from_path: &Path, file_patterns: &[&str]) -> Option<PathBuf> {
    let from_path = absolute_path(from_path);
    let start = from_path.parent()?;

    for pattern in file_patterns {
        let matcher = match Glob::new(pattern) {
            Ok(glob) => glob.compile_matcher(),
            Err(e) => {
                warn!(pattern = %pattern, error = %e, "Ignoring invalid project file pattern");
                continue;
            }
        };

        for dir in start.ancestors() {
            if let Some(found) = first_match_in(dir, &matcher).await {
                debug!(pattern = %pattern, path = %found.display(), "Found project file");
                return Some(found);
            }
        }
    }

    debug!(from = %from_path.display(), "No project file found");
    None
}

/// `path` made absolute without touching the file system. Falls back to the
/// path as given when the current directory is unavailable.
pub fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "Could not make path absolute");
        path.to_path_buf()
    })
}

/// First file in `dir` whose name matches, in file-name order
async fn first_match_in(dir: &Path, matcher: &GlobMatcher) -> Option<PathBuf> {
    let mut entries = fs::read_dir(dir).await.ok()?;
    let mut matches = Vec::new();

    while let Ok(Some(entry)) = entries.next_entry().await {
        let is_file = entry
            .file_type()
            .await
            .map(|t| t.is_file())
            .unwrap_or(false);
        if is_file && matcher.is_match(entry.file_name()) {
            matches.push(entry.path());
        }
    }

    matches.sort();
    matches.into_iter().next()
}

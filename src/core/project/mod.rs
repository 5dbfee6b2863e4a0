//! Project file discovery
//!
//! Locates the nearest `.csproj` (or legacy `project.json`) above a file and
//! exposes what the generators need from it through [`ProjectReader`].

pub mod csproj;
pub mod project_json;
pub mod reader;

use std::fmt;
use std::path::{Path, PathBuf};

pub use csproj::{CsProjProperties, CsProjReader};
pub use project_json::ProjectJsonReader;
pub use reader::{ProjectReader, absolute_path, find_project_path};

/// Supported project file formats, in lookup priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectFormat {
    /// MSBuild project (`*.csproj`)
    CsProj,
    /// DNX-era `project.json`
    ProjectJson,
}

impl ProjectFormat {
    /// Every format, most preferred first
    pub fn all() -> &'static [ProjectFormat] {
        &[Self::CsProj, Self::ProjectJson]
    }

    /// File-name glob patterns identifying this format
    pub fn patterns(&self) -> &'static [&'static str] {
        match self {
            Self::CsProj => &["*.csproj"],
            Self::ProjectJson => &["project.json"],
        }
    }

    /// Create the reader for a project file of this format
    pub fn reader(&self, file_path: PathBuf) -> Box<dyn ProjectReader> {
        match self {
            Self::CsProj => Box::new(CsProjReader::new(file_path)),
            Self::ProjectJson => Box::new(ProjectJsonReader::new(file_path)),
        }
    }

    /// Find the nearest project of this format above `from_path`
    pub async fn find(&self, from_path: &Path) -> Option<Box<dyn ProjectReader>> {
        find_project_path(from_path, self.patterns())
            .await
            .map(|path| self.reader(path))
    }

    /// Find the nearest project, trying each format in priority order
    pub async fn find_any(from_path: &Path) -> Option<Box<dyn ProjectReader>> {
        for format in Self::all() {
            if let Some(reader) = format.find(from_path).await {
                return Some(reader);
            }
        }
        None
    }
}

impl fmt::Display for ProjectFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CsProj => write!(f, "csproj"),
            Self::ProjectJson => write!(f, "project.json"),
        }
    }
}

//! Template definitions

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::kind::{COMMAND_PREFIX, TemplateKind};

/// Usings added to every file when `include_optional_usings` is set
pub const OPTIONAL_USINGS: &[&str] = &[
    "System",
    "System.Collections.Generic",
    "System.Linq",
    "System.Threading.Tasks",
];

/// Extension of generated C# sources
pub const CSHARP_EXTENSION: &str = ".cs";

/// A named template and what it produces. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    command: String,
    required_usings: Vec<String>,
    extensions: Vec<String>,
}

impl Template {
    /// A C# template producing a single `.cs` file
    pub fn csharp<I, S>(name: &str, command: &str, required_usings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            command: command.to_string(),
            required_usings: required_usings.into_iter().map(Into::into).collect(),
            extensions: vec![CSHARP_EXTENSION.to_string()],
        }
    }

    /// The built-in template for `kind`
    pub fn from_kind(kind: TemplateKind) -> Self {
        Self::csharp(
            kind.display_name(),
            kind.command_name(),
            kind.required_usings().iter().copied(),
        )
    }

    /// Display name, also the default file name offered to the user
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully qualified command identifier
    pub fn command(&self) -> String {
        format!("{COMMAND_PREFIX}.{}", self.command)
    }

    pub fn required_usings(&self) -> &[String] {
        &self.required_usings
    }

    /// Extensions of the files this template writes, with leading dot
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Template file stem; template files are always lower-case
    pub fn file_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// `<templates_dir>/<file_name>.tmpl`
    pub fn template_path(&self, templates_dir: &Path) -> PathBuf {
        templates_dir.join(format!("{}.tmpl", self.file_name()))
    }

    /// Primary output path for a path without extension
    pub fn output_path(&self, path_without_extension: &Path) -> PathBuf {
        let extension = self
            .extensions
            .first()
            .map(String::as_str)
            .unwrap_or(CSHARP_EXTENSION);
        with_extension_suffix(path_without_extension, extension)
    }

    /// Every output file that already exists for `path_without_extension`.
    ///
    /// Probe failures count as "does not exist"; nothing is modified.
    pub async fn existing_files(&self, path_without_extension: &Path) -> Vec<PathBuf> {
        let mut existing = Vec::new();

        for extension in &self.extensions {
            let full_path = with_extension_suffix(path_without_extension, extension);
            if tokio::fs::try_exists(&full_path).await.unwrap_or(false) {
                debug!(path = %full_path.display(), "Target file already exists");
                existing.push(full_path);
            }
        }

        existing
    }

    /// The using block for `${namespaces}`.
    ///
    /// Deduplicated, `System` group first, then lexicographic; followed by a
    /// blank line. Empty when there is nothing to import.
    pub fn usings_block(&self, include_optional: bool) -> String {
        let mut usings: Vec<&str> = self.required_usings.iter().map(String::as_str).collect();
        if include_optional {
            usings.extend(OPTIONAL_USINGS.iter().copied());
        }
        format_usings(usings)
    }
}

/// Deduplicate, order and render a list of usings
pub fn format_usings<'a, I>(usings: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let unique: BTreeSet<&str> = usings
        .into_iter()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .collect();
    if unique.is_empty() {
        return String::new();
    }

    let mut sorted: Vec<&str> = unique.into_iter().collect();
    sorted.sort_by_key(|using| (!is_system_namespace(using), *using));

    let mut block: String = sorted
        .iter()
        .map(|using| format!("using {using};\n"))
        .collect();
    block.push('\n');
    block
}

fn is_system_namespace(using: &str) -> bool {
    using.starts_with("System")
}

/// Appends an extension without touching dots already in the file name
fn with_extension_suffix(path: &Path, extension: &str) -> PathBuf {
    let mut raw = path.as_os_str().to_owned();
    raw.push(extension);
    PathBuf::from(raw)
}

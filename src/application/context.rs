//! Command context: where a command was invoked from

use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;

/// The path a command was invoked on, by the field the host put it in.
///
/// Hosts hand commands a URI-like object whose path may live in `_fsPath`,
/// `fsPath` or `path`; this is resolved once at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandContext {
    /// Cached file-system path (`_fsPath`)
    CachedFsPath(PathBuf),
    /// File-system path (`fsPath`)
    FsPath(PathBuf),
    /// Raw URI path (`path`)
    UriPath(PathBuf),
}

impl CommandContext {
    /// Read a context argument, trying `_fsPath`, `fsPath` and `path` in
    /// that order. Empty or non-string fields are skipped.
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(JsonValue::as_str)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        };

        field("_fsPath")
            .map(Self::CachedFsPath)
            .or_else(|| field("fsPath").map(Self::FsPath))
            .or_else(|| field("path").map(Self::UriPath))
    }

    /// The normalised directory path
    pub fn path(&self) -> &Path {
        match self {
            Self::CachedFsPath(path) | Self::FsPath(path) | Self::UriPath(path) => path,
        }
    }

    pub fn into_path(self) -> PathBuf {
        match self {
            Self::CachedFsPath(path) | Self::FsPath(path) | Self::UriPath(path) => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_priority() {
        let all = json!({ "_fsPath": "/a", "fsPath": "/b", "path": "/c" });
        assert_eq!(
            CommandContext::from_json(&all),
            Some(CommandContext::CachedFsPath(PathBuf::from("/a")))
        );

        let two = json!({ "fsPath": "/b", "path": "/c" });
        assert_eq!(
            CommandContext::from_json(&two),
            Some(CommandContext::FsPath(PathBuf::from("/b")))
        );

        let one = json!({ "scheme": "file", "path": "/c" });
        assert_eq!(
            CommandContext::from_json(&one).unwrap().into_path(),
            PathBuf::from("/c")
        );
    }

    #[test]
    fn test_empty_and_non_string_fields_are_skipped() {
        let value = json!({ "_fsPath": "", "fsPath": 7, "path": "/c" });
        assert_eq!(
            CommandContext::from_json(&value),
            Some(CommandContext::UriPath(PathBuf::from("/c")))
        );
    }

    #[test]
    fn test_no_path() {
        assert_eq!(CommandContext::from_json(&json!({ "scheme": "untitled" })), None);
        assert_eq!(CommandContext::from_json(&json!("just a string")), None);
    }
}

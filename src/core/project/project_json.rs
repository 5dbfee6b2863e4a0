//! Legacy DNX `project.json` reader

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::warn;

use super::reader::ProjectReader;

/// Reader for `project.json` files
#[derive(Debug, Clone)]
pub struct ProjectJsonReader {
    file_path: PathBuf,
}

impl ProjectJsonReader {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}

/// `tooling.defaultNamespace`, if present and a non-empty string
fn default_namespace(json: &JsonValue) -> Option<String> {
    json.get("tooling")?
        .get("defaultNamespace")?
        .as_str()
        .map(str::trim)
        .filter(|ns| !ns.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl ProjectReader for ProjectJsonReader {
    fn file_path(&self) -> &Path {
        &self.file_path
    }

    async fn root_namespace(&self) -> Option<String> {
        let content = tokio::fs::read_to_string(&self.file_path).await.ok()?;
        match serde_json::from_str::<JsonValue>(&content) {
            Ok(json) => default_namespace(&json),
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "Malformed project.json");
                None
            }
        }
    }

    // project.json predates C# 10
    async fn supports_file_scoped_namespaces(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_default_namespace() {
        let json = json!({ "version": "1.0.0-*", "tooling": { "defaultNamespace": "Legacy.Web" } });
        assert_eq!(default_namespace(&json).as_deref(), Some("Legacy.Web"));
    }

    #[test]
    fn test_default_namespace_missing_or_blank() {
        assert_eq!(default_namespace(&json!({ "version": "1.0.0" })), None);
        assert_eq!(default_namespace(&json!({ "tooling": {} })), None);
        assert_eq!(
            default_namespace(&json!({ "tooling": { "defaultNamespace": "  " } })),
            None
        );
        assert_eq!(
            default_namespace(&json!({ "tooling": { "defaultNamespace": 42 } })),
            None
        );
    }

    #[tokio::test]
    async fn test_reader_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("project.json");
        std::fs::write(&path, r#"{ "tooling": { "defaultNamespace": "Legacy" } }"#).unwrap();

        let reader = ProjectJsonReader::new(path);
        assert_eq!(reader.root_namespace().await.as_deref(), Some("Legacy"));
        assert!(!reader.supports_file_scoped_namespaces().await);
    }

    #[tokio::test]
    async fn test_reader_malformed_json_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("project.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert_eq!(ProjectJsonReader::new(path).root_namespace().await, None);
    }
}

//! Namespace detection for new files

use std::path::{Component, Path};

use async_trait::async_trait;
use tracing::debug;

use crate::core::project::{ProjectFormat, absolute_path};
use crate::core::utils::to_identifier;

/// Used when neither a project nor a directory name yields a namespace
pub const FALLBACK_NAMESPACE: &str = "Namespace";

/// Resolves the namespace a new file should declare
#[async_trait]
pub trait NamespaceResolver: Send + Sync {
    async fn namespace_for(&self, file_path: &Path) -> String;
}

/// Derives the namespace from the nearest project file and the directories
/// between it and the new file.
///
/// `src/Contoso.Shop.csproj` + `src/Models/Orders/Order.cs` gives
/// `Contoso.Shop.Models.Orders` (or the project's `RootNamespace` in place of
/// the file stem). Without a project the file's directory name is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectNamespaceDetector;

impl ProjectNamespaceDetector {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NamespaceResolver for ProjectNamespaceDetector {
    async fn namespace_for(&self, file_path: &Path) -> String {
        let file_path = absolute_path(file_path);
        let file_dir = file_path.parent().unwrap_or(Path::new(""));

        let Some(project) = ProjectFormat::find_any(&file_path).await else {
            let namespace = file_dir
                .file_name()
                .and_then(|n| to_identifier(&n.to_string_lossy()))
                .unwrap_or_else(|| FALLBACK_NAMESPACE.to_string());
            debug!(namespace = %namespace, "No project file, using directory name");
            return namespace;
        };

        let project_path = project.file_path();
        let root = match project.root_namespace().await {
            Some(root) => root,
            None => project_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };

        let mut segments: Vec<String> = root.split('.').filter_map(to_identifier).collect();

        let project_dir = project_path.parent().unwrap_or(Path::new(""));
        if let Ok(relative) = file_dir.strip_prefix(project_dir) {
            segments.extend(relative.components().filter_map(|c| match c {
                Component::Normal(part) => to_identifier(&part.to_string_lossy()),
                _ => None,
            }));
        }

        let namespace = if segments.is_empty() {
            FALLBACK_NAMESPACE.to_string()
        } else {
            segments.join(".")
        };

        debug!(
            project = %project_path.display(),
            namespace = %namespace,
            "Detected namespace"
        );
        namespace
    }
}

/// Always answers with the same namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedNamespace(pub String);

#[async_trait]
impl NamespaceResolver for FixedNamespace {
    async fn namespace_for(&self, _file_path: &Path) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn test_root_namespace_plus_relative_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(
            &root.join("Shop.csproj"),
            "<Project><PropertyGroup><RootNamespace>Contoso.Shop</RootNamespace></PropertyGroup></Project>",
        );
        std::fs::create_dir_all(root.join("Models/Orders")).unwrap();

        let namespace = ProjectNamespaceDetector::new()
            .namespace_for(&root.join("Models/Orders/Order.cs"))
            .await;
        assert_eq!(namespace, "Contoso.Shop.Models.Orders");
    }

    #[tokio::test]
    async fn test_project_stem_when_no_root_namespace() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(&root.join("My-App.csproj"), "<Project Sdk=\"Microsoft.NET.Sdk\" />");
        std::fs::create_dir_all(root.join("2024 Reports")).unwrap();

        let namespace = ProjectNamespaceDetector::new()
            .namespace_for(&root.join("2024 Reports/Summary.cs"))
            .await;
        assert_eq!(namespace, "My_App._2024_Reports");
    }

    #[tokio::test]
    async fn test_file_next_to_project() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(
            &root.join("Api.csproj"),
            "<Project><PropertyGroup><RootNamespace>Api</RootNamespace></PropertyGroup></Project>",
        );

        let namespace = ProjectNamespaceDetector::new()
            .namespace_for(&root.join("Program.cs"))
            .await;
        assert_eq!(namespace, "Api");
    }

    #[tokio::test]
    async fn test_directory_name_without_project() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("no-project-here");
        std::fs::create_dir_all(&dir).unwrap();

        let namespace = ProjectNamespaceDetector::new()
            .namespace_for(&dir.join("Foo.cs"))
            .await;
        assert_eq!(namespace, "no_project_here");
    }

    #[tokio::test]
    async fn test_relative_path_matches_absolute_path() {
        let temp_dir = TempDir::new_in(".").unwrap();
        let root = temp_dir.path();
        write(
            &root.join("App.csproj"),
            "<Project><PropertyGroup><RootNamespace>App</RootNamespace></PropertyGroup></Project>",
        );
        std::fs::create_dir_all(root.join("Models")).unwrap();

        let detector = ProjectNamespaceDetector::new();
        let relative = detector.namespace_for(&root.join("Models/Foo.cs")).await;
        let absolute = detector
            .namespace_for(&root.canonicalize().unwrap().join("Models/Foo.cs"))
            .await;

        assert_eq!(relative, "App.Models");
        assert_eq!(relative, absolute);
    }

    #[tokio::test]
    async fn test_fixed_namespace() {
        let resolver = FixedNamespace("MyApp".to_string());
        assert_eq!(resolver.namespace_for(Path::new("/any/Foo.cs")).await, "MyApp");
    }
}

//! Template loading and file generation.
//!
//! The `TemplateManager` turns a template plus a target file name into a
//! written source file:
//! 1. **Loading**: read `<templates_dir>/<name>.tmpl`
//! 2. **Conversion**: switch to a file-scoped namespace when configured
//! 3. **Namespace**: ask the [`NamespaceResolver`] for the target's namespace
//! 4. **Rendering**: substitute tokens, normalise line endings, find the cursor
//! 5. **Writing**: write the result next to the other sources
//!
//! Every stage wraps its failure in a stage-specific [`ScaffoldError`].

// Internal imports (std, crate)
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::{
    config::Settings,
    error::{Result, ScaffoldError},
    namespace::{FileScopedNamespaceConverter, NamespaceResolver, ProjectNamespaceDetector},
};

use super::{
    Template,
    tokens::{CursorPosition, TokenSet},
};

// External imports (alphabetized)
use tracing::{debug, info};

/// A file produced from a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
    /// Where the editor should place the cursor, if the template marks one
    pub cursor: Option<CursorPosition>,
}

/// Loads templates and generates files from them
#[derive(Clone)]
pub struct TemplateManager {
    templates_dir: PathBuf,
    settings: Settings,
    namespace_resolver: Arc<dyn NamespaceResolver>,
}

impl std::fmt::Debug for TemplateManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateManager")
            .field("templates_dir", &self.templates_dir)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl TemplateManager {
    /// Create a manager reading templates from `templates_dir`, detecting
    /// namespaces from project files
    pub fn new(templates_dir: impl Into<PathBuf>, settings: Settings) -> Self {
        Self {
            templates_dir: templates_dir.into(),
            settings,
            namespace_resolver: Arc::new(ProjectNamespaceDetector::new()),
        }
    }

    /// Replace the namespace resolver
    pub fn with_namespace_resolver(mut self, resolver: Arc<dyn NamespaceResolver>) -> Self {
        self.namespace_resolver = resolver;
        self
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read the raw template body
    pub async fn load_template(&self, template: &Template) -> Result<String> {
        let path = template.template_path(&self.templates_dir);
        debug!(path = %path.display(), "Loading template");

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ScaffoldError::TemplateRead { path, source })
    }

    /// Build the final text for `file_path` from a raw template body.
    ///
    /// `class_name` is the file name without extension. Nothing is written.
    pub async fn render(
        &self,
        template: &Template,
        raw: &str,
        file_path: &Path,
        class_name: &str,
    ) -> Result<GeneratedFile> {
        if class_name.trim().is_empty() {
            return Err(ScaffoldError::build_text("the file name is empty"));
        }

        let converter = FileScopedNamespaceConverter::new(self.settings.file_scoped_namespace);
        let text = converter.convert_if_necessary(raw, file_path).await;

        let namespace = self.namespace_resolver.namespace_for(file_path).await;
        let usings = template.usings_block(self.settings.include_optional_usings);
        let tokens = TokenSet::new(class_name, &namespace, &usings);
        debug!(?tokens, "Resolved template tokens");

        let (content, cursor) = tokens.render(&text, self.settings.eol.as_str());

        Ok(GeneratedFile {
            path: file_path.to_path_buf(),
            content,
            cursor,
        })
    }

    /// Generate and write the file for `path_without_extension`
    pub async fn create(
        &self,
        template: &Template,
        path_without_extension: &Path,
        class_name: &str,
    ) -> Result<GeneratedFile> {
        let raw = self.load_template(template).await?;
        let file_path = template.output_path(path_without_extension);

        let generated = self.render(template, &raw, &file_path, class_name).await?;

        tokio::fs::write(&generated.path, &generated.content)
            .await
            .map_err(|source| ScaffoldError::FileWrite {
                path: generated.path.clone(),
                source,
            })?;

        info!(
            template = %template.name(),
            path = %generated.path.display(),
            "Created file from template"
        );
        Ok(generated)
    }
}

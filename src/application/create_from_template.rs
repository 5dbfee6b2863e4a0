//! Use case for creating a file from a template

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{CommandContext, EditorHost, NamePrompt};
use crate::core::config::Settings;
use crate::core::error::{Result, ScaffoldError};
use crate::core::namespace::NamespaceResolver;
use crate::core::templates::{
    CSHARP_EXTENSION, GeneratedFile, Template, TemplateManager, TemplatesDir,
};

const NAME_PROMPT: &str = "Please enter a name for the new file(s)";

/// Result of one command invocation that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The file was written and handed to the editor
    Created(GeneratedFile),
    /// The user dismissed the name prompt
    Cancelled,
}

/// Use case for creating a file from a template
pub struct CreateFromTemplateUseCase {
    settings: Settings,
    prompt: Arc<dyn NamePrompt>,
    host: Arc<dyn EditorHost>,
    namespace_resolver: Option<Arc<dyn NamespaceResolver>>,
}

impl CreateFromTemplateUseCase {
    pub fn new(settings: Settings, prompt: Arc<dyn NamePrompt>, host: Arc<dyn EditorHost>) -> Self {
        Self {
            settings,
            prompt,
            host,
            namespace_resolver: None,
        }
    }

    /// Use a fixed resolver instead of detecting namespaces from projects
    pub fn with_namespace_resolver(mut self, resolver: Arc<dyn NamespaceResolver>) -> Self {
        self.namespace_resolver = Some(resolver);
        self
    }

    pub fn host(&self) -> &dyn EditorHost {
        self.host.as_ref()
    }

    /// Directory the new file goes into: the context path, else the first
    /// workspace root
    pub fn incoming_path(&self, context: Option<&CommandContext>) -> Option<PathBuf> {
        match context {
            Some(context) => Some(context.path().to_path_buf()),
            None => self.host.workspace_roots().into_iter().next(),
        }
    }

    pub async fn execute(
        &self,
        template: &Template,
        context: Option<&CommandContext>,
    ) -> Result<CreateOutcome> {
        // 1. Resolve output directory
        let incoming_path = self.incoming_path(context).ok_or(ScaffoldError::NoPath)?;
        debug!(path = %incoming_path.display(), "Resolved output directory");

        // 2. Locate templates
        let templates_dir = TemplatesDir::discover(self.settings.templates_dir.as_deref())?;

        // 3. Ask for the file name
        let Some(file_name) = self
            .prompt
            .ask_file_name(NAME_PROMPT, template.name())
            .await?
            .map(|name| strip_source_extension(name.trim()).to_string())
            .filter(|name| !name.is_empty())
        else {
            info!("Filename request: User did not provide any input");
            return Ok(CreateOutcome::Cancelled);
        };

        // 4. Refuse to overwrite
        let path_without_extension = incoming_path.join(&file_name);
        let existing_files = template.existing_files(&path_without_extension).await;
        if !existing_files.is_empty() {
            return Err(ScaffoldError::FilesExist(existing_files));
        }

        // 5. Generate
        let mut manager = TemplateManager::new(templates_dir.into_path(), self.settings.clone());
        if let Some(resolver) = &self.namespace_resolver {
            manager = manager.with_namespace_resolver(Arc::clone(resolver));
        }
        let generated = manager
            .create(template, &path_without_extension, &file_name)
            .await
            .map_err(|e| {
                e.context(format!(
                    "Error trying to create new {} at {}",
                    template.name(),
                    path_without_extension.display()
                ))
            })?;

        // 6. Open in the editor
        self.host
            .open_document(&generated.path, generated.cursor)
            .await
            .map_err(|source| ScaffoldError::OpenDocument {
                path: generated.path.clone(),
                source,
            })?;

        Ok(CreateOutcome::Created(generated))
    }
}

/// Drop a `.cs` the user typed themselves
pub fn strip_source_extension(name: &str) -> &str {
    name.strip_suffix(CSHARP_EXTENSION).unwrap_or(name)
}

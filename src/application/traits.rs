//! Port interfaces for the application layer

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::core::Result;
use crate::core::templates::CursorPosition;

/// Asks the user for the name of the file to create
#[async_trait]
pub trait NamePrompt: Send + Sync {
    /// Returns `None` when the user dismisses the prompt
    async fn ask_file_name(&self, prompt: &str, default: &str) -> Result<Option<String>>;
}

/// The editor hosting the commands
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Open workspace folders, first one preferred
    fn workspace_roots(&self) -> Vec<PathBuf>;

    /// Open the document and place the cursor, if there is one
    async fn open_document(
        &self,
        path: &Path,
        cursor: Option<CursorPosition>,
    ) -> std::io::Result<()>;

    /// Show an error message to the user
    fn show_error(&self, message: &str);
}

//! Terminal implementations of the editor ports

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::application::{EditorHost, NamePrompt};
use crate::core::error::{Result, ScaffoldError};
use crate::core::templates::CursorPosition;

/// Reads the file name from stdin, or answers with a preset name.
///
/// An empty line accepts the suggested name; end of input dismisses the
/// prompt.
#[derive(Debug, Clone, Default)]
pub struct TerminalPrompt {
    preset: Option<String>,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every prompt with `name` instead of asking
    pub fn with_preset(name: impl Into<String>) -> Self {
        Self {
            preset: Some(name.into()),
        }
    }
}

#[async_trait]
impl NamePrompt for TerminalPrompt {
    async fn ask_file_name(&self, prompt: &str, default: &str) -> Result<Option<String>> {
        if let Some(name) = &self.preset {
            return Ok(Some(name.clone()));
        }

        let mut stderr = tokio::io::stderr();
        stderr
            .write_all(format!("{prompt} [{default}]: ").as_bytes())
            .await
            .map_err(ScaffoldError::Prompt)?;
        stderr.flush().await.map_err(ScaffoldError::Prompt)?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let line = lines.next_line().await.map_err(ScaffoldError::Prompt)?;

        Ok(line.map(|answer| resolve_answer(&answer, default)))
    }
}

fn resolve_answer(answer: &str, default: &str) -> String {
    let answer = answer.trim();
    if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    }
}

/// Host backed by the terminal: the working directory is the workspace and
/// "opening" a document prints its `path:line:column` location.
#[derive(Debug, Clone, Default)]
pub struct TerminalHost {
    roots: Vec<PathBuf>,
}

impl TerminalHost {
    /// Workspace rooted at the current directory
    pub fn new() -> Self {
        Self {
            roots: std::env::current_dir().into_iter().collect(),
        }
    }

    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }
}

/// `path:line:column`, one-based, as compilers and editors print locations
pub fn format_location(path: &Path, cursor: Option<CursorPosition>) -> String {
    match cursor {
        Some(CursorPosition { line, column }) => {
            format!("{}:{}:{}", path.display(), line + 1, column + 1)
        }
        None => path.display().to_string(),
    }
}

#[async_trait]
impl EditorHost for TerminalHost {
    fn workspace_roots(&self) -> Vec<PathBuf> {
        self.roots.clone()
    }

    async fn open_document(
        &self,
        path: &Path,
        cursor: Option<CursorPosition>,
    ) -> std::io::Result<()> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(format!("{}\n", format_location(path, cursor)).as_bytes())
            .await?;
        stdout.flush().await
    }

    fn show_error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_answer() {
        assert_eq!(resolve_answer("", "Class"), "Class");
        assert_eq!(resolve_answer("  \t", "Class"), "Class");
        assert_eq!(resolve_answer(" Invoice.cs ", "Class"), "Invoice.cs");
    }

    #[tokio::test]
    async fn test_preset_answers_without_reading_stdin() {
        let prompt = TerminalPrompt::with_preset("Invoice");
        assert_eq!(
            prompt.ask_file_name("name?", "Class").await.unwrap(),
            Some("Invoice".to_string())
        );
    }

    #[test]
    fn test_format_location() {
        let path = Path::new("/proj/src/Foo.cs");
        assert_eq!(
            format_location(path, Some(CursorPosition { line: 3, column: 2 })),
            "/proj/src/Foo.cs:4:3"
        );
        assert_eq!(format_location(path, None), "/proj/src/Foo.cs");
    }

    #[test]
    fn test_host_roots() {
        let host = TerminalHost::with_roots(vec![PathBuf::from("/ws")]);
        assert_eq!(host.workspace_roots(), vec![PathBuf::from("/ws")]);
    }
}

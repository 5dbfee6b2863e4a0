//! Error handling for the csscaffold library.
//!
//! Every stage of the generation pipeline has its own variant so the
//! message a user sees names the step that failed, while the underlying
//! cause stays reachable through [`std::error::Error::source`] for logging.
//!
//! Not-found conditions (no project file, no existing files) are not errors
//! and never appear here; they are modelled as `Option`/empty results.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for csscaffold operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Main error type for csscaffold operations
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The template body could not be read
    #[error("Could not read template file from '{}'", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Namespace detection or text substitution failed
    #[error("Error trying to build text: {0}")]
    BuildText(String),

    /// The generated file could not be written
    #[error("Error trying to write to '{}'", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The host could not open the generated document
    #[error("Error trying to open from '{}'", .path.display())]
    OpenDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither the command context nor the workspace yielded a directory
    #[error(
        "Could not find the path for this action. If this problem persists, please create an issue in the repository."
    )]
    NoPath,

    /// No templates directory could be located
    #[error("The templates directory could not be found (searched: {searched})")]
    TemplatesNotFound { searched: String },

    /// One or more target files already exist
    #[error("File(s) already exists: {}", format_paths(.0))]
    FilesExist(Vec<PathBuf>),

    /// No template registered under the given key or command
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Reading the file name from the user failed
    #[error("Could not read the file name: {0}")]
    Prompt(#[source] std::io::Error),

    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Wraps a failure with the operation that was being attempted
    #[error("{message}")]
    Context {
        message: String,
        #[source]
        source: Box<ScaffoldError>,
    },
}

impl ScaffoldError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new text-building error
    pub fn build_text<S: Into<String>>(msg: S) -> Self {
        Self::BuildText(msg.into())
    }

    /// Wrap this error with a higher level message, keeping it as the source
    pub fn context<S: Into<String>>(self, message: S) -> Self {
        Self::Context {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// Whether the user should be told about this error without a log pointer.
    ///
    /// Precondition failures carry everything the user needs in the message
    /// itself; I/O failures point at the log for the full cause chain.
    pub fn is_precondition(&self) -> bool {
        match self {
            Self::NoPath
            | Self::TemplatesNotFound { .. }
            | Self::FilesExist(_)
            | Self::UnknownTemplate(_) => true,
            Self::Context { source, .. } => source.is_precondition(),
            _ => false,
        }
    }
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

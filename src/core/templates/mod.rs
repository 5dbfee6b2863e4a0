//! Template definitions, the built-in registry and the generation pipeline

pub mod dir;
pub mod kind;
pub mod manager;
pub mod registry;
pub mod tokens;
pub mod types;

pub use dir::{TEMPLATES_DIR_NAME, TemplatesDir};
pub use kind::{COMMAND_PREFIX, TemplateKind};
pub use manager::{GeneratedFile, TemplateManager};
pub use registry::TemplateRegistry;
pub use tokens::{CursorPosition, TokenSet};
pub use types::{CSHARP_EXTENSION, OPTIONAL_USINGS, Template, format_usings};

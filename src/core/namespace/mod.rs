//! Namespace detection and file-scoped namespace conversion

pub mod detector;
pub mod file_scoped;

pub use detector::{FALLBACK_NAMESPACE, FixedNamespace, NamespaceResolver, ProjectNamespaceDetector};
pub use file_scoped::{FileScopedNamespaceConverter, to_file_scoped};

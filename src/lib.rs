//! csscaffold
//!
//! Scaffolds C# source files (classes, interfaces, enums, controllers, test
//! fixtures) from `.tmpl` templates. The namespace is detected from the
//! nearest project file, usings are merged and sorted, controller names
//! yield a model type, and the template's `${cursor}` marker tells the
//! editor where to put the caret.
#![deny(unsafe_code)]

pub mod application;
pub mod core;
pub mod infrastructure;

pub use crate::core::error::{Result, ScaffoldError};

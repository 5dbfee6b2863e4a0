//! csscaffold core
//!
//! Project discovery, namespace detection and the template text pipeline.
//! Nothing in here talks to a user; prompting and opening documents live in
//! the application layer.

pub mod config;
pub mod error;
pub mod namespace;
pub mod project;
pub mod templates;
pub mod utils;

pub use error::{Result, ScaffoldError};

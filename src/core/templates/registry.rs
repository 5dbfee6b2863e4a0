//! Registry of the templates a host can offer

use super::{Template, TemplateKind};

/// Maps short template keys to templates, in registration order.
///
/// Built once at startup and handed to whoever dispatches commands.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    entries: Vec<(String, Template)>,
}

impl TemplateRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in [`TemplateKind`]
    pub fn builtin() -> Self {
        TemplateKind::all()
            .iter()
            .fold(Self::new(), |registry, kind| {
                registry.with(kind.as_str(), Template::from_kind(*kind))
            })
    }

    /// Add or replace the template registered under `key`
    pub fn register(&mut self, key: &str, template: Template) {
        let key = key.to_lowercase();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = template,
            None => self.entries.push((key, template)),
        }
    }

    /// Builder form of [`TemplateRegistry::register`]
    pub fn with(mut self, key: &str, template: Template) -> Self {
        self.register(key, template);
        self
    }

    /// Template registered under `key` (case-insensitive)
    pub fn get(&self, key: &str) -> Option<&Template> {
        let key = key.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, template)| template)
    }

    /// Template bound to a fully qualified command identifier
    pub fn by_command(&self, command: &str) -> Option<&Template> {
        self.entries
            .iter()
            .map(|(_, template)| template)
            .find(|template| template.command() == command)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.entries.iter().map(|(k, t)| (k.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

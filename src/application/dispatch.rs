//! Command dispatch: one command per registered template

use tracing::{info, warn};

use crate::application::create_from_template::{CreateFromTemplateUseCase, CreateOutcome};
use crate::application::errors::report_error;
use crate::application::CommandContext;
use crate::core::ScaffoldError;
use crate::core::templates::{GeneratedFile, Template, TemplateRegistry};

/// How a command invocation ended. Failures have already been reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    Created(GeneratedFile),
    Cancelled,
    Failed,
}

impl CommandStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Routes command identifiers and template keys to the create use case
pub struct CommandDispatcher {
    registry: TemplateRegistry,
    use_case: CreateFromTemplateUseCase,
}

impl CommandDispatcher {
    pub fn new(registry: TemplateRegistry, use_case: CreateFromTemplateUseCase) -> Self {
        Self { registry, use_case }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Every command identifier this dispatcher answers to
    pub fn commands(&self) -> Vec<String> {
        self.registry.iter().map(|(_, t)| t.command()).collect()
    }

    /// Run the command with the given identifier
    pub async fn invoke(&self, command: &str, context: Option<CommandContext>) -> CommandStatus {
        match self.registry.by_command(command) {
            Some(template) => self.run(template, context).await,
            None => self.fail_unknown(command),
        }
    }

    /// Run the template registered under `key`
    pub async fn invoke_template(&self, key: &str, context: Option<CommandContext>) -> CommandStatus {
        match self.registry.get(key) {
            Some(template) => self.run(template, context).await,
            None => self.fail_unknown(key),
        }
    }

    async fn run(&self, template: &Template, context: Option<CommandContext>) -> CommandStatus {
        info!(command = %template.command(), "Running command");

        match self.use_case.execute(template, context.as_ref()).await {
            Ok(CreateOutcome::Created(generated)) => CommandStatus::Created(generated),
            Ok(CreateOutcome::Cancelled) => CommandStatus::Cancelled,
            Err(err) => {
                let message = format!("Error trying to create new {}", template.name());
                report_error(self.use_case.host(), &message, &err);
                CommandStatus::Failed
            }
        }
    }

    fn fail_unknown(&self, name: &str) -> CommandStatus {
        warn!(name = %name, "No template registered");
        let err = ScaffoldError::UnknownTemplate(name.to_string());
        report_error(self.use_case.host(), "Unknown command", &err);
        CommandStatus::Failed
    }
}

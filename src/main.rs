//! csscaffold CLI entrypoint
//! Parses command-line arguments and dispatches to the template commands.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use csscaffold::{
    application::{CommandContext, CommandDispatcher, CommandStatus, CreateFromTemplateUseCase},
    core::{
        config::{EolStyle, Settings},
        namespace::{NamespaceResolver, ProjectNamespaceDetector},
        templates::TemplateRegistry,
    },
    infrastructure::{TerminalHost, TerminalPrompt},
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "csscaffold")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub options: GlobalOptions,
}

#[derive(clap::Args, Debug)]
pub struct GlobalOptions {
    /// Settings file (defaults to <config dir>/csscaffold/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Line endings for generated files: lf, crlf or auto
    #[arg(long, global = true)]
    eol: Option<EolStyle>,
    /// Directory holding the .tmpl files
    #[arg(long, global = true)]
    templates_dir: Option<PathBuf>,
    /// Use file-scoped namespaces when the project supports them
    #[arg(long, global = true)]
    file_scoped: bool,
    /// Add the common System usings to every file
    #[arg(long, global = true)]
    optional_usings: bool,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Create a file from a template
    New {
        /// Template key, e.g. class, interface, apicontroller
        template: String,
        /// Directory for the new file (defaults to the current directory)
        dir: Option<PathBuf>,
        /// File name; skips the interactive prompt
        #[arg(long)]
        name: Option<String>,
    },
    /// Run a command by its identifier, e.g. csharpextensions.createClass
    Run {
        /// Command identifier
        command: String,
        /// Invocation context as JSON, e.g. {"fsPath": "/src/Models"}
        #[arg(long)]
        context: Option<String>,
        /// File name; skips the interactive prompt
        #[arg(long)]
        name: Option<String>,
    },
    /// List available templates and their commands
    List,
    /// Print the namespace a file at PATH would get
    Namespace {
        /// Path of the (possibly not yet existing) file
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.options.verbose))
        .with_writer(std::io::stderr)
        .init();

    debug!("Starting csscaffold CLI");
    match cli.command {
        Commands::New {
            template,
            dir,
            name,
        } => {
            let settings = load_settings(&cli.options)?;
            let context = dir.map(CommandContext::FsPath);
            let status = dispatcher(settings, name)
                .invoke_template(&template, context)
                .await;
            Ok(exit_code(&status))
        }
        Commands::Run {
            command,
            context,
            name,
        } => {
            let settings = load_settings(&cli.options)?;
            let context = parse_context(context.as_deref())?;
            let status = dispatcher(settings, name).invoke(&command, context).await;
            Ok(exit_code(&status))
        }
        Commands::List => {
            list_templates(&TemplateRegistry::builtin());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Namespace { path } => {
            print_namespace(&path).await;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// `RUST_LOG` when set, otherwise INFO (DEBUG when verbose)
fn log_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

/// Settings file and environment, then command-line flags on top
fn load_settings(options: &GlobalOptions) -> anyhow::Result<Settings> {
    let mut settings =
        Settings::load(options.config.as_deref()).context("Failed to load settings")?;

    if let Some(eol) = options.eol {
        settings.eol = eol;
    }
    if let Some(dir) = &options.templates_dir {
        settings.templates_dir = Some(dir.clone());
    }
    settings.file_scoped_namespace |= options.file_scoped;
    settings.include_optional_usings |= options.optional_usings;

    debug!(?settings, "Effective settings");
    Ok(settings)
}

fn dispatcher(settings: Settings, name: Option<String>) -> CommandDispatcher {
    let prompt = match name {
        Some(name) => TerminalPrompt::with_preset(name),
        None => TerminalPrompt::new(),
    };
    let use_case =
        CreateFromTemplateUseCase::new(settings, Arc::new(prompt), Arc::new(TerminalHost::new()));
    CommandDispatcher::new(TemplateRegistry::builtin(), use_case)
}

fn parse_context(json: Option<&str>) -> anyhow::Result<Option<CommandContext>> {
    let Some(json) = json else {
        return Ok(None);
    };
    let value: serde_json::Value =
        serde_json::from_str(json).context("Failed to parse context JSON")?;
    Ok(CommandContext::from_json(&value))
}

fn exit_code(status: &CommandStatus) -> ExitCode {
    match status {
        CommandStatus::Created(generated) => {
            info!(path = %generated.path.display(), "Created file");
            ExitCode::SUCCESS
        }
        CommandStatus::Cancelled => ExitCode::SUCCESS,
        CommandStatus::Failed => ExitCode::FAILURE,
    }
}

fn list_templates(registry: &TemplateRegistry) {
    println!("Available templates:");
    for (key, template) in registry.iter() {
        println!("  {:<14} {:<20} {}", key, template.name(), template.command());
    }
}

async fn print_namespace(path: &Path) {
    let namespace = ProjectNamespaceDetector::new().namespace_for(path).await;
    println!("{namespace}");
}

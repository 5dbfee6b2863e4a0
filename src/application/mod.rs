//! Application layer - command handling on top of the core pipeline

pub mod context;
pub mod create_from_template;
pub mod dispatch;
pub mod errors;
pub mod traits;

pub use context::*;
pub use create_from_template::*;
pub use dispatch::*;
pub use errors::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{EolStyle, Settings};
    use crate::core::namespace::FixedNamespace;
    use crate::core::templates::{CursorPosition, TemplateRegistry};
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    const CLASS_TEMPLATE: &str =
        "namespace ${namespace}\n{\n\tclass ${classname}\n\t{${cursor}\n\t}\n}";

    struct ScriptedPrompt(Option<String>);

    #[async_trait]
    impl NamePrompt for ScriptedPrompt {
        async fn ask_file_name(
            &self,
            _prompt: &str,
            _default: &str,
        ) -> crate::core::Result<Option<String>> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct RecordingHost {
        roots: Vec<PathBuf>,
        opened: Mutex<Vec<(PathBuf, Option<CursorPosition>)>>,
        errors: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl EditorHost for RecordingHost {
        fn workspace_roots(&self) -> Vec<PathBuf> {
            self.roots.clone()
        }

        async fn open_document(
            &self,
            path: &Path,
            cursor: Option<CursorPosition>,
        ) -> std::io::Result<()> {
            self.opened.lock().unwrap().push((path.to_path_buf(), cursor));
            Ok(())
        }

        fn show_error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }

    struct Fixture {
        _temp_dir: TempDir,
        out_dir: PathBuf,
        host: Arc<RecordingHost>,
        dispatcher: CommandDispatcher,
    }

    fn fixture(name: Option<&str>, roots: Vec<PathBuf>) -> Fixture {
        let temp_dir = TempDir::new().unwrap();
        let templates_dir = temp_dir.path().join("templates");
        let out_dir = temp_dir.path().join("src");
        std::fs::create_dir_all(&templates_dir).unwrap();
        std::fs::create_dir_all(&out_dir).unwrap();
        std::fs::write(templates_dir.join("class.tmpl"), CLASS_TEMPLATE).unwrap();

        let settings = Settings {
            eol: EolStyle::Lf,
            templates_dir: Some(templates_dir),
            ..Default::default()
        };
        let host = Arc::new(RecordingHost {
            roots,
            ..Default::default()
        });
        let use_case = CreateFromTemplateUseCase::new(
            settings,
            Arc::new(ScriptedPrompt(name.map(str::to_string))),
            host.clone(),
        )
        .with_namespace_resolver(Arc::new(FixedNamespace("MyApp".to_string())));

        Fixture {
            _temp_dir: temp_dir,
            out_dir,
            host,
            dispatcher: CommandDispatcher::new(TemplateRegistry::builtin(), use_case),
        }
    }

    #[tokio::test]
    async fn test_create_class_from_context_path() {
        let f = fixture(Some("Foo.cs"), vec![]);
        let context = CommandContext::FsPath(f.out_dir.clone());

        let status = f
            .dispatcher
            .invoke("csharpextensions.createClass", Some(context))
            .await;

        let CommandStatus::Created(generated) = status else {
            panic!("Expected the class file to be created");
        };
        assert_eq!(generated.path, f.out_dir.join("Foo.cs"));
        assert_eq!(
            std::fs::read_to_string(f.out_dir.join("Foo.cs")).unwrap(),
            "namespace MyApp\n{\n\tclass Foo\n\t{\n\t}\n}"
        );
        assert_eq!(
            f.host.opened.lock().unwrap().as_slice(),
            &[(
                f.out_dir.join("Foo.cs"),
                Some(CursorPosition { line: 3, column: 2 })
            )]
        );
        assert!(f.host.errors.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_workspace_root_used_without_context() {
        let temp_root = TempDir::new().unwrap();
        let f = fixture(Some("Bar"), vec![temp_root.path().to_path_buf()]);

        let status = f.dispatcher.invoke_template("class", None).await;

        assert!(matches!(status, CommandStatus::Created(_)));
        assert!(temp_root.path().join("Bar.cs").exists());
    }

    #[tokio::test]
    async fn test_no_path_is_reported() {
        let f = fixture(Some("Foo"), vec![]);

        let status = f.dispatcher.invoke_template("class", None).await;

        assert_eq!(status, CommandStatus::Failed);
        let errors = f.host.errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Could not find the path for this action."));
    }

    #[tokio::test]
    async fn test_existing_file_conflict_writes_nothing() {
        let f = fixture(Some("Foo"), vec![]);
        std::fs::write(f.out_dir.join("Foo.cs"), "// keep me").unwrap();

        let status = f
            .dispatcher
            .invoke_template("class", Some(CommandContext::FsPath(f.out_dir.clone())))
            .await;

        assert_eq!(status, CommandStatus::Failed);
        assert_eq!(
            std::fs::read_to_string(f.out_dir.join("Foo.cs")).unwrap(),
            "// keep me"
        );
        assert!(f.host.opened.lock().unwrap().is_empty());
        let errors = f.host.errors.lock().unwrap();
        assert!(errors[0].contains("File(s) already exists"));
        assert!(errors[0].contains("Foo.cs"));
    }

    #[tokio::test]
    async fn test_dismissed_prompt_cancels_silently() {
        let f = fixture(None, vec![]);

        let status = f
            .dispatcher
            .invoke_template("class", Some(CommandContext::FsPath(f.out_dir.clone())))
            .await;

        assert_eq!(status, CommandStatus::Cancelled);
        assert!(f.host.errors.lock().unwrap().is_empty());
        assert_eq!(std::fs::read_dir(&f.out_dir).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_blank_name_cancels() {
        let f = fixture(Some("   "), vec![]);

        let status = f
            .dispatcher
            .invoke_template("class", Some(CommandContext::FsPath(f.out_dir.clone())))
            .await;

        assert_eq!(status, CommandStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_missing_template_file_reports_with_log_pointer() {
        let f = fixture(Some("Color"), vec![]);

        let status = f
            .dispatcher
            .invoke_template("enum", Some(CommandContext::FsPath(f.out_dir.clone())))
            .await;

        assert_eq!(status, CommandStatus::Failed);
        let errors = f.host.errors.lock().unwrap();
        assert_eq!(
            errors.as_slice(),
            &["Error trying to create new Enum - See log for more info".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let f = fixture(Some("Foo"), vec![]);

        let status = f.dispatcher.invoke("csharpextensions.createRazorPage", None).await;

        assert_eq!(status, CommandStatus::Failed);
        assert_eq!(
            f.host.errors.lock().unwrap().as_slice(),
            &["Unknown template: csharpextensions.createRazorPage".to_string()]
        );
    }

    #[tokio::test]
    async fn test_commands_listed_for_every_template() {
        let f = fixture(None, vec![]);
        let commands = f.dispatcher.commands();
        assert_eq!(commands.len(), f.dispatcher.registry().len());
        assert!(commands.contains(&"csharpextensions.createApiController".to_string()));
    }
}

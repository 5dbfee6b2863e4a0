//! User settings for file generation.
//!
//! Settings are layered: built-in defaults, then a TOML file, then
//! environment variables, then whatever the command line overrides. The
//! environment is read through [`SettingsSource`] so tests can inject values.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::core::error::{Result, ScaffoldError};

/// Environment variable overriding the line-ending style
pub const EOL_ENV: &str = "CSSCAFFOLD_EOL";
/// Environment variable overriding the templates directory
pub const TEMPLATE_DIR_ENV: &str = "CSSCAFFOLD_TEMPLATE_DIR";

/// Line-ending style applied to generated files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EolStyle {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// Whatever the host platform uses
    #[default]
    Auto,
}

impl EolStyle {
    /// Resolve the style to the concrete terminator to write
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Auto => platform_eol(),
        }
    }

    /// Interpret a setting value from the config file or environment. Only
    /// the terminators themselves are recognised; anything else, including
    /// `auto`, falls back to the platform default.
    pub fn from_setting(value: &str) -> Self {
        match value {
            "\n" => Self::Lf,
            "\r\n" => Self::CrLf,
            _ => Self::Auto,
        }
    }
}

/// Parses the `--eol` flag, which also takes `lf`, `crlf` and the escaped
/// spellings `\n` / `\r\n` since raw terminators are awkward to type.
impl FromStr for EolStyle {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "lf" | "\\n" => Self::Lf,
            "crlf" | "\\r\\n" => Self::CrLf,
            _ => Self::from_setting(s),
        })
    }
}

impl fmt::Display for EolStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lf => "\\n",
            Self::CrLf => "\\r\\n",
            Self::Auto => "auto",
        };
        write!(f, "{name}")
    }
}

impl<'de> Deserialize<'de> for EolStyle {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_setting(&raw))
    }
}

/// The host platform's line terminator
#[cfg(windows)]
pub fn platform_eol() -> &'static str {
    "\r\n"
}

/// The host platform's line terminator
#[cfg(not(windows))]
pub fn platform_eol() -> &'static str {
    "\n"
}

/// Settings that influence how files are generated
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Line-ending style for generated files
    pub eol: EolStyle,
    /// Explicit templates directory, bypassing discovery
    pub templates_dir: Option<PathBuf>,
    /// Convert templates to file-scoped namespaces when the project allows it
    pub file_scoped_namespace: bool,
    /// Add the common `System.*` usings to every generated file
    pub include_optional_usings: bool,
}

/// Trait for reading settings overrides, allowing dependency injection for testing
pub trait SettingsSource {
    fn eol(&self) -> Option<String>;
    fn templates_dir(&self) -> Option<String>;
}

/// Production implementation that reads from environment variables
pub struct EnvSettingsSource;

impl SettingsSource for EnvSettingsSource {
    fn eol(&self) -> Option<String> {
        std::env::var(EOL_ENV).ok()
    }

    fn templates_dir(&self) -> Option<String> {
        std::env::var(TEMPLATE_DIR_ENV).ok()
    }
}

impl Settings {
    /// Load settings from `explicit_file` if given, otherwise from the user's
    /// config directory when that file exists, then apply environment overrides.
    pub fn load(explicit_file: Option<&Path>) -> Result<Self> {
        Self::load_with_source(explicit_file, &EnvSettingsSource)
    }

    /// Same as [`Settings::load`] with a custom override source
    pub fn load_with_source(
        explicit_file: Option<&Path>,
        source: &dyn SettingsSource,
    ) -> Result<Self> {
        let mut settings = match explicit_file {
            Some(path) => Self::from_file(path)?,
            None => match default_config_file().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        settings.apply_overrides(source);
        Ok(settings)
    }

    /// Parse settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading settings");
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScaffoldError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
            .map_err(|e| ScaffoldError::config(format!("Invalid {}: {e}", path.display())))
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn apply_overrides(&mut self, source: &dyn SettingsSource) {
        if let Some(eol) = source.eol() {
            debug!(eol = %eol.escape_debug(), "Line-ending override from environment");
            self.eol = EolStyle::from_setting(&eol);
        }
        if let Some(dir) = source.templates_dir().filter(|d| !d.is_empty()) {
            debug!(dir = %dir, "Templates directory override from environment");
            self.templates_dir = Some(PathBuf::from(dir));
        }
    }
}

/// `<config_dir>/csscaffold/config.toml`
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("csscaffold").join("config.toml"))
}

#[cfg(test)]
pub struct MockSettingsSource {
    pub eol: Option<String>,
    pub templates_dir: Option<String>,
}

#[cfg(test)]
impl SettingsSource for MockSettingsSource {
    fn eol(&self) -> Option<String> {
        self.eol.clone()
    }

    fn templates_dir(&self) -> Option<String> {
        self.templates_dir.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_eol_from_setting() {
        assert_eq!(EolStyle::from_setting("\n"), EolStyle::Lf);
        assert_eq!(EolStyle::from_setting("\r\n"), EolStyle::CrLf);
        assert_eq!(EolStyle::from_setting("auto"), EolStyle::Auto);
        assert_eq!(EolStyle::from_setting("something else"), EolStyle::Auto);
    }

    #[test]
    fn test_spelled_eol_names_are_not_settings() {
        for value in ["lf", "LF", "crlf", "CRLF", "\\n", "\\r\\n"] {
            assert_eq!(EolStyle::from_setting(value), EolStyle::Auto, "{value}");
        }
        let settings = Settings::from_toml("eol = \"lf\"").unwrap();
        assert_eq!(settings.eol.as_str(), platform_eol());
    }

    #[test]
    fn test_eol_flag_accepts_names() {
        assert_eq!("lf".parse::<EolStyle>().unwrap(), EolStyle::Lf);
        assert_eq!("CRLF".parse::<EolStyle>().unwrap(), EolStyle::CrLf);
        assert_eq!("\\r\\n".parse::<EolStyle>().unwrap(), EolStyle::CrLf);
        assert_eq!("\n".parse::<EolStyle>().unwrap(), EolStyle::Lf);
        assert_eq!("auto".parse::<EolStyle>().unwrap(), EolStyle::Auto);
        assert_eq!("mac".parse::<EolStyle>().unwrap(), EolStyle::Auto);
    }

    #[test]
    fn test_unrecognized_eol_uses_platform_default() {
        assert_eq!(EolStyle::from_setting("\r").as_str(), platform_eol());
        assert_eq!(EolStyle::Lf.as_str(), "\n");
        assert_eq!(EolStyle::CrLf.as_str(), "\r\n");
    }

    #[test]
    fn test_settings_from_toml() {
        let settings = Settings::from_toml(
            r#"
eol = "\r\n"
templates_dir = "/opt/templates"
file_scoped_namespace = true
"#,
        )
        .unwrap();

        assert_eq!(settings.eol, EolStyle::CrLf);
        assert_eq!(settings.templates_dir, Some(PathBuf::from("/opt/templates")));
        assert!(settings.file_scoped_namespace);
        assert!(!settings.include_optional_usings);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_environment_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("config.toml");
        std::fs::write(&file, "eol = \"auto\"\ninclude_optional_usings = true\n").unwrap();

        let source = MockSettingsSource {
            eol: Some("\n".to_string()),
            templates_dir: Some("/custom/templates".to_string()),
        };
        let settings = Settings::load_with_source(Some(&file), &source).unwrap();

        assert_eq!(settings.eol, EolStyle::Lf);
        assert_eq!(settings.templates_dir, Some(PathBuf::from("/custom/templates")));
        assert!(settings.include_optional_usings);
    }

    #[test]
    fn test_missing_explicit_file_is_config_error() {
        let source = MockSettingsSource {
            eol: None,
            templates_dir: None,
        };
        let result = Settings::load_with_source(Some(Path::new("/nonexistent/cfg.toml")), &source);
        assert!(matches!(result, Err(ScaffoldError::Config(_))));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("config.toml");
        std::fs::write(&file, "file_scoped_namespace = \"yes please\"").unwrap();

        let err = Settings::from_file(&file).unwrap_err();
        assert!(err.to_string().contains("Invalid"));
    }
}

//! MSBuild `.csproj` reader

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, warn};

use super::reader::ProjectReader;

/// First C# language version with file-scoped namespaces
const FILE_SCOPED_LANG_VERSION: u32 = 10;
/// First `netX.Y` target framework whose default language version is 10
const FILE_SCOPED_NET_VERSION: u32 = 6;

/// Properties read from the project's `PropertyGroup`s; the first
/// occurrence of each wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsProjProperties {
    pub root_namespace: Option<String>,
    pub lang_version: Option<String>,
    pub target_frameworks: Vec<String>,
}

impl CsProjProperties {
    /// Parse the properties this tool cares about out of project XML
    pub fn parse(xml: &str) -> Result<Self, quick_xml::Error> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut properties = Self::default();
        let mut in_property_group = false;
        let mut current: Option<String> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    if name == "PropertyGroup" {
                        in_property_group = true;
                    } else if in_property_group {
                        current = Some(name);
                    }
                }
                Event::End(e) => {
                    if e.local_name().as_ref() == b"PropertyGroup" {
                        in_property_group = false;
                    }
                    current = None;
                }
                Event::Text(t) => {
                    if let Some(name) = current.as_deref() {
                        let value = t.unescape()?.trim().to_string();
                        properties.record(name, value);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(properties)
    }

    fn record(&mut self, name: &str, value: String) {
        if value.is_empty() {
            return;
        }
        match name {
            "RootNamespace" if self.root_namespace.is_none() => {
                self.root_namespace = Some(value);
            }
            "LangVersion" if self.lang_version.is_none() => {
                self.lang_version = Some(value);
            }
            "TargetFramework" | "TargetFrameworks" if self.target_frameworks.is_empty() => {
                self.target_frameworks = value
                    .split(';')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            _ => {}
        }
    }

    /// Whether `namespace X;` compiles under these settings.
    ///
    /// An explicit `LangVersion` decides on its own (except `default`, which
    /// defers to the target framework); otherwise any `net6.0`+ target counts.
    pub fn supports_file_scoped_namespaces(&self) -> bool {
        if let Some(lang) = self.lang_version.as_deref() {
            match lang.to_ascii_lowercase().as_str() {
                "latest" | "latestmajor" | "preview" => return true,
                "default" => {}
                other => {
                    return other
                        .split('.')
                        .next()
                        .and_then(|major| major.parse::<u32>().ok())
                        .is_some_and(|major| major >= FILE_SCOPED_LANG_VERSION);
                }
            }
        }

        self.target_frameworks
            .iter()
            .any(|tf| net_major_version(tf).is_some_and(|v| v >= FILE_SCOPED_NET_VERSION))
    }
}

/// Major version of a modern `netX.Y[-platform]` moniker. Legacy monikers
/// (`net472`, `netcoreapp3.1`, `netstandard2.0`) yield `None`.
fn net_major_version(moniker: &str) -> Option<u32> {
    let version = moniker.to_ascii_lowercase();
    let version = version.strip_prefix("net")?;
    let (major, _) = version.split_once('.')?;
    major.parse().ok()
}

/// Reader for `*.csproj` files
#[derive(Debug, Clone)]
pub struct CsProjReader {
    file_path: PathBuf,
}

impl CsProjReader {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// Read and parse the project file; unreadable or malformed files give `None`
    pub async fn properties(&self) -> Option<CsProjProperties> {
        let xml = match tokio::fs::read_to_string(&self.file_path).await {
            Ok(xml) => xml,
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "Could not read project file");
                return None;
            }
        };

        match CsProjProperties::parse(&xml) {
            Ok(properties) => {
                debug!(path = %self.file_path.display(), ?properties, "Parsed project file");
                Some(properties)
            }
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "Malformed project file");
                None
            }
        }
    }
}

#[async_trait]
impl ProjectReader for CsProjReader {
    fn file_path(&self) -> &Path {
        &self.file_path
    }

    async fn root_namespace(&self) -> Option<String> {
        self.properties().await?.root_namespace
    }

    async fn supports_file_scoped_namespaces(&self) -> bool {
        self.properties()
            .await
            .is_some_and(|p| p.supports_file_scoped_namespaces())
    }
}

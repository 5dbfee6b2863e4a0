//! Block-scoped to file-scoped namespace conversion

use std::path::Path;

use tracing::debug;

use crate::core::project::ProjectFormat;

const NAMESPACE_DECLARATION: &str = "namespace ${namespace}";

/// Rewrites `namespace X { ... }` templates as `namespace X;` when the
/// setting asks for it and the target's project can compile the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileScopedNamespaceConverter {
    enabled: bool,
}

impl FileScopedNamespaceConverter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Return the file-scoped form of `template` if it applies to
    /// `file_path`, otherwise the template unchanged.
    pub async fn convert_if_necessary(&self, template: &str, file_path: &Path) -> String {
        if !self.enabled {
            return template.to_string();
        }

        let supported = match ProjectFormat::find_any(file_path).await {
            Some(project) => project.supports_file_scoped_namespaces().await,
            None => false,
        };
        if !supported {
            debug!(path = %file_path.display(), "Project does not support file-scoped namespaces");
            return template.to_string();
        }

        to_file_scoped(template).unwrap_or_else(|| template.to_string())
    }
}

/// Convert a block-scoped template to file-scoped form.
///
/// Expects a `namespace ${namespace}` line, an opening `{` as the next
/// non-blank line, and a closing `}` line after it. The body between the
/// braces loses one level of indentation (a tab or four spaces). Returns
/// `None` when the template does not have that shape.
pub fn to_file_scoped(template: &str) -> Option<String> {
    let lines: Vec<&str> = template.split('\n').collect();

    let ns_index = lines
        .iter()
        .position(|l| l.trim_end().ends_with(NAMESPACE_DECLARATION))?;

    let open_index = (ns_index + 1..lines.len()).find(|&i| !line_content(lines[i]).is_empty())?;
    if line_content(lines[open_index]) != "{" {
        return None;
    }

    let close_index = (open_index + 1..lines.len())
        .rev()
        .find(|&i| line_content(lines[i]) == "}")?;

    let namespace_line = lines[ns_index];
    let (declaration, cr) = match namespace_line.strip_suffix('\r') {
        Some(stripped) => (stripped.trim_end(), "\r"),
        None => (namespace_line.trim_end(), ""),
    };

    let mut converted: Vec<String> = lines[..ns_index].iter().map(|l| l.to_string()).collect();
    converted.push(format!("{declaration};{cr}"));
    converted.push(cr.to_string());
    converted.extend(
        lines[open_index + 1..close_index]
            .iter()
            .skip_while(|l| line_content(l).is_empty())
            .map(|l| dedent(l).to_string()),
    );
    converted.extend(lines[close_index + 1..].iter().map(|l| l.to_string()));

    Some(converted.join("\n"))
}

fn line_content(line: &str) -> &str {
    line.trim_end_matches('\r').trim()
}

fn dedent(line: &str) -> &str {
    line.strip_prefix('\t')
        .or_else(|| line.strip_prefix("    "))
        .unwrap_or(line)
}

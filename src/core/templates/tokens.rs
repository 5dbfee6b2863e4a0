//! Token substitution for template bodies.
//!
//! Templates contain literal `${...}` markers. A [`TokenSet`] holds the value
//! for each recognised marker for one generation request and applies them in
//! a single ordered pass; unrecognised markers are left as they are.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::utils::camelize;

pub const CLASS_NAME_TOKEN: &str = "${classname}";
pub const NAMESPACE_TOKEN: &str = "${namespace}";
pub const NAMESPACES_TOKEN: &str = "${namespaces}";
pub const TYPE_TOKEN: &str = "${type}";
pub const CAMEL_TYPE_TOKEN: &str = "${camelType}";
pub const CURSOR_TOKEN: &str = "${cursor}";

const PLURAL_CONTROLLER_SUFFIX: &str = "Controllers";
const CONTROLLER_SUFFIX: &str = "Controller";

static EOL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").expect("valid regex"));

/// Zero-based position of the cursor marker in generated text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Values for the recognised tokens of one generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSet {
    pub class_name: String,
    pub namespace: String,
    pub namespaces: String,
    /// `None` leaves `${type}` and `${camelType}` untouched
    pub model_type: Option<String>,
}

impl TokenSet {
    /// Build the token values for a file called `class_name`
    pub fn new(class_name: &str, namespace: &str, namespaces: &str) -> Self {
        Self {
            class_name: class_name.to_string(),
            namespace: namespace.to_string(),
            namespaces: namespaces.to_string(),
            model_type: model_type(class_name),
        }
    }

    /// The ordered substitution table, excluding the cursor marker
    fn table(&self) -> Vec<(&'static str, String)> {
        let mut table = vec![
            (NAMESPACES_TOKEN, self.namespaces.clone()),
            (NAMESPACE_TOKEN, self.namespace.clone()),
            (CLASS_NAME_TOKEN, self.class_name.clone()),
        ];
        if let Some(model_type) = &self.model_type {
            table.push((TYPE_TOKEN, model_type.clone()));
            table.push((CAMEL_TYPE_TOKEN, camelize(model_type)));
        }
        table
    }

    /// Replace every recognised token except `${cursor}`
    pub fn apply(&self, text: &str) -> String {
        self.table()
            .into_iter()
            .fold(text.to_string(), |acc, (token, value)| acc.replace(token, &value))
    }

    /// Substitute tokens, normalise line endings, then locate and strip the
    /// cursor marker. The position refers to the returned text.
    pub fn render(&self, template: &str, eol: &str) -> (String, Option<CursorPosition>) {
        let text = normalize_eol(&self.apply(template), eol);
        let cursor = find_cursor(&text);
        (text.replace(CURSOR_TOKEN, ""), cursor)
    }
}

/// The model type named by a controller file.
///
/// A trailing `Controllers` is stripped first, otherwise a trailing
/// `Controller`. Names with neither suffix have no model type.
///
/// # Examples
/// ```
/// use csscaffold::core::templates::tokens::model_type;
///
/// assert_eq!(model_type("OrderController").as_deref(), Some("Order"));
/// assert_eq!(model_type("OrderControllers").as_deref(), Some("Order"));
/// assert_eq!(model_type("Order"), None);
/// ```
pub fn model_type(file_name: &str) -> Option<String> {
    file_name
        .strip_suffix(PLURAL_CONTROLLER_SUFFIX)
        .or_else(|| file_name.strip_suffix(CONTROLLER_SUFFIX))
        .map(str::to_string)
}

/// Rewrite every `\n` or `\r\n` as `eol`
pub fn normalize_eol(text: &str, eol: &str) -> String {
    EOL_REGEX.replace_all(text, eol).into_owned()
}

/// Line and column of the first cursor marker.
///
/// The line is the number of `\n` before the marker; the column is the
/// number of characters between the preceding `\n` (or the start of the
/// text) and the marker.
pub fn find_cursor(text: &str) -> Option<CursorPosition> {
    let offset = text.find(CURSOR_TOKEN)?;
    let before = &text[..offset];

    let line = before.matches('\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count();

    Some(CursorPosition { line, column })
}

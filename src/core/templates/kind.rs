//! Built-in template kinds.
//!
//! Each kind knows its registry key, its display name (which is also the
//! template file stem), the command identifier that triggers it, and the
//! usings every file it generates needs.
//!
//! # Examples
//!
//! ```
//! use csscaffold::core::templates::TemplateKind;
//! use std::str::FromStr;
//!
//! let kind = TemplateKind::from_str("apicontroller").unwrap();
//! assert_eq!(kind, TemplateKind::ApiController);
//! assert_eq!(kind.display_name(), "ApiController");
//! assert_eq!(kind.to_string(), "apicontroller");
//! ```

use std::fmt;
use std::str::FromStr;

/// Prefix shared by every command identifier
pub const COMMAND_PREFIX: &str = "csharpextensions";

/// Template kinds shipped with csscaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateKind {
    #[default]
    Class,
    Interface,
    Enum,
    Struct,
    Record,
    /// MVC controller returning views
    Controller,
    /// Web API controller
    ApiController,
    XUnit,
    NUnit,
    MsTest,
}

impl TemplateKind {
    /// Every kind, in registration order
    pub fn all() -> &'static [TemplateKind] {
        &[
            Self::Class,
            Self::Interface,
            Self::Enum,
            Self::Struct,
            Self::Record,
            Self::Controller,
            Self::ApiController,
            Self::XUnit,
            Self::NUnit,
            Self::MsTest,
        ]
    }

    /// Registry key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Struct => "struct",
            Self::Record => "record",
            Self::Controller => "controller",
            Self::ApiController => "apicontroller",
            Self::XUnit => "xunit",
            Self::NUnit => "nunit",
            Self::MsTest => "mstest",
        }
    }

    /// Name shown to the user and used as the default file name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Interface => "Interface",
            Self::Enum => "Enum",
            Self::Struct => "Struct",
            Self::Record => "Record",
            Self::Controller => "Controller",
            Self::ApiController => "ApiController",
            Self::XUnit => "XUnit",
            Self::NUnit => "NUnit",
            Self::MsTest => "MSTest",
        }
    }

    /// Command name without the `csharpextensions.` prefix
    pub fn command_name(&self) -> &'static str {
        match self {
            Self::Class => "createClass",
            Self::Interface => "createInterface",
            Self::Enum => "createEnum",
            Self::Struct => "createStruct",
            Self::Record => "createRecord",
            Self::Controller => "createController",
            Self::ApiController => "createApiController",
            Self::XUnit => "createXUnitTest",
            Self::NUnit => "createNUnitTest",
            Self::MsTest => "createMSTest",
        }
    }

    pub fn required_usings(&self) -> &'static [&'static str] {
        match self {
            Self::Class | Self::Interface | Self::Enum | Self::Struct | Self::Record => &[],
            Self::Controller => &["Microsoft.AspNetCore.Mvc"],
            Self::ApiController => &["Microsoft.AspNetCore.Mvc", "Microsoft.Extensions.Logging"],
            Self::XUnit => &["Xunit"],
            Self::NUnit => &["NUnit.Framework"],
            Self::MsTest => &["Microsoft.VisualStudio.TestTools.UnitTesting"],
        }
    }
}

impl FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == key)
            .ok_or_else(|| format!("Unknown template kind: {s}"))
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(TemplateKind::from_str("Class").unwrap(), TemplateKind::Class);
        assert_eq!(TemplateKind::from_str("XUNIT").unwrap(), TemplateKind::XUnit);
        assert_eq!(TemplateKind::from_str("mstest").unwrap(), TemplateKind::MsTest);
        assert!(TemplateKind::from_str("razorpage").is_err());
    }

    #[test]
    fn test_keys_round_trip() {
        for kind in TemplateKind::all() {
            assert_eq!(TemplateKind::from_str(kind.as_str()).unwrap(), *kind);
        }
    }

    #[test]
    fn test_template_file_stem_matches_key() {
        for kind in TemplateKind::all() {
            assert_eq!(kind.display_name().to_lowercase(), kind.as_str());
        }
    }

    #[test]
    fn test_required_usings() {
        assert!(TemplateKind::Class.required_usings().is_empty());
        assert_eq!(
            TemplateKind::ApiController.required_usings(),
            &["Microsoft.AspNetCore.Mvc", "Microsoft.Extensions.Logging"]
        );
        assert_eq!(TemplateKind::XUnit.required_usings(), &["Xunit"]);
    }
}

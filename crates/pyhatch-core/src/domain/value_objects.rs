//! Domain value objects: PackageName, License, EnvironmentKind, TestFramework.
//!
//! # Design
//!
//! The enumerated choices are closed enums with one fallback variant that
//! keeps whatever the user typed. Parsing never fails: prompts accept any
//! answer and the consumer of each field decides what an unknown value means.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `parse` arm here
//! 3. Add the per-variant behaviour where the field is consumed
//!    (license text in the scaffold writer, provisioning in the
//!    environment provisioner)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── PackageName ──────────────────────────────────────────────────────────────

/// Python reserved words; a package named after one cannot be imported.
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// A package name that is both a directory name and an importable module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let invalid = |reason: &str| DomainError::InvalidPackageName {
            name: name.clone(),
            reason: reason.into(),
        };

        let mut chars = name.chars();
        match chars.next() {
            None => return Err(invalid("name cannot be empty")),
            Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
                return Err(invalid("name must start with a letter or underscore"));
            }
            Some(_) => {}
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid(
                "name may only contain ASCII letters, digits and underscores",
            ));
        }
        if PYTHON_KEYWORDS.contains(&name.as_str()) {
            return Err(invalid("name is a Python keyword"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PackageName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PackageName> for String {
    fn from(value: PackageName) -> Self {
        value.0
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── License ──────────────────────────────────────────────────────────────────

/// License of the generated package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum License {
    #[default]
    Mit,
    Gplv3,
    Apache2,
    Bsd3,
    /// Anything else; written verbatim as `<value> License`.
    Custom(String),
}

impl License {
    /// Option names shown by the interactive prompt, default first.
    pub const OPTIONS: [&'static str; 4] = ["mit", "gplv3", "apache2", "bsd3"];

    /// Lenient parse: recognised names match case-insensitively, anything
    /// else becomes a custom license.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "mit" => Self::Mit,
            "gplv3" | "gpl-3.0" | "gpl3" => Self::Gplv3,
            "apache2" | "apache-2.0" | "apache" => Self::Apache2,
            "bsd3" | "bsd-3-clause" => Self::Bsd3,
            _ => Self::Custom(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Mit => "mit",
            Self::Gplv3 => "gplv3",
            Self::Apache2 => "apache2",
            Self::Bsd3 => "bsd3",
            Self::Custom(name) => name,
        }
    }

    /// Trove classifier written into the packaging manifest.
    pub fn classifier(&self) -> String {
        match self {
            Self::Mit => "License :: OSI Approved :: MIT License".into(),
            Self::Gplv3 => {
                "License :: OSI Approved :: GNU General Public License v3 (GPLv3)".into()
            }
            Self::Apache2 => "License :: OSI Approved :: Apache Software License".into(),
            Self::Bsd3 => "License :: OSI Approved :: BSD License".into(),
            Self::Custom(name) => format!("License :: {name} License"),
        }
    }

    /// Name of the license text template, `None` for custom licenses.
    pub fn template_name(&self) -> Option<&'static str> {
        match self {
            Self::Mit => Some("mit_license.txt"),
            Self::Gplv3 => Some("gplv3_license.txt"),
            Self::Apache2 => Some("apache2_license.txt"),
            Self::Bsd3 => Some("bsd3_license.txt"),
            Self::Custom(_) => None,
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for License {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

// ── EnvironmentKind ──────────────────────────────────────────────────────────

/// How the new package's dependencies are isolated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum EnvironmentKind {
    /// A `venv` directory created with `python -m venv`.
    #[default]
    Venv,
    /// Pipenv; only an empty `Pipfile` is written.
    Pipenv,
    /// Poetry manages itself; nothing is done.
    Poetry,
    /// Unknown answer from the user; provisioning is skipped with a warning.
    Unrecognized(String),
}

impl EnvironmentKind {
    pub const OPTIONS: [&'static str; 3] = ["venv", "pipenv", "poetry"];

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "venv" => Self::Venv,
            "pipenv" => Self::Pipenv,
            "poetry" => Self::Poetry,
            _ => Self::Unrecognized(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Venv => "venv",
            Self::Pipenv => "pipenv",
            Self::Poetry => "poetry",
            Self::Unrecognized(name) => name,
        }
    }
}

impl fmt::Display for EnvironmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvironmentKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

// ── TestFramework ────────────────────────────────────────────────────────────

/// Test framework used for the generated `tests/` directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TestFramework {
    #[default]
    Pytest,
    Unittest,
    /// No tests directory.
    None,
    /// Unknown answer; treated like `None` with a warning.
    Unrecognized(String),
}

impl TestFramework {
    pub const OPTIONS: [&'static str; 3] = ["pytest", "unittest", "none"];

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "pytest" => Self::Pytest,
            "unittest" => Self::Unittest,
            "none" | "" => Self::None,
            _ => Self::Unrecognized(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pytest => "pytest",
            Self::Unittest => "unittest",
            Self::None => "none",
            Self::Unrecognized(name) => name,
        }
    }

    /// Template for `tests/test_project.py`, if a tests directory is wanted.
    pub fn template_name(&self) -> Option<&'static str> {
        match self {
            Self::Pytest => Some("test_pytest.py"),
            Self::Unittest => Some("test_unittest.py"),
            Self::None | Self::Unrecognized(_) => None,
        }
    }

    /// Recipe line behind `make test`.
    pub fn test_command(&self) -> &'static str {
        match self {
            Self::Pytest => "python -m pytest",
            Self::Unittest => "python -m unittest discover -s tests",
            Self::None | Self::Unrecognized(_) => "@echo \"No test framework configured\"",
        }
    }
}

impl fmt::Display for TestFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestFramework {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

//! Templates compiled into the binary.
//!
//! Each template lives as a plain file under `templates/` in this crate and
//! is embedded with `include_str!`, so the installed binary needs no data
//! directory.

use pyhatch_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::PyhatchResult,
};

/// `(name, text)` pairs; names are the keys the scaffold asks for.
const TEMPLATES: &[(&str, &str)] = &[
    ("README.md", include_str!("../../templates/README.md.tmpl")),
    ("setup.py", include_str!("../../templates/setup.py.tmpl")),
    ("entrypoint.py", include_str!("../../templates/entrypoint.py.tmpl")),
    ("gitignore", include_str!("../../templates/gitignore.tmpl")),
    ("makefile", include_str!("../../templates/makefile.tmpl")),
    ("test_pytest.py", include_str!("../../templates/test_pytest.py.tmpl")),
    ("test_unittest.py", include_str!("../../templates/test_unittest.py.tmpl")),
    ("mit_license.txt", include_str!("../../templates/mit_license.txt.tmpl")),
    ("gplv3_license.txt", include_str!("../../templates/gplv3_license.txt.tmpl")),
    ("apache2_license.txt", include_str!("../../templates/apache2_license.txt.tmpl")),
    ("bsd3_license.txt", include_str!("../../templates/bsd3_license.txt.tmpl")),
];

/// The templates that ship with pyhatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Names of every built-in template.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        TEMPLATES.iter().map(|(name, _)| *name)
    }
}

impl TemplateStore for BuiltinTemplates {
    fn get(&self, name: &str) -> PyhatchResult<String> {
        TEMPLATES
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, text)| (*text).to_string())
            .ok_or_else(|| {
                ApplicationError::TemplateNotFound {
                    name: name.to_string(),
                }
                .into()
            })
    }
}

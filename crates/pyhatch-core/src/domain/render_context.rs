//! Variable substitution for package templates.

use std::collections::HashMap;

use crate::domain::package_config::PackageConfig;

/// Context for template rendering.
///
/// A value object holding the variables a template may reference as
/// `{{KEY}}`. Immutable after creation; `with_variable` returns a new
/// instance.
///
/// ## Package Variables
///
/// | Variable | Example |
/// |----------|---------|
/// | `NAME` | `myapp` |
/// | `VERSION` | `0.0.0.1` |
/// | `DESCRIPTION` | free text |
/// | `AUTHOR` / `EMAIL` | `Your Name` / `email@domain.com` |
/// | `REPO_URL` | `https://github.com/you/myapp` |
/// | `LICENSE` | `mit`, or the custom name |
/// | `LICENSE_CLASSIFIER` | `License :: OSI Approved :: MIT License` |
/// | `ENTRYPOINT` / `ENTRY_MODULE` | `main.py` / `main` |
/// | `ENTRY_POINT` | `myapp=myapp.main:main` |
/// | `TEST_COMMAND` | `python -m pytest` |
/// | `YEAR` | `2026` |
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Empty context; every placeholder is left untouched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context carrying every package variable listed above.
    pub fn for_package(config: &PackageConfig, year: i32) -> Self {
        Self::new()
            .with_variable("NAME", config.name().as_str())
            .with_variable("VERSION", config.version())
            .with_variable("DESCRIPTION", config.description())
            .with_variable("AUTHOR", config.author())
            .with_variable("EMAIL", config.email())
            .with_variable("REPO_URL", config.repo_url())
            .with_variable("LICENSE", config.license().as_str())
            .with_variable("LICENSE_CLASSIFIER", config.license().classifier())
            .with_variable("ENTRYPOINT", config.entrypoint())
            .with_variable("ENTRY_MODULE", config.entry_module())
            .with_variable("ENTRY_POINT", config.console_entry_point())
            .with_variable("TEST_COMMAND", config.test_framework().test_command())
            .with_variable("YEAR", year.to_string())
    }

    /// Add a variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render a template string by replacing `{{KEY}}` placeholders.
    ///
    /// One left-to-right pass: substituted values are never rescanned, so
    /// user text containing braces is copied verbatim. Unknown keys stay as
    /// literal `{{KEY}}`.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    let key = &after[..end];
                    match self.variables.get(key.trim()) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(key);
                            out.push_str("}}");
                        }
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::License;

    #[test]
    fn replaces_known_placeholders() {
        let ctx = RenderContext::new().with_variable("NAME", "myapp");
        assert_eq!(ctx.render("# {{NAME}}\n"), "# myapp\n");
        assert_eq!(ctx.render("{{NAME}}{{NAME}}"), "myappmyapp");
    }

    #[test]
    fn unknown_placeholders_stay_literal() {
        let ctx = RenderContext::new();
        assert_eq!(ctx.render("a {{MISSING}} b"), "a {{MISSING}} b");
    }

    #[test]
    fn values_are_not_rescanned() {
        let ctx = RenderContext::new()
            .with_variable("DESCRIPTION", "uses {{NAME}} literally")
            .with_variable("NAME", "x");
        assert_eq!(ctx.render("{{DESCRIPTION}}"), "uses {{NAME}} literally");
    }

    #[test]
    fn unterminated_placeholder_is_copied() {
        let ctx = RenderContext::new().with_variable("NAME", "x");
        assert_eq!(ctx.render("{{NAME}} {{oops"), "x {{oops");
    }

    #[test]
    fn package_context_has_derived_values() {
        let config = PackageConfig::builder(std::env::temp_dir().join("myapp"))
            .author("Ada")
            .license(License::Apache2)
            .entrypoint("cli.py")
            .build()
            .unwrap();
        let ctx = RenderContext::for_package(&config, 2026);

        assert_eq!(ctx.get("ENTRY_POINT"), Some("myapp=myapp.cli:main"));
        assert_eq!(ctx.get("ENTRY_MODULE"), Some("cli"));
        assert_eq!(
            ctx.get("LICENSE_CLASSIFIER"),
            Some("License :: OSI Approved :: Apache Software License")
        );
        assert_eq!(ctx.get("YEAR"), Some("2026"));
        assert_eq!(ctx.get("TEST_COMMAND"), Some("python -m pytest"));
    }
}

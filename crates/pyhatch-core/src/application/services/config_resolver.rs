//! Configuration Resolver - turns defaults or answers into a `PackageConfig`.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    application::ports::{Prompter, Question},
    domain::{EnvironmentKind, License, PackageConfig, TestFramework, package_name_from_path},
    error::PyhatchResult,
};

/// Values offered when the user does not answer a prompt.
///
/// Deserializable so the CLI can read the `[defaults]` table of its config
/// file straight into it; missing keys keep the built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldDefaults {
    pub version: String,
    pub description: String,
    pub entrypoint: String,
    pub repo_url: String,
    pub author: String,
    pub email: String,
    pub environment: String,
    pub test_framework: String,
    pub license: String,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            version: "0.0.0.1".into(),
            description: String::new(),
            entrypoint: "main.py".into(),
            repo_url: String::new(),
            author: "Your Name".into(),
            email: "email@domain.com".into(),
            environment: EnvironmentKind::OPTIONS[0].into(),
            test_framework: TestFramework::OPTIONS[0].into(),
            license: License::OPTIONS[0].into(),
        }
    }
}

/// Answers in prompt order, before interpretation.
struct Answers {
    version: String,
    description: String,
    entrypoint: String,
    repo_url: String,
    author: String,
    email: String,
    environment: String,
    test_framework: String,
    license: String,
}

/// Builds the immutable package record for `create`.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    defaults: FieldDefaults,
}

impl ConfigResolver {
    pub fn new(defaults: FieldDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &FieldDefaults {
        &self.defaults
    }

    /// The prompts asked by [`resolve_interactive`](Self::resolve_interactive),
    /// in order.
    pub fn questions(&self) -> Vec<Question> {
        let d = &self.defaults;
        vec![
            Question::new("version", &d.version),
            Question::new("description", &d.description),
            Question::new("entry point", &d.entrypoint),
            Question::new("repository url", &d.repo_url),
            Question::new("author", &d.author),
            Question::new("email", &d.email),
            Question::new("environment management", &d.environment)
                .with_options(&EnvironmentKind::OPTIONS),
            Question::new("test framework", &d.test_framework)
                .with_options(&TestFramework::OPTIONS),
            Question::new("license", &d.license).with_options(&License::OPTIONS),
        ]
    }

    /// Every field takes its default (`--yes`).
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn resolve_defaults(&self, path: &Path, force: bool) -> PyhatchResult<PackageConfig> {
        let d = self.defaults.clone();
        let answers = Answers {
            version: d.version,
            description: d.description,
            entrypoint: d.entrypoint,
            repo_url: d.repo_url,
            author: d.author,
            email: d.email,
            environment: d.environment,
            test_framework: d.test_framework,
            license: d.license,
        };
        self.finish(path, force, answers)
    }

    /// Ask every question in order; an empty answer takes the default.
    ///
    /// The package name is checked before the first prompt so an invalid
    /// target fails without asking anything.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn resolve_interactive(
        &self,
        path: &Path,
        force: bool,
        prompter: &dyn Prompter,
    ) -> PyhatchResult<PackageConfig> {
        package_name_from_path(path)?;

        let mut answers = Vec::with_capacity(9);
        for question in self.questions() {
            let raw = prompter.ask(&question)?;
            let answer = if raw.is_empty() {
                question.default.clone()
            } else {
                raw
            };
            debug!(question = %question.label, %answer, "Answered");
            answers.push(answer);
        }

        let mut answers = answers.into_iter();
        let mut next = || answers.next().unwrap_or_default();
        let answers = Answers {
            version: next(),
            description: next(),
            entrypoint: next(),
            repo_url: next(),
            author: next(),
            email: next(),
            environment: next(),
            test_framework: next(),
            license: next(),
        };
        self.finish(path, force, answers)
    }

    fn finish(&self, path: &Path, force: bool, answers: Answers) -> PyhatchResult<PackageConfig> {
        let config = PackageConfig::builder(path)
            .version(answers.version)
            .description(answers.description)
            .entrypoint(answers.entrypoint)
            .repo_url(answers.repo_url)
            .author(answers.author)
            .email(answers.email)
            .environment(EnvironmentKind::parse(&answers.environment))
            .test_framework(TestFramework::parse(&answers.test_framework))
            .license(License::parse(&answers.license))
            .force(force)
            .build()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockPrompter};
    use crate::error::PyhatchError;
    use mockall::Sequence;
    use std::path::PathBuf;

    fn target() -> PathBuf {
        std::env::temp_dir().join("myapp")
    }

    #[test]
    fn defaults_match_the_documented_literals() {
        let config = ConfigResolver::default()
            .resolve_defaults(&target(), false)
            .unwrap();

        assert_eq!(config.version(), "0.0.0.1");
        assert_eq!(config.description(), "");
        assert_eq!(config.entrypoint(), "main.py");
        assert_eq!(config.author(), "Your Name");
        assert_eq!(config.email(), "email@domain.com");
        assert_eq!(config.environment(), &EnvironmentKind::Venv);
        assert_eq!(config.test_framework(), &TestFramework::Pytest);
        assert_eq!(config.license(), &License::Mit);
        assert!(!config.force());
    }

    #[test]
    fn overridden_defaults_are_used() {
        let defaults = FieldDefaults {
            author: "Ada".into(),
            license: "bsd3".into(),
            ..FieldDefaults::default()
        };
        let config = ConfigResolver::new(defaults)
            .resolve_defaults(&target(), true)
            .unwrap();
        assert_eq!(config.author(), "Ada");
        assert_eq!(config.license(), &License::Bsd3);
        assert!(config.force());
    }

    #[test]
    fn questions_are_asked_in_order() {
        let labels: Vec<_> = ConfigResolver::default()
            .questions()
            .into_iter()
            .map(|q| q.label)
            .collect();
        assert_eq!(
            labels,
            [
                "version",
                "description",
                "entry point",
                "repository url",
                "author",
                "email",
                "environment management",
                "test framework",
                "license",
            ]
        );
    }

    #[test]
    fn empty_answers_take_defaults_and_others_are_verbatim() {
        let mut prompter = MockPrompter::new();
        let mut seq = Sequence::new();
        let replies = ["", "A tool", "cli.py", "", "Ada", "", "PIPENV", "", "WTFPL"];
        for reply in replies {
            prompter
                .expect_ask()
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_| Ok(reply.to_string()));
        }

        let config = ConfigResolver::default()
            .resolve_interactive(&target(), false, &prompter)
            .unwrap();

        assert_eq!(config.version(), "0.0.0.1");
        assert_eq!(config.description(), "A tool");
        assert_eq!(config.entrypoint(), "cli.py");
        assert_eq!(config.author(), "Ada");
        assert_eq!(config.email(), "email@domain.com");
        assert_eq!(config.environment(), &EnvironmentKind::Pipenv);
        assert_eq!(config.license(), &License::Custom("WTFPL".into()));
    }

    #[test]
    fn interruption_stops_prompting() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_ask()
            .times(1)
            .returning(|_| Err(ApplicationError::Interrupted.into()));

        let err = ConfigResolver::default()
            .resolve_interactive(&target(), false, &prompter)
            .unwrap_err();
        assert!(err.is_interrupted());
    }

    #[test]
    fn invalid_name_fails_before_prompting() {
        let prompter = MockPrompter::new();
        let err = ConfigResolver::default()
            .resolve_interactive(&std::env::temp_dir().join("my-app"), false, &prompter)
            .unwrap_err();
        assert!(matches!(err, PyhatchError::Domain(_)));
    }
}

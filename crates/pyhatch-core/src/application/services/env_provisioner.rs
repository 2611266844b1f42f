//! Environment Provisioner - sets up the package's isolated environment.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, CommandSpec, Filesystem},
        services::run_checked,
    },
    domain::{EnvironmentKind, PackageConfig, layout},
    error::PyhatchResult,
};

/// What provisioning did, for the CLI's summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// A virtual environment was created at `venv`.
    Venv {
        venv: PathBuf,
        /// Whether the best-effort pip upgrade succeeded.
        pip_upgraded: bool,
        /// `None` when something already occupied the link path.
        activate_link: Option<PathBuf>,
    },
    /// An empty lockfile was written for the named tool to fill in.
    Lockfile { path: PathBuf },
    /// The tool manages its own project layout; nothing was done.
    Skipped { tool: String },
    /// The environment value was not recognized; nothing was done.
    Unrecognized { value: String },
}

pub struct EnvironmentProvisioner {
    filesystem: Arc<dyn Filesystem>,
    runner: Arc<dyn CommandRunner>,
    python: String,
}

impl EnvironmentProvisioner {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        runner: Arc<dyn CommandRunner>,
        python: impl Into<String>,
    ) -> Self {
        Self {
            filesystem,
            runner,
            python: python.into(),
        }
    }

    #[instrument(skip_all, fields(environment = %config.environment()))]
    pub fn provision(&self, config: &PackageConfig) -> PyhatchResult<ProvisionOutcome> {
        match config.environment() {
            EnvironmentKind::Venv => self.create_venv(config),
            EnvironmentKind::Pipenv => {
                let path = config.path().join(layout::PIPFILE);
                self.filesystem.touch(&path)?;
                info!(path = %path.display(), "Pipfile in place");
                Ok(ProvisionOutcome::Lockfile { path })
            }
            EnvironmentKind::Poetry => {
                info!("Poetry manages its own environment; run `poetry init` in the package");
                Ok(ProvisionOutcome::Skipped {
                    tool: "poetry".into(),
                })
            }
            EnvironmentKind::Unrecognized(value) => {
                warn!(%value, "Unrecognized environment, no environment was created");
                Ok(ProvisionOutcome::Unrecognized {
                    value: value.clone(),
                })
            }
        }
    }

    fn create_venv(&self, config: &PackageConfig) -> PyhatchResult<ProvisionOutcome> {
        let root = config.path();
        let venv = root.join(layout::VENV_DIR);

        if self.filesystem.is_non_empty_dir(&venv)? && !config.force() {
            return Err(ApplicationError::VenvExists { path: venv }.into());
        }

        let create = CommandSpec::new(&self.python)
            .args(["-m", "venv"])
            .path_arg(&venv)
            .arg("--prompt")
            .arg(config.name().as_str());
        run_checked(self.runner.as_ref(), &create)?;

        let pip_upgraded = self.upgrade_pip(root);

        let link = root.join(layout::ACTIVATE_LINK);
        let activate_link = if self.filesystem.exists(&link) {
            warn!(path = %link.display(), "Path exists, not creating activate symlink");
            None
        } else {
            self.filesystem
                .symlink(&layout::venv_activate_relative(), &link)?;
            Some(link)
        };

        Ok(ProvisionOutcome::Venv {
            venv,
            pip_upgraded,
            activate_link,
        })
    }

    /// Best effort: an old pip in a fresh venv is not worth failing over.
    fn upgrade_pip(&self, root: &std::path::Path) -> bool {
        let pip = layout::venv_pip(root);
        let spec = CommandSpec::new(pip.to_string_lossy())
            .args(["install", "--upgrade", "--quiet", "pip"]);
        info!("running {spec}");

        match self.runner.run(&spec) {
            Ok(outcome) if outcome.success() => true,
            Ok(outcome) => {
                warn!(code = ?outcome.code(), "Failed to upgrade pip, continuing");
                false
            }
            Err(e) => {
                warn!(error = %e, "Failed to upgrade pip, continuing");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{CommandOutcome, MockCommandRunner, MockFilesystem};
    use crate::error::PyhatchError;

    fn config(env: EnvironmentKind, force: bool) -> PackageConfig {
        PackageConfig::builder(std::env::temp_dir().join("myapp"))
            .environment(env)
            .force(force)
            .build()
            .unwrap()
    }

    fn empty_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_is_non_empty_dir().returning(|_| Ok(false));
        fs.expect_exists().returning(|_| false);
        fs.expect_symlink().returning(|_, _| Ok(()));
        fs
    }

    #[test]
    fn venv_runs_python_then_pip_and_links() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|spec| {
                spec.program() == "python3"
                    && spec.arguments()[..2] == ["-m", "venv"]
                    && spec.arguments()[3..] == ["--prompt", "myapp"]
            })
            .times(1)
            .returning(|_| Ok(CommandOutcome::ok()));
        runner
            .expect_run()
            .withf(|spec| spec.program().ends_with("pip"))
            .times(1)
            .returning(|_| Ok(CommandOutcome::ok()));

        let mut fs = MockFilesystem::new();
        fs.expect_is_non_empty_dir().returning(|_| Ok(false));
        fs.expect_exists().returning(|_| false);
        fs.expect_symlink()
            .withf(|target, link| {
                let expected = if cfg!(windows) {
                    "venv/Scripts/activate"
                } else {
                    "venv/bin/activate"
                };
                target == std::path::Path::new(expected) && link.ends_with("myapp/activate-venv")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let provisioner = EnvironmentProvisioner::new(Arc::new(fs), Arc::new(runner), "python3");
        let outcome = provisioner
            .provision(&config(EnvironmentKind::Venv, false))
            .unwrap();

        match outcome {
            ProvisionOutcome::Venv {
                pip_upgraded,
                activate_link,
                ..
            } => {
                assert!(pip_upgraded);
                assert!(activate_link.unwrap().ends_with("activate-venv"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn pip_failure_is_only_a_warning() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|spec| spec.program() == "python3")
            .returning(|_| Ok(CommandOutcome::ok()));
        runner
            .expect_run()
            .withf(|spec| spec.program().ends_with("pip"))
            .returning(|spec| {
                Err(ApplicationError::CommandUnavailable {
                    command: spec.to_string(),
                    reason: "not found".into(),
                }
                .into())
            });

        let provisioner =
            EnvironmentProvisioner::new(Arc::new(empty_fs()), Arc::new(runner), "python3");
        let outcome = provisioner
            .provision(&config(EnvironmentKind::Venv, false))
            .unwrap();
        assert!(matches!(
            outcome,
            ProvisionOutcome::Venv {
                pip_upgraded: false,
                ..
            }
        ));
    }

    #[test]
    fn venv_creation_failure_is_fatal() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|_| Ok(CommandOutcome::new(Some(1))));

        let err = EnvironmentProvisioner::new(Arc::new(empty_fs()), Arc::new(runner), "python3")
            .provision(&config(EnvironmentKind::Venv, false))
            .unwrap_err();
        assert!(matches!(
            err,
            PyhatchError::Application(ApplicationError::CommandFailed { code: Some(1), .. })
        ));
    }

    #[test]
    fn existing_venv_needs_force() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_non_empty_dir().returning(|_| Ok(true));
        let runner = MockCommandRunner::new();

        let err = EnvironmentProvisioner::new(Arc::new(fs), Arc::new(runner), "python3")
            .provision(&config(EnvironmentKind::Venv, false))
            .unwrap_err();
        assert!(matches!(
            err,
            PyhatchError::Application(ApplicationError::VenvExists { .. })
        ));
    }

    #[test]
    fn occupied_link_path_is_left_alone() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_non_empty_dir().returning(|_| Ok(true));
        fs.expect_exists().returning(|_| true);
        fs.expect_symlink().never();
        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(|_| Ok(CommandOutcome::ok()));

        let outcome = EnvironmentProvisioner::new(Arc::new(fs), Arc::new(runner), "python3")
            .provision(&config(EnvironmentKind::Venv, true))
            .unwrap();
        assert!(matches!(
            outcome,
            ProvisionOutcome::Venv {
                activate_link: None,
                ..
            }
        ));
    }

    #[test]
    fn pipenv_touches_pipfile_without_truncating() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();
        fs.expect_touch()
            .withf(|path| path.ends_with("myapp/Pipfile"))
            .times(1)
            .returning(|_| Ok(()));
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let outcome = EnvironmentProvisioner::new(Arc::new(fs), Arc::new(runner), "python3")
            .provision(&config(EnvironmentKind::Pipenv, false))
            .unwrap();
        assert!(matches!(outcome, ProvisionOutcome::Lockfile { .. }));
    }

    #[test]
    fn poetry_and_unknown_do_nothing() {
        for (env, expect_skipped) in [
            (EnvironmentKind::Poetry, true),
            (EnvironmentKind::Unrecognized("conda".into()), false),
        ] {
            let mut runner = MockCommandRunner::new();
            runner.expect_run().never();
            let outcome =
                EnvironmentProvisioner::new(Arc::new(MockFilesystem::new()), Arc::new(runner), "python3")
                    .provision(&config(env, false))
                    .unwrap();
            assert_eq!(
                matches!(outcome, ProvisionOutcome::Skipped { .. }),
                expect_skipped
            );
        }
    }
}

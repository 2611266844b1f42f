//! Implementation of the `pyhatch create` command.
//!
//! Responsibility: resolve the target directory, gather the package
//! configuration (defaults or prompts), call the core create service, and
//! print next steps. No business logic lives here.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use pyhatch_adapters::{BuiltinTemplates, LocalFilesystem};
use pyhatch_core::application::{ConfigResolver, CreateReport, CreateService, ProvisionOutcome};
use pyhatch_core::domain::layout;

use crate::{
    cli::CreateArgs,
    commands::resolve_path,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt,
    runner::EchoingRunner,
};

/// Execute the `pyhatch create` command.
///
/// 1. Resolve the target path (NAME or the current directory)
/// 2. Refuse a non-empty target before asking anything, unless `--force`
/// 3. Resolve the configuration from defaults (`--yes`) or prompts
/// 4. Scaffold, provision and init git via `CreateService`
/// 5. Print next-steps guidance
#[instrument(skip_all)]
pub fn execute(args: CreateArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let target = resolve_path(args.name.as_deref().unwrap_or(Path::new(".")))?;
    debug!(path = %target.display(), force = args.force, yes = args.yes, "Target resolved");

    let service = CreateService::new(
        Arc::new(BuiltinTemplates::new()),
        Arc::new(LocalFilesystem::new()),
        Arc::new(EchoingRunner::system(output.clone())),
        &config.tools,
    );
    service.ensure_target_available(&target, args.force)?;

    let resolver = ConfigResolver::new(config.defaults.clone());
    let package = if args.yes {
        resolver.resolve_defaults(&target, args.force)?
    } else {
        let prompter = prompt::session_prompter();
        resolver.resolve_interactive(&target, args.force, prompter.as_ref())?
    };

    output.header(&format!("Creating '{}'...", package.name()))?;
    let report = service.create(&package)?;
    info!(package = %report.name, "Create completed");

    output.success(&format!(
        "Package '{}' created at {}",
        report.name,
        report.root.display()
    ))?;
    print_environment(&report, output)?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        for step in next_steps(&report) {
            output.print(&format!("  {step}"))?;
        }
    }

    Ok(())
}

fn print_environment(report: &CreateReport, output: &OutputManager) -> CliResult<()> {
    match &report.environment {
        ProvisionOutcome::Venv { pip_upgraded, .. } => {
            if !pip_upgraded {
                output.warning("pip could not be upgraded inside the new virtual environment")?;
            }
        }
        ProvisionOutcome::Lockfile { path } => {
            output.info(&format!("Wrote an empty {}", file_name(path)))?;
        }
        ProvisionOutcome::Skipped { tool } => {
            output.info(&format!(
                "{tool} manages its own environment; none was created"
            ))?;
        }
        ProvisionOutcome::Unrecognized { value } => {
            output.warning(&format!(
                "Unrecognized environment '{value}'; none was created"
            ))?;
        }
    }
    Ok(())
}

/// Shell commands to start working on the new package.
fn next_steps(report: &CreateReport) -> Vec<String> {
    let mut steps = vec![format!("cd {}", report.root.display())];
    match &report.environment {
        ProvisionOutcome::Venv {
            venv,
            activate_link,
            ..
        } => {
            let activate = match activate_link {
                Some(link) => file_name(link),
                None => file_name(venv) + "/bin/activate",
            };
            steps.push(format!("source {activate}"));
            steps.push("pip install -e .".into());
        }
        ProvisionOutcome::Lockfile { .. } => steps.push("pipenv install -e .".into()),
        ProvisionOutcome::Skipped { .. } | ProvisionOutcome::Unrecognized { .. } => {}
    }
    if report
        .files
        .iter()
        .any(|file| file.starts_with(layout::TESTS_DIR))
    {
        steps.push("make test".into());
    }
    steps
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

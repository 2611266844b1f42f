//! Implementation of the `pyhatch build` command.

use tracing::instrument;

use crate::{
    cli::BuildArgs,
    commands::{build_service, print_artifacts, resolve_path},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: BuildArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let path = resolve_path(&args.path)?;

    output.header(&format!("Building {}...", path.display()))?;
    let report = build_service(config, output).build(&path)?;

    output.success(&format!(
        "Built {} artifact(s) in {}",
        report.artifacts.len(),
        report.dist.display()
    ))?;
    print_artifacts(output, &report.artifacts)
}

//! Implementation of the `pyhatch publish` command.
//!
//! Builds first (which refuses a non-empty `dist/`), then uploads every file
//! in `dist/` with twine. `--no-build` uploads what is already there.

use tracing::{debug, instrument};

use pyhatch_core::application::PackageIndex;

use crate::{
    cli::PublishArgs,
    commands::{build_service, print_artifacts, resolve_path},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: PublishArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let path = resolve_path(&args.path)?;
    let index = PackageIndex::from_test_flag(args.test);
    let service = build_service(config, output);

    if args.no_build {
        debug!("Skipping build");
    } else {
        output.header(&format!("Building {}...", path.display()))?;
        service.build(&path)?;
    }

    output.header(&format!("Uploading to {index}..."))?;
    let report = service.publish(&path, index)?;

    output.success(&format!(
        "Uploaded {} artifact(s) to {}",
        report.artifacts.len(),
        report.index
    ))?;
    print_artifacts(output, &report.artifacts)
}

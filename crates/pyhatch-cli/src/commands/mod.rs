//! Command implementations.
//!
//! Each module has one `execute` entry point that turns parsed arguments into
//! calls on the core services and prints the outcome. No business logic
//! lives here.

pub mod build;
pub mod completions;
pub mod create;
pub mod publish;

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use pyhatch_adapters::LocalFilesystem;
use pyhatch_core::application::BuildService;

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    runner::EchoingRunner,
};

/// Make `path` absolute against the working directory, dropping `.` and
/// folding `..` so the last segment is a real name.
pub fn resolve_path(path: &Path) -> CliResult<PathBuf> {
    let cwd = std::env::current_dir().with_cli_context(|| "cannot read the current directory")?;
    Ok(absolutize(&cwd, path))
}

fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Build service wired to the real filesystem and an echoing runner.
fn build_service(config: &AppConfig, output: &OutputManager) -> BuildService {
    BuildService::new(
        Arc::new(LocalFilesystem::new()),
        Arc::new(EchoingRunner::system(output.clone())),
        config.tools.clone(),
    )
}

/// Artifact file names, one per line, for the build/publish summaries.
fn print_artifacts(output: &OutputManager, artifacts: &[PathBuf]) -> CliResult<()> {
    for artifact in artifacts {
        let name = artifact
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| artifact.display().to_string());
        output.print(&format!("  {name}"))?;
    }
    Ok(())
}

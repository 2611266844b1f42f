//! Well-known file and directory names inside a package root.

use std::path::{Path, PathBuf};

pub const README: &str = "README.md";
pub const SETUP_PY: &str = "setup.py";
pub const LICENSE: &str = "LICENSE";
pub const GITIGNORE: &str = ".gitignore";
pub const MAKEFILE: &str = "makefile";
pub const INIT_PY: &str = "__init__.py";
pub const TESTS_DIR: &str = "tests";
pub const TEST_FILE: &str = "test_project.py";
pub const PIPFILE: &str = "Pipfile";
pub const VENV_DIR: &str = "venv";
pub const ACTIVATE_LINK: &str = "activate-venv";
pub const DIST_DIR: &str = "dist";

/// Directory holding the venv's executables.
fn venv_bin_dir() -> &'static str {
    if cfg!(windows) { "Scripts" } else { "bin" }
}

/// Activation script relative to the package root, the symlink target.
pub fn venv_activate_relative() -> PathBuf {
    Path::new(VENV_DIR).join(venv_bin_dir()).join("activate")
}

/// The venv's own `pip`.
pub fn venv_pip(root: &Path) -> PathBuf {
    let pip = if cfg!(windows) { "pip.exe" } else { "pip" };
    root.join(VENV_DIR).join(venv_bin_dir()).join(pip)
}

//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pyhatch",
    bin_name = "pyhatch",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create, build and publish Python packages",
    long_about = "pyhatch scaffolds a ready-to-publish Python package \
                  (setup.py, license, tests, makefile, environment, git), \
                  then builds and uploads it to PyPI or TestPyPI.",
    after_help = "EXAMPLES:\n\
        \x20 pyhatch create myapp\n\
        \x20 pyhatch create myapp --yes\n\
        \x20 pyhatch build myapp\n\
        \x20 pyhatch publish myapp --test\n\
        \x20 pyhatch completions bash > /usr/share/bash-completion/completions/pyhatch",
    arg_required_else_help = true,
    subcommand_required    = true,
    propagate_version      = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new Python package.
    #[command(
        visible_alias = "new",
        about = "Create a new Python package",
        after_help = "EXAMPLES:\n\
            \x20 pyhatch create                 # package named after the current directory\n\
            \x20 pyhatch create myapp           # ./myapp, answering the prompts\n\
            \x20 pyhatch create myapp --yes     # ./myapp with every default\n\
            \x20 pyhatch create myapp --force   # reuse a non-empty ./myapp"
    )]
    Create(CreateArgs),

    /// Build source and wheel distributions.
    #[command(
        about = "Build sdist and wheel into <PATH>/dist",
        after_help = "EXAMPLES:\n\
            \x20 pyhatch build myapp\n\
            \x20 pyhatch build ."
    )]
    Build(BuildArgs),

    /// Build and upload to a package index.
    #[command(
        about = "Upload the package to PyPI (or TestPyPI with --test)",
        after_help = "EXAMPLES:\n\
            \x20 pyhatch publish                # build and upload the current directory\n\
            \x20 pyhatch publish myapp --test   # upload to TestPyPI\n\
            \x20 pyhatch publish --no-build     # upload what is already in dist/"
    )]
    Publish(PublishArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pyhatch completions bash > ~/.local/share/bash-completion/completions/pyhatch\n\
            \x20 pyhatch completions zsh  > ~/.zfunc/_pyhatch\n\
            \x20 pyhatch completions fish > ~/.config/fish/completions/pyhatch.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `pyhatch create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Package directory; its last segment becomes the package name.
    #[arg(
        value_name = "NAME",
        help = "Package directory (defaults to the current directory)"
    )]
    pub name: Option<PathBuf>,

    /// Skip the prompts and use every default.
    #[arg(short = 'y', long = "yes", help = "Use default values without prompting")]
    pub yes: bool,

    /// Write into a non-empty directory.
    #[arg(
        long = "force",
        help = "Create the package even if the directory is not empty"
    )]
    pub force: bool,
}

// ── build ─────────────────────────────────────────────────────────────────────

/// Arguments for `pyhatch build`.
#[derive(Debug, Args)]
pub struct BuildArgs {
    #[arg(value_name = "PATH", help = "Package directory containing setup.py")]
    pub path: PathBuf,
}

// ── publish ───────────────────────────────────────────────────────────────────

/// Arguments for `pyhatch publish`.
#[derive(Debug, Args)]
pub struct PublishArgs {
    #[arg(
        value_name = "PATH",
        default_value = ".",
        help = "Package directory containing setup.py"
    )]
    pub path: PathBuf,

    /// Upload to the staging index instead of PyPI.
    #[arg(short = 't', long = "test", help = "Publish to TestPyPI")]
    pub test: bool,

    #[arg(
        long = "no-build",
        help = "Upload the existing dist/ artifacts without building"
    )]
    pub no_build: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pyhatch completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

//! Flags shared by `create`, `build`, `publish` and `completions`.

use std::convert::Infallible;
use std::path::PathBuf;

use clap::{ArgAction, Args};
use tracing_subscriber::filter::LevelFilter;

/// Flags accepted before or after any subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// `-v` logs each external command, `-vv` adds file system and
    /// provisioning detail, `-vvv` traces everything.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Log external commands (-v), details (-vv), everything (-vvv)"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal; command echo and next steps are
    /// hidden too.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Plain output. `NO_COLOR` set to any non-empty value has the same
    /// effect (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = parse_no_color,
        hide_env_values = true,
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file with `[defaults]`, `[tools]` and `[output]` tables.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of the user config"
    )]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Log level for the pyhatch crates; `--quiet` wins over `-v`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// `NO_COLOR` counts when non-empty, whatever the value. The flag itself
/// arrives as `"true"` and its absence as `"false"`.
fn parse_no_color(value: &str) -> Result<bool, Infallible> {
    Ok(!value.is_empty() && !value.eq_ignore_ascii_case("false"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            ..GlobalArgs::default()
        }
    }

    #[test]
    fn levels_follow_verbose_count() {
        assert_eq!(args(0, false).log_level(), LevelFilter::WARN);
        assert_eq!(args(1, false).log_level(), LevelFilter::INFO);
        assert_eq!(args(2, false).log_level(), LevelFilter::DEBUG);
        assert_eq!(args(3, false).log_level(), LevelFilter::TRACE);
        assert_eq!(args(10, false).log_level(), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(args(3, true).log_level(), LevelFilter::ERROR);
    }

    #[test]
    fn no_color_accepts_any_non_empty_value() {
        assert_eq!(parse_no_color("1"), Ok(true));
        assert_eq!(parse_no_color("0"), Ok(true));
        assert_eq!(parse_no_color("yes"), Ok(true));
        assert_eq!(parse_no_color("true"), Ok(true));
        assert_eq!(parse_no_color(""), Ok(false));
        assert_eq!(parse_no_color("false"), Ok(false));
    }
}

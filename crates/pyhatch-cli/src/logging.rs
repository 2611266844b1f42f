//! Tracing subscriber for the `pyhatch` binary.
//!
//! Core and adapters emit events; this is the one place a subscriber is
//! installed. Levels come from [`GlobalArgs::log_level`] unless `RUST_LOG`
//! is set. At DEBUG and above each line is tagged with its origin
//! (`pyhatch (module:line): message`) so verbose runs show where a step
//! happened.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown; dependencies stay at the default (off).
const CRATES: [&str; 3] = ["pyhatch", "pyhatch_core", "pyhatch_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = args.log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level)));
    let located = level >= LevelFilter::DEBUG;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_level(located)
        .with_target(located)
        .with_line_number(located)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

fn directives(level: LevelFilter) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

//! Log output for the `deploygo` binary.
//!
//! Events from all three crates go to stderr so stdout stays reserved for
//! command output (`list --format json`, `config get`). `-v` raises the
//! level one step per repetition starting from `warn`; `-q` drops it to
//! `error`. A set `RUST_LOG` replaces the computed filter entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the stderr subscriber. Call once, first thing in `main`.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level_for(args))));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// One level for the binary and both library crates.
fn filter_directives(level: &str) -> String {
    format!("deploygo={level},deploygo_core={level},deploygo_adapters={level}")
}

/// `--quiet` beats any number of `-v`.
fn level_for(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
        }
    }

    #[test]
    fn level_quiet() {
        assert_eq!(level_for(&args_with(0, true)), "error");
    }

    #[test]
    fn level_default() {
        assert_eq!(level_for(&args_with(0, false)), "warn");
    }

    #[test]
    fn level_verbose_counts() {
        assert_eq!(level_for(&args_with(1, false)), "info");
        assert_eq!(level_for(&args_with(2, false)), "debug");
        assert_eq!(level_for(&args_with(3, false)), "trace");
        assert_eq!(level_for(&args_with(10, false)), "trace");
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(level_for(&args_with(3, true)), "error");
    }

    #[test]
    fn directives_cover_every_crate() {
        let directives = filter_directives("debug");
        assert!(directives.contains("deploygo=debug"));
        assert!(directives.contains("deploygo_core=debug"));
        assert!(directives.contains("deploygo_adapters=debug"));
    }
}

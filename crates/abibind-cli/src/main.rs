mod cli;
mod commands;

use std::process::ExitCode;

use cli::{BuildParams, ExtractParams, build_cli};
use commands::extract::ExtractArgs;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    let args: ExtractArgs = match matches.subcommand() {
        Some(("extract", m)) => ExtractParams::from_matches(m).into(),
        Some(("compile-and-extract", m)) => BuildParams::from_matches(m).into(),
        _ => unreachable!("clap should have caught this"),
    };
    init_tracing(matches.get_count("verbose"), args.log_color);

    commands::extract::run(args)
}

/// Logs go to stderr. `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbosity: u8, ansi: bool) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .init();
}

//! rawscale command-line entry point

use anyhow::{Context, Result};
use clap::Parser;
use rawscale::pipeline::{run, sink_for};
use rawscale::{Cli, RunConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("rawscale: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<()> {
    let config = RunConfig::from_cli(cli).context("invalid arguments")?;
    let mut sink = sink_for(&config);
    let summary = run(&config, sink.as_deref_mut())
        .with_context(|| format!("resampling {}", config.source.display()))?;

    println!(
        "{} -> {} ({:?}, {:?})",
        summary.source, summary.output, summary.direction, summary.policy
    );
    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

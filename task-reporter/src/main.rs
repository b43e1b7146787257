use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

mod args;
use args::Args;

mod core;

use common::ProcessEnv;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = Args::parse();
    debug!("Starting task reporter with {:?}", args);

    let stdout = io::stdout();
    if let Err(e) = core::run(&args, &ProcessEnv, stdout.lock()) {
        let what = if e.is_config_error() {
            "loading job configuration"
        } else {
            "reporting task environment"
        };
        return Err(e).context(format!("failed {what}"));
    }

    Ok(())
}

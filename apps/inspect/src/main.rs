mod cli;
mod report;

use crate::cli::Cli;
use anyhow::Context;
use clap::Parser;
use ortx_logger::Logger;
use std::io::{self, Write};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let _log = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .configure(&config.logging)?
        .init()
        .context("Failed to initialize logging")?;
    info!(
        source = %cli.config_source(),
        script_ops = config.script_ops.enabled,
        "Configuration resolved"
    );

    let discovery = ortx::bootstrap(&config);

    let mut out = io::stdout().lock();
    if cli.json {
        report::write_json(&mut out, &discovery)?;
    } else {
        report::write_text(&mut out, &discovery)?;
    }
    out.flush()?;
    Ok(())
}

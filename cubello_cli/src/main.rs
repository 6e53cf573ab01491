//! 端末で動作する最小 UI（標準入力から1行ずつ命令を読む）。

mod cli;
mod command;
mod render;
mod session;

use std::io;

use anyhow::{Context as _, Result, anyhow};
use clap::Parser as _;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, LogFormat};
use crate::session::Session;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    info!(hints = args.hints, "starting cubello");

    let mut session = Session::new(args.hints);
    session.run(io::stdin().lock(), io::stdout().lock())
}

/// Installs the global subscriber; logs go to stderr so they never mix with the board.
fn init_tracing(args: &Args) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&args.log_level)
            .with_context(|| format!("invalid --log-level {:?}", args.log_level))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    let installed = match args.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}

// SPDX-License-Identifier: Apache-2.0

//! jira - work with your Jira Cloud issues from the terminal.
//!
//! List the issues assigned to you, create new ones and move them through
//! their workflow without leaving the shell.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use jira_core::config;
use tracing::debug;

use crate::cli::{Cli, Commands, OutputContext};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let ctx = OutputContext::from_cli(cli.output, cli.quiet);
    let config_path = cli.config.clone().unwrap_or_else(config::config_file_path);

    match run(cli, &ctx, &config_path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", errors::format_error(&e, &config_path));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, ctx: &OutputContext, config_path: &Path) -> Result<()> {
    let settings = config::load_settings(config_path).context("Failed to load configuration")?;
    debug!(path = %config_path.display(), "Configuration loaded");

    // `version` checks on its own; `configure` is interactive setup.
    let notify = ctx.is_interactive() && matches!(cli.command, Commands::Issue(_));

    commands::run(cli.command, ctx, config_path, &settings).await?;

    if notify {
        commands::version::notify_if_outdated(&settings).await;
    }
    Ok(())
}

// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the jira CLI.

pub mod configure;
pub mod create;
pub mod issue;
pub mod transition;
pub mod types;
pub mod version;

#[cfg(test)]
pub(crate) mod fake;

use std::io::{self, StdinLock, Stdout};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use jira_core::{ConfigStore, IssueTracker, JiraClient, Prompter, Settings};
use tracing::debug;

use crate::cli::{Commands, ConfigureCommand, IssueCommand, OutputContext};
use crate::output;

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if ctx.is_interactive() {
        let s = ProgressBar::new_spinner();
        s.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid spinner template"),
        );
        s.set_message(message.to_string());
        s.enable_steady_tick(Duration::from_millis(100));
        Some(s)
    } else {
        None
    }
}

/// Prompter over the terminal.
fn terminal_prompter() -> Prompter<StdinLock<'static>, Stdout> {
    Prompter::new(io::stdin().lock(), io::stdout())
}

/// Builds a Jira client from the configured credentials.
fn connect(settings: &Settings) -> Result<JiraClient> {
    let credentials = settings.credentials()?;
    debug!(domain = %credentials.domain, "Connecting to Jira");
    let client = JiraClient::new(&credentials, Duration::from_secs(settings.timeout_seconds))?;
    Ok(client)
}

/// Dispatch to the appropriate command handler.
pub async fn run(
    command: Commands,
    ctx: &OutputContext,
    config_path: &Path,
    settings: &Settings,
) -> Result<()> {
    match command {
        Commands::Configure(args) => {
            let mut store =
                ConfigStore::load(config_path).context("Failed to load the config file")?;
            let mut prompter = terminal_prompter();
            match args.command {
                None => {
                    configure::menu(&mut store, &mut prompter, || {
                        Ok(Box::new(connect(settings)?) as Box<dyn IssueTracker>)
                    })
                    .await
                }
                Some(ConfigureCommand::Credentials) => {
                    configure::credentials(&mut store, &mut prompter)
                }
                Some(ConfigureCommand::Projects) => {
                    configure::id_list(&mut store, &mut prompter, configure::PROJECTS)
                }
                Some(ConfigureCommand::IssueTypes) => {
                    configure::id_list(&mut store, &mut prompter, configure::ISSUE_TYPES)
                }
            }
        }

        Commands::Issue(issue_cmd) => {
            let client = connect(settings)?;
            match issue_cmd {
                IssueCommand::Get { all: true, .. } => {
                    let spinner = maybe_spinner(ctx, "Fetching issues...");
                    let result = issue::list(&client).await;
                    if let Some(s) = spinner {
                        s.finish_and_clear();
                    }
                    output::render(&result?, ctx)
                }
                IssueCommand::Get { id: Some(id), .. } => {
                    let spinner = maybe_spinner(ctx, "Fetching issue...");
                    let result = issue::get(&client, &id).await;
                    if let Some(s) = spinner {
                        s.finish_and_clear();
                    }
                    output::render(&result?, ctx)
                }
                IssueCommand::Get { id: None, .. } => bail!("Missing issue ID or --all"),
                IssueCommand::Create {
                    project_id,
                    issue_type_id,
                    title,
                    description,
                } => {
                    let args = create::CreateArgs {
                        project_id,
                        issue_type_id,
                        title,
                        description,
                    };
                    let result =
                        create::run(&client, &mut terminal_prompter(), settings, args).await?;
                    output::render(&result, ctx)
                }
                IssueCommand::Transition { id } => {
                    match transition::run(&client, &mut terminal_prompter(), &id).await? {
                        Some(result) => output::render(&result, ctx),
                        None => Ok(()),
                    }
                }
            }
        }

        Commands::Version => {
            output::render(&version::run(), ctx)?;
            if !ctx.quiet {
                version::notify_if_outdated(settings).await;
            }
            Ok(())
        }
    }
}

// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for jira.
//!
//! Uses clap's derive API with noun-verb subcommands
//! (`jira issue get`, `jira configure projects`, ...).

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

/// Output format for CLI results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
}

/// Global output configuration passed to commands.
#[derive(Clone, Debug)]
pub struct OutputContext {
    /// Output format (text, json, yaml)
    pub format: OutputFormat,
    /// Suppress non-essential output (spinners, update notices)
    pub quiet: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool) -> Self {
        Self {
            format,
            quiet,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners, colors) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet && matches!(self.format, OutputFormat::Text)
    }
}

/// jira - work with your Jira Cloud issues from the terminal.
#[derive(Parser, Debug)]
#[command(name = "jira")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/jira/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress non-essential output (spinners, update notices)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable debug-level logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure credentials, issue types, or projects
    Configure(ConfigureArgs),

    /// Work with Jira issues
    #[command(subcommand)]
    Issue(IssueCommand),

    /// Show the version and check for updates
    Version,
}

/// Arguments of `jira configure`.
#[derive(Args, Debug)]
pub struct ConfigureArgs {
    /// What to configure; without one, a menu is shown
    #[command(subcommand)]
    pub command: Option<ConfigureCommand>,
}

/// Configure subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureCommand {
    /// Configure the Jira domain, email and API token
    Credentials,

    /// Configure the list of available project IDs
    Projects,

    /// Configure the list of available issue type IDs
    #[command(alias = "types")]
    IssueTypes,
}

/// Issue subcommands
#[derive(Subcommand, Debug)]
pub enum IssueCommand {
    /// Get your assigned issues, or one issue by ID
    ///
    /// Issues whose status category is 'Done' are not listed.
    #[command(group(ArgGroup::new("target").required(true).args(["id", "all"])))]
    Get {
        /// Issue ID or key (e.g., PROJ-123)
        id: Option<String>,

        /// Get all issues assigned to you
        #[arg(long, short = 'a')]
        all: bool,
    },

    /// Create an issue assigned to you
    Create {
        /// Project ID (default: configured default project)
        #[arg(long = "project-id", short = 'p')]
        project_id: Option<i64>,

        /// Issue type ID (default: configured default issue type)
        #[arg(long = "issue-type-id", short = 't')]
        issue_type_id: Option<i64>,

        /// Issue title; prompted for when omitted
        #[arg(long)]
        title: Option<String>,

        /// Issue description; prompted for when omitted
        #[arg(long)]
        description: Option<String>,
    },

    /// Move an issue through one of its available transitions
    Transition {
        /// Issue ID or key (e.g., PROJ-123)
        id: String,
    },
}

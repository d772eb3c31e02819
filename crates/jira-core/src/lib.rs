// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Jira Core
//!
//! Core library for the `jira` CLI, a terminal client for Jira Cloud.
//!
//! This crate provides reusable components for:
//! - A line-oriented prompt engine with masked defaults and a quit sentinel
//! - Numbered selection lists rendered as aligned tables
//! - A YAML-backed key/value config store with interactive upsert
//! - Jira Cloud REST integration (issues, transitions, projects)
//! - A throttled check for newer releases
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::io::{self, BufReader};
//!
//! use jira_core::{ConfigStore, Prompter, config_file_path, keys, upsert};
//!
//! # fn example() -> jira_core::Result<()> {
//! let mut store = ConfigStore::load(config_file_path())?;
//! let mut prompter = Prompter::new(BufReader::new(io::stdin()), io::stdout());
//!
//! upsert(&mut store, &mut prompter, keys::TOKEN, "Enter the Jira API token", None, true)?;
//! store.write_back()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Paths and layered runtime settings
//! - [`error`] - Error types
//! - [`jira`] - Jira REST API client
//! - [`prompt`] - Prompt engine
//! - [`select`] - Selection lists
//! - [`store`] - Config store
//! - [`upsert`] - Interactive config updates
//! - [`update`] - Release check

// ============================================================================
// Error Handling
// ============================================================================

pub use error::JiraError;

/// Convenience Result type for jira operations.
///
/// This is equivalent to `std::result::Result<T, JiraError>`.
pub type Result<T> = std::result::Result<T, JiraError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    Credentials, Settings, config_dir, config_file_path, data_dir, ensure_parent_dir, keys,
    load_settings,
};
pub use store::{ConfigStore, ConfigValue};
pub use upsert::{upsert, upsert_int};

// ============================================================================
// Interaction
// ============================================================================

pub use prompt::{PromptOutcome, PromptSpec, Prompter, QUIT_SENTINEL, mask_secret};
pub use select::{SelectableList, Selection, parse_choice, select};
pub use table::TablePrinter;

// ============================================================================
// Jira Integration
// ============================================================================

pub use jira::{Issue, IssueTracker, JiraClient, NewIssue, Project, Transition};

// ============================================================================
// Release Check
// ============================================================================

pub use update::{UpdateChecker, is_outdated};

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod jira;
pub mod prompt;
pub mod select;
pub mod store;
pub mod table;
pub mod update;
pub mod upsert;

// SPDX-License-Identifier: Apache-2.0

//! Configuration paths and layered runtime settings.
//!
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `JIRA_`)
//! 2. Config file: `~/.config/jira/config.yaml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Use a different API token for one invocation
//! JIRA_TOKEN=xxxx jira issue get --all
//! ```
//!
//! Values typed in by the user are persisted through
//! [`ConfigStore`](crate::store::ConfigStore); [`Settings`] is the read-only
//! view used to talk to Jira.

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use secrecy::SecretString;
use serde::Deserialize;
use tracing::debug;

use crate::error::JiraError;

/// Config keys shared by the store, the settings and the CLI flows.
pub mod keys {
    /// Jira Cloud domain, e.g. `example.atlassian.net`.
    pub const DOMAIN: &str = "domain";
    /// Account email used for basic auth.
    pub const EMAIL: &str = "email";
    /// Jira API token.
    pub const TOKEN: &str = "token";
    /// Project used by `jira issue create` when `-p` is not given.
    pub const DEFAULT_PROJECT_ID: &str = "default_project_id";
    /// Issue type used by `jira issue create` when `-t` is not given.
    pub const DEFAULT_ISSUE_TYPE_ID: &str = "default_issue_type_id";
    /// Project ids available for selection.
    pub const PROJECT_IDS: &str = "project_ids";
    /// Issue type ids available for selection.
    pub const ISSUE_TYPE_IDS: &str = "issue_type_ids";
}

/// Runtime settings resolved from the config file and environment.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Jira Cloud domain.
    pub domain: Option<String>,
    /// Account email.
    pub email: Option<String>,
    /// API token.
    pub token: Option<String>,
    /// Default project id for new issues.
    pub default_project_id: Option<i64>,
    /// Default issue type id for new issues.
    pub default_issue_type_id: Option<i64>,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Look for newer releases after a command.
    pub check_for_updates: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            domain: None,
            email: None,
            token: None,
            default_project_id: None,
            default_issue_type_id: None,
            timeout_seconds: 30,
            check_for_updates: true,
        }
    }
}

/// Everything needed to authenticate against Jira.
#[derive(Debug)]
pub struct Credentials {
    /// Jira Cloud domain.
    pub domain: String,
    /// Account email.
    pub email: String,
    /// API token.
    pub token: SecretString,
}

impl Settings {
    /// Returns the credentials, or `NotConfigured` naming the first missing key.
    pub fn credentials(&self) -> Result<Credentials, JiraError> {
        let domain = require(self.domain.as_deref(), keys::DOMAIN)?;
        let email = require(self.email.as_deref(), keys::EMAIL)?;
        let token = require(self.token.as_deref(), keys::TOKEN)?;

        Ok(Credentials {
            domain: domain.to_string(),
            email: email.to_string(),
            token: SecretString::from(token.to_string()),
        })
    }
}

fn require<'a>(value: Option<&'a str>, key: &str) -> Result<&'a str, JiraError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(JiraError::NotConfigured {
            key: key.to_string(),
        }),
    }
}

/// Returns the jira configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/jira`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("jira");
    }
    dirs::home_dir()
        .expect("Could not determine home directory - is HOME set?")
        .join(".config")
        .join("jira")
}

/// Returns the jira data directory.
///
/// Respects the `XDG_DATA_HOME` environment variable if set,
/// otherwise defaults to `~/.local/share/jira`.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME")
        && !xdg_data.is_empty()
    {
        return PathBuf::from(xdg_data).join("jira");
    }
    dirs::home_dir()
        .expect("Could not determine home directory - is HOME set?")
        .join(".local")
        .join("share")
        .join("jira")
}

/// Returns the path to the default configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.yaml")
}

/// Creates the parent directory of `path` so the store can be written back.
pub fn ensure_parent_dir(path: &Path) -> Result<(), JiraError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| JiraError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Load runtime settings from `path` (if it exists) and `JIRA_*` variables.
///
/// # Errors
///
/// Returns `JiraError::Config` if the config file exists but is invalid.
pub fn load_settings(path: &Path) -> Result<Settings, JiraError> {
    let config = Config::builder()
        .add_source(File::from(path).format(FileFormat::Yaml).required(false))
        .add_source(Environment::with_prefix("JIRA").try_parsing(true))
        .build()?;

    let settings: Settings = config.try_deserialize()?;
    debug!(path = %path.display(), "Settings loaded");

    Ok(settings)
}

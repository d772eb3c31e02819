// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `JiraError` and appends a hint for the error
//! kinds a user can fix themselves.

use std::path::Path;

use anyhow::Error;
use jira_core::config::keys;
use jira_core::error::JiraError;

/// Formats an error for CLI display with helpful hints.
///
/// If the error chain contains no `JiraError`, the full chain is returned.
/// `config_path` is the config file in use, named in config and I/O hints.
pub fn format_error(error: &Error, config_path: &Path) -> String {
    let Some(jira_err) = error.chain().find_map(|e| e.downcast_ref::<JiraError>()) else {
        return format!("{error:#}");
    };

    let message = format!("{error:#}");
    match jira_err {
        JiraError::NotConfigured { key } if key == keys::PROJECT_IDS => {
            format!("{message}\n\nTip: Add project IDs with `jira configure projects`.")
        }
        JiraError::NotConfigured { key } if key == keys::ISSUE_TYPE_IDS => {
            format!("{message}\n\nTip: Add issue type IDs with `jira configure issue-types`.")
        }
        JiraError::Api { status, .. } if matches!(status, 401 | 403) => format!(
            "{message}\n\nTip: Check your email and API token with `jira configure credentials`."
        ),
        JiraError::Api { status: 404, .. } => {
            format!("{message}\n\nTip: Check the ID, and that your account can see it.")
        }
        JiraError::Network(_) => {
            format!("{message}\n\nTip: Check your internet connection and the configured domain.")
        }
        JiraError::Config { .. } | JiraError::Io { .. } => format!(
            "{message}\n\nTip: Check your config file at {}",
            config_path.display()
        ),
        _ => message,
    }
}

// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.
//!
//! Handlers return data instead of printing; [`crate::output`] renders it.

use jira_core::{Issue, Transition};
use serde::Serialize;

/// Result from `jira issue get --all`.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct IssuesResult {
    /// Assigned issues that are not done.
    pub issues: Vec<Issue>,
}

/// Result from `jira issue get <ID>`.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct IssueResult {
    /// The requested issue.
    pub issue: Issue,
}

/// Result from `jira issue create`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateResult {
    /// Key of the created issue.
    pub key: String,
    /// Title of the created issue.
    pub title: String,
    /// Browser URL of the created issue.
    pub url: String,
}

/// Result from `jira issue transition`.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionResult {
    /// Issue the transition was applied to.
    pub issue_id: String,
    /// The applied transition.
    pub transition: Transition,
}

/// Result from `jira version`.
#[derive(Debug, Clone, Serialize)]
pub struct VersionResult {
    /// Binary name.
    pub name: String,
    /// Running version.
    pub version: String,
}

// SPDX-License-Identifier: Apache-2.0

//! `jira issue get` command.

use anyhow::{Context, Result};
use jira_core::IssueTracker;
use tracing::{debug, instrument};

use super::types::{IssueResult, IssuesResult};

/// Fetches the open issues assigned to the current user.
#[instrument(skip_all)]
pub async fn list(tracker: &dyn IssueTracker) -> Result<IssuesResult> {
    let issues = tracker
        .assigned_issues()
        .await
        .context("Failed to get assigned issues")?;
    debug!(count = issues.len(), "Assigned issues fetched");
    Ok(IssuesResult { issues })
}

/// Fetches one issue by id or key.
#[instrument(skip(tracker))]
pub async fn get(tracker: &dyn IssueTracker, issue_id: &str) -> Result<IssueResult> {
    let issue = tracker
        .issue(issue_id)
        .await
        .with_context(|| format!("Failed to get issue {issue_id}"))?;
    Ok(IssueResult { issue })
}

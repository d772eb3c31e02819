// SPDX-License-Identifier: Apache-2.0

//! `jira issue create` command.
//!
//! Title and description come from flags or are prompted for. Project and
//! issue type default to the configured ones.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use jira_core::config::keys;
use jira_core::{IssueTracker, JiraError, NewIssue, Prompter, Settings};
use tracing::{debug, instrument};

use super::types::CreateResult;

/// Arguments of `jira issue create`.
#[derive(Debug, Default)]
pub struct CreateArgs {
    /// Project id, overriding the configured default.
    pub project_id: Option<i64>,
    /// Issue type id, overriding the configured default.
    pub issue_type_id: Option<i64>,
    /// Title; prompted for when `None`.
    pub title: Option<String>,
    /// Description; prompted for when `None`.
    pub description: Option<String>,
}

/// Validates an issue title, returning it trimmed.
fn validate_title(title: &str) -> Result<String, JiraError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(JiraError::validation("issue title can't be empty"));
    }
    Ok(title.to_string())
}

fn resolve_id(flag: Option<i64>, configured: Option<i64>, key: &str) -> Result<i64, JiraError> {
    match flag.or(configured) {
        Some(id) => Ok(id),
        None => Err(JiraError::NotConfigured {
            key: key.to_string(),
        }),
    }
}

/// Creates an issue assigned to the current user.
#[instrument(skip_all)]
pub async fn run<R: BufRead, W: Write>(
    tracker: &dyn IssueTracker,
    prompter: &mut Prompter<R, W>,
    settings: &Settings,
    args: CreateArgs,
) -> Result<CreateResult> {
    let project_id = resolve_id(
        args.project_id,
        settings.default_project_id,
        keys::DEFAULT_PROJECT_ID,
    )?;
    let issue_type_id = resolve_id(
        args.issue_type_id,
        settings.default_issue_type_id,
        keys::DEFAULT_ISSUE_TYPE_ID,
    )?;

    let title = match args.title {
        Some(title) => title,
        None => prompter.ask("Enter the issue's title")?,
    };
    let title = validate_title(&title)?;

    let description = match args.description {
        Some(description) => description,
        None => prompter.ask("Enter the issue's description (optional)")?,
    };

    debug!(project_id, issue_type_id, "Creating issue");
    let new_issue = NewIssue::builder()
        .project_id(project_id.to_string())
        .issue_type_id(issue_type_id.to_string())
        .title(title.clone())
        .description(description.trim())
        .build();

    let key = tracker
        .create_issue(&new_issue)
        .await
        .context("Failed to create Jira issue")?;

    Ok(CreateResult {
        url: tracker.browse_url(&key),
        key,
        title,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::commands::fake::FakeTracker;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn settings() -> Settings {
        Settings {
            default_project_id: Some(10000),
            default_issue_type_id: Some(10002),
            ..Settings::default()
        }
    }

    #[tokio::test]
    async fn test_create_prompts_for_title_and_description() {
        let tracker = FakeTracker::default();
        let mut p = prompter("Fix login\nUsers cannot sign in.\n");

        let result = run(&tracker, &mut p, &settings(), CreateArgs::default())
            .await
            .unwrap();

        assert_eq!(result.key, "PROJ-101");
        assert_eq!(result.url, "https://example.atlassian.net/browse/PROJ-101");
        let created = tracker.created.lock().unwrap();
        assert_eq!(created[0].project_id, "10000");
        assert_eq!(created[0].issue_type_id, "10002");
        assert_eq!(created[0].title, "Fix login");
        assert_eq!(created[0].description, "Users cannot sign in.");

        let output = String::from_utf8(p.into_inner().1).unwrap();
        assert_eq!(
            output,
            "Enter the issue's title: Enter the issue's description (optional): "
        );
    }

    #[tokio::test]
    async fn test_create_flags_skip_prompts() {
        let tracker = FakeTracker::default();
        let mut p = prompter("");
        let args = CreateArgs {
            project_id: Some(20000),
            issue_type_id: Some(3),
            title: Some("From flags".to_string()),
            description: Some(String::new()),
        };

        run(&tracker, &mut p, &settings(), args).await.unwrap();

        let created = tracker.created.lock().unwrap();
        assert_eq!(created[0].project_id, "20000");
        assert_eq!(created[0].issue_type_id, "3");
        assert!(created[0].description.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title() {
        let tracker = FakeTracker::default();
        let mut p = prompter("   \n");

        let err = run(&tracker, &mut p, &settings(), CreateArgs::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "issue title can't be empty");
        assert!(tracker.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_without_default_project() {
        let tracker = FakeTracker::default();
        let mut p = prompter("Title\n\n");

        let err = run(
            &tracker,
            &mut p,
            &Settings::default(),
            CreateArgs::default(),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<JiraError>(),
            Some(JiraError::NotConfigured { key }) if key == "default_project_id"
        ));
    }
}

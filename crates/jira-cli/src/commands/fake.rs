// SPDX-License-Identifier: Apache-2.0

//! In-memory [`IssueTracker`] for command tests.

use std::sync::Mutex;

use async_trait::async_trait;
use jira_core::{Issue, IssueTracker, JiraError, NewIssue, Project, Result, Transition};

/// Serves canned issues, transitions and projects and records writes.
pub struct FakeTracker {
    pub issues: Vec<Issue>,
    pub transitions: Vec<Transition>,
    pub projects: Vec<Project>,
    pub created: Mutex<Vec<NewIssue>>,
    pub applied: Mutex<Vec<(String, String)>>,
}

fn issue(id: &str, key: &str, title: &str, description: &str) -> Issue {
    Issue {
        id: id.to_string(),
        key: key.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status: "To Do".to_string(),
        status_category: "To Do".to_string(),
        project_id: Some("10000".to_string()),
        issue_type_id: Some("10002".to_string()),
        url: format!("https://example.atlassian.net/rest/api/3/issue/{id}"),
    }
}

fn transition(id: &str, name: &str, category: &str) -> Transition {
    Transition {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
    }
}

fn project(id: &str, key: &str, name: &str) -> Project {
    Project {
        id: id.to_string(),
        key: key.to_string(),
        name: name.to_string(),
        url: format!("https://example.atlassian.net/rest/api/3/project/{id}"),
    }
}

fn not_found(what: &str) -> JiraError {
    JiraError::Api {
        status: 404,
        message: format!("{what} does not exist"),
    }
}

impl Default for FakeTracker {
    fn default() -> Self {
        Self {
            issues: vec![
                issue("10001", "PROJ-1", "Fix login", "Users cannot sign in."),
                issue("10002", "PROJ-2", "Write docs", ""),
            ],
            transitions: vec![
                transition("11", "To Do", "To Do"),
                transition("21", "In Progress", "In Progress"),
                transition("31", "Done", "Done"),
            ],
            projects: vec![
                project("10000", "PROJ", "Platform"),
                project("10001", "WEB", "Website"),
            ],
            created: Mutex::new(Vec::new()),
            applied: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl IssueTracker for FakeTracker {
    async fn assigned_issues(&self) -> Result<Vec<Issue>> {
        Ok(self.issues.clone())
    }

    async fn issue(&self, issue_id: &str) -> Result<Issue> {
        self.issues
            .iter()
            .find(|i| i.id == issue_id || i.key == issue_id)
            .cloned()
            .ok_or_else(|| not_found("Issue"))
    }

    async fn create_issue(&self, new_issue: &NewIssue) -> Result<String> {
        let mut created = self.created.lock().unwrap();
        created.push(new_issue.clone());
        Ok(format!("PROJ-{}", 100 + created.len()))
    }

    async fn transitions(&self, issue_id: &str) -> Result<Vec<Transition>> {
        self.issue(issue_id).await?;
        Ok(self.transitions.clone())
    }

    async fn transition_issue(&self, issue_id: &str, transition_id: &str) -> Result<()> {
        self.applied
            .lock()
            .unwrap()
            .push((issue_id.to_string(), transition_id.to_string()));
        Ok(())
    }

    async fn project(&self, project_id: i64) -> Result<Project> {
        self.projects
            .iter()
            .find(|p| p.id == project_id.to_string())
            .cloned()
            .ok_or_else(|| not_found("Project"))
    }

    fn browse_url(&self, issue_key: &str) -> String {
        format!("https://example.atlassian.net/browse/{issue_key}")
    }
}

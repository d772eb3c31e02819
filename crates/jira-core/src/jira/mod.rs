// SPDX-License-Identifier: Apache-2.0

//! Jira Cloud integration.
//!
//! [`IssueTracker`] is the seam the CLI commands are written against;
//! [`JiraClient`] implements it over the Jira REST API v3.

use async_trait::async_trait;

use crate::Result;

mod adf;
pub mod client;
pub mod issues;
pub mod projects;
pub mod transitions;

pub use client::JiraClient;
pub use issues::{Issue, NewIssue};
pub use projects::Project;
pub use transitions::Transition;

/// Operations the CLI needs from an issue tracker.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Issues assigned to the current user whose status category is not Done.
    async fn assigned_issues(&self) -> Result<Vec<Issue>>;

    /// A single issue, including its plain-text description.
    async fn issue(&self, issue_id: &str) -> Result<Issue>;

    /// Creates an issue assigned to the current user and returns its key.
    async fn create_issue(&self, new_issue: &NewIssue) -> Result<String>;

    /// Transitions currently available for an issue.
    async fn transitions(&self, issue_id: &str) -> Result<Vec<Transition>>;

    /// Moves an issue through a transition.
    async fn transition_issue(&self, issue_id: &str, transition_id: &str) -> Result<()>;

    /// A project by id.
    async fn project(&self, project_id: i64) -> Result<Project>;

    /// Browser URL of an issue.
    fn browse_url(&self, issue_key: &str) -> String;
}

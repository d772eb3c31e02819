// SPDX-License-Identifier: Apache-2.0

//! Workflow transitions of an issue.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::JiraClient;
use super::issues::{NameField, escape};
use crate::Result;

/// A transition an issue can currently take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// Transition id. Jira sends ids as strings.
    pub id: String,
    /// Transition name, e.g. "Start progress".
    pub name: String,
    /// Status category of the target status.
    pub category: String,
}

#[derive(Debug, Deserialize)]
struct TransitionsResponse {
    #[serde(default)]
    transitions: Vec<TransitionNode>,
}

#[derive(Debug, Deserialize)]
struct TransitionNode {
    id: String,
    name: String,
    to: TargetStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TargetStatus {
    status_category: NameField,
}

impl From<TransitionNode> for Transition {
    fn from(node: TransitionNode) -> Self {
        Self {
            id: node.id,
            name: node.name,
            category: node.to.status_category.name,
        }
    }
}

fn transitions_path(issue_id: &str) -> String {
    format!("rest/api/3/issue/{}/transitions", escape(issue_id))
}

impl JiraClient {
    pub(crate) async fn fetch_transitions(&self, issue_id: &str) -> Result<Vec<Transition>> {
        let TransitionsResponse { transitions } = self.get(&transitions_path(issue_id)).await?;
        Ok(transitions.into_iter().map(Transition::from).collect())
    }

    pub(crate) async fn post_transition(&self, issue_id: &str, transition_id: &str) -> Result<()> {
        let body = json!({ "transition": { "id": transition_id } });
        // Jira answers 204 No Content.
        self.post(&transitions_path(issue_id), &body).await?;
        info!(issue_id, transition_id, "Issue transitioned");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jira::client::decode;

    #[test]
    fn test_transitions_response() {
        let json = r#"{
            "expand": "transitions",
            "transitions": [
                {"id": "11", "name": "To Do", "to": {"name": "To Do", "statusCategory": {"key": "new", "name": "To Do"}}},
                {"id": "21", "name": "Start progress", "to": {"name": "In Progress", "statusCategory": {"key": "indeterminate", "name": "In Progress"}}},
                {"id": "31", "name": "Resolve", "to": {"name": "Done", "statusCategory": {"key": "done", "name": "Done"}}}
            ]
        }"#;

        let TransitionsResponse { transitions } = decode(json.as_bytes()).unwrap();
        let transitions: Vec<Transition> = transitions.into_iter().map(Transition::from).collect();

        assert_eq!(transitions.len(), 3);
        assert_eq!(
            transitions[1],
            Transition {
                id: "21".to_string(),
                name: "Start progress".to_string(),
                category: "In Progress".to_string(),
            }
        );
    }

    #[test]
    fn test_transitions_missing_list() {
        let response: TransitionsResponse = decode(b"{}").unwrap();
        assert!(response.transitions.is_empty());
    }

    #[test]
    fn test_transitions_path() {
        assert_eq!(
            transitions_path("PROJ-7"),
            "rest/api/3/issue/PROJ-7/transitions"
        );
    }
}

// SPDX-License-Identifier: Apache-2.0

//! Issue search, lookup and creation.

use bon::Builder;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use super::JiraClient;
use super::adf::{self, AdfNode};
use super::client::decode;
use crate::Result;

/// JQL for open issues assigned to the caller.
pub const ASSIGNED_ISSUES_JQL: &str = r#"assignee = currentuser() AND statuscategory != "Done""#;

/// Fields requested when listing issues.
const SEARCH_FIELDS: &str = "summary,status,project,issuetype";

/// Fields requested when fetching a single issue.
const ISSUE_FIELDS: &str = "summary,description,comment,status";

/// A Jira issue as shown by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Numeric issue id, as a string.
    pub id: String,
    /// Issue key, e.g. `PROJ-42`.
    pub key: String,
    /// Summary line.
    pub title: String,
    /// Plain-text description. Empty in search results.
    pub description: String,
    /// Status name.
    pub status: String,
    /// Status category name (To Do, In Progress, Done).
    pub status_category: String,
    /// Project id. Only set in search results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Issue type id. Only set in search results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_type_id: Option<String>,
    /// REST URL of the issue.
    pub url: String,
}

/// Input for creating an issue.
#[derive(Debug, Clone, Builder)]
pub struct NewIssue {
    /// Project id the issue belongs to.
    #[builder(into)]
    pub project_id: String,
    /// Issue type id.
    #[builder(into)]
    pub issue_type_id: String,
    /// Summary line.
    #[builder(into)]
    pub title: String,
    /// Optional description; empty means none.
    #[builder(into, default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    issues: Vec<IssueNode>,
}

#[derive(Debug, Deserialize)]
struct IssueNode {
    id: String,
    key: String,
    #[serde(rename = "self")]
    url: String,
    fields: IssueFields,
}

#[derive(Debug, Deserialize)]
struct IssueFields {
    #[serde(default)]
    summary: String,
    #[serde(default)]
    description: Option<AdfNode>,
    status: StatusField,
    #[serde(default)]
    project: Option<IdField>,
    #[serde(default)]
    issuetype: Option<IdField>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusField {
    name: String,
    status_category: NameField,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NameField {
    pub(crate) name: String,
}

#[derive(Debug, Deserialize)]
struct IdField {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Myself {
    account_id: String,
}

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    key: String,
}

impl From<IssueNode> for Issue {
    fn from(node: IssueNode) -> Self {
        let fields = node.fields;
        Self {
            id: node.id,
            key: node.key,
            title: fields.summary,
            description: fields
                .description
                .as_ref()
                .map(adf::plain_text)
                .unwrap_or_default(),
            status: fields.status.name,
            status_category: fields.status.status_category.name,
            project_id: fields.project.map(|p| p.id),
            issue_type_id: fields.issuetype.map(|t| t.id),
            url: node.url,
        }
    }
}

/// Characters escaped in path segments and query values (RFC 3986 unreserved are kept).
const ESCAPED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a path segment or query parameter value.
pub(crate) fn escape(value: &str) -> String {
    utf8_percent_encode(value, ESCAPED).to_string()
}

/// Path of the assigned-issues search.
fn search_path() -> String {
    format!(
        "rest/api/3/search/jql?jql={}&fields={}",
        escape(ASSIGNED_ISSUES_JQL),
        escape(SEARCH_FIELDS)
    )
}

/// Request body for issue creation.
fn create_body(account_id: &str, new_issue: &NewIssue) -> serde_json::Value {
    let mut fields = json!({
        "assignee": { "id": account_id },
        "project": { "id": new_issue.project_id },
        "issuetype": { "id": new_issue.issue_type_id },
        "summary": new_issue.title,
    });
    if !new_issue.description.is_empty() {
        fields["description"] = adf::document(&new_issue.description);
    }

    json!({ "fields": fields, "update": {} })
}

impl JiraClient {
    pub(crate) async fn fetch_assigned_issues(&self) -> Result<Vec<Issue>> {
        let response: SearchResponse = self.get(&search_path()).await?;
        debug!(count = response.issues.len(), "Fetched assigned issues");
        Ok(response.issues.into_iter().map(Issue::from).collect())
    }

    pub(crate) async fn fetch_issue(&self, issue_id: &str) -> Result<Issue> {
        let path = format!(
            "rest/api/3/issue/{}?fields={}",
            escape(issue_id),
            escape(ISSUE_FIELDS)
        );
        let node: IssueNode = self.get(&path).await?;
        Ok(node.into())
    }

    pub(crate) async fn post_issue(&self, new_issue: &NewIssue) -> Result<String> {
        let myself: Myself = self.get("rest/api/3/myself").await?;
        let body = create_body(&myself.account_id, new_issue);

        let bytes = self.post("rest/api/3/issue", &body).await?;
        let created: CreatedIssue = decode(&bytes)?;
        info!(key = %created.key, "Issue created");
        Ok(created.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_FIXTURE: &str = r#"{
        "issues": [
            {
                "id": "10001",
                "key": "PROJ-1",
                "self": "https://example.atlassian.net/rest/api/3/issue/10001",
                "fields": {
                    "summary": "Fix login",
                    "status": {"name": "In Review", "statusCategory": {"name": "In Progress"}},
                    "project": {"id": "10000", "key": "PROJ"},
                    "issuetype": {"id": "10002", "name": "Task"}
                }
            }
        ],
        "isLast": true
    }"#;

    const ISSUE_FIXTURE: &str = r#"{
        "id": "10001",
        "key": "PROJ-1",
        "self": "https://example.atlassian.net/rest/api/3/issue/10001",
        "fields": {
            "summary": "Fix login",
            "status": {"name": "To Do", "statusCategory": {"name": "To Do"}},
            "comment": {"comments": []},
            "description": {
                "type": "doc",
                "version": 1,
                "content": [
                    {"type": "paragraph", "content": [{"type": "text", "text": "Users cannot sign in."}]},
                    {"type": "paragraph", "content": [{"type": "text", "text": "Happens on Safari."}]}
                ]
            }
        }
    }"#;

    #[test]
    fn test_search_response_maps_issues() {
        let response: SearchResponse = decode(SEARCH_FIXTURE.as_bytes()).unwrap();
        let issues: Vec<Issue> = response.issues.into_iter().map(Issue::from).collect();

        assert_eq!(issues.len(), 1);
        let issue = &issues[0];
        assert_eq!(issue.key, "PROJ-1");
        assert_eq!(issue.title, "Fix login");
        assert_eq!(issue.status, "In Review");
        assert_eq!(issue.status_category, "In Progress");
        assert_eq!(issue.project_id.as_deref(), Some("10000"));
        assert_eq!(issue.issue_type_id.as_deref(), Some("10002"));
        assert!(issue.description.is_empty());
    }

    #[test]
    fn test_issue_response_has_plain_description() {
        let node: IssueNode = decode(ISSUE_FIXTURE.as_bytes()).unwrap();
        let issue = Issue::from(node);

        assert_eq!(
            issue.description,
            "Users cannot sign in.\nHappens on Safari."
        );
        assert_eq!(issue.project_id, None);
    }

    #[test]
    fn test_issue_without_description() {
        let json = r#"{"id":"1","key":"A-1","self":"u","fields":{"summary":"s","description":null,
            "status":{"name":"Done","statusCategory":{"name":"Done"}}}}"#;
        let issue = Issue::from(decode::<IssueNode>(json.as_bytes()).unwrap());
        assert_eq!(issue.description, "");
    }

    #[test]
    fn test_empty_search_response() {
        let response: SearchResponse = decode(b"{}").unwrap();
        assert!(response.issues.is_empty());
    }

    #[test]
    fn test_search_path_is_escaped() {
        let path = search_path();
        assert!(path.starts_with("rest/api/3/search/jql?jql=assignee%20%3D%20currentuser%28%29"));
        assert!(path.contains("%22Done%22"));
        assert!(path.ends_with("&fields=summary%2Cstatus%2Cproject%2Cissuetype"));
    }

    #[test]
    fn test_escape_keeps_issue_keys() {
        assert_eq!(escape("PROJ-42"), "PROJ-42");
        assert_eq!(escape("../admin"), "..%2Fadmin");
    }

    #[test]
    fn test_create_body_with_description() {
        let new_issue = NewIssue::builder()
            .project_id("10000")
            .issue_type_id("10002")
            .title("New \"feature\"")
            .description("Details")
            .build();

        let body = create_body("acc-1", &new_issue);

        assert_eq!(body["fields"]["assignee"]["id"], "acc-1");
        assert_eq!(body["fields"]["project"]["id"], "10000");
        assert_eq!(body["fields"]["issuetype"]["id"], "10002");
        assert_eq!(body["fields"]["summary"], "New \"feature\"");
        assert_eq!(
            body["fields"]["description"]["content"][0]["content"][0]["text"],
            "Details"
        );
        assert!(body["update"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_create_body_without_description() {
        let new_issue = NewIssue::builder()
            .project_id("10000")
            .issue_type_id("10002")
            .title("Title only")
            .build();

        let body = create_body("acc-1", &new_issue);

        assert!(body["fields"].get("description").is_none());
    }

    #[test]
    fn test_issue_serializes_without_missing_ids() {
        let node: IssueNode = decode(ISSUE_FIXTURE.as_bytes()).unwrap();
        let json = serde_json::to_value(Issue::from(node)).unwrap();
        assert!(json.get("project_id").is_none());
        assert_eq!(json["status_category"], "To Do");
    }
}

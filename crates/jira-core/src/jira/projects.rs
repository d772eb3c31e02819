// SPDX-License-Identifier: Apache-2.0

//! Project lookup.

use serde::{Deserialize, Serialize};

use super::JiraClient;
use crate::Result;

/// A Jira project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Numeric project id, as a string.
    pub id: String,
    /// Project key, e.g. `PROJ`.
    pub key: String,
    /// Display name.
    pub name: String,
    /// REST URL of the project.
    #[serde(rename = "self")]
    pub url: String,
}

impl JiraClient {
    pub(crate) async fn fetch_project(&self, project_id: i64) -> Result<Project> {
        self.get(&format!("rest/api/3/project/{project_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jira::client::decode;

    #[test]
    fn test_project_response() {
        let json = r#"{
            "id": "10000",
            "key": "PROJ",
            "name": "Platform",
            "self": "https://example.atlassian.net/rest/api/3/project/10000",
            "projectTypeKey": "software"
        }"#;

        let project: Project = decode(json.as_bytes()).unwrap();

        assert_eq!(project.key, "PROJ");
        assert_eq!(project.name, "Platform");
        assert_eq!(
            project.url,
            "https://example.atlassian.net/rest/api/3/project/10000"
        );
    }
}

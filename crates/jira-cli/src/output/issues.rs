// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use console::style;
use jira_core::TablePrinter;

use crate::cli::OutputContext;
use crate::commands::types::{IssueResult, IssuesResult};

use super::Renderable;

impl Renderable for IssuesResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        if self.issues.is_empty() {
            writeln!(w, "{}", style("No open issues assigned to you.").dim())?;
            return Ok(());
        }

        let mut table = TablePrinter::new();
        table.add_row(&["ID", "Issue", "Status", "Status Category"]);
        for issue in &self.issues {
            table.add_row(&[
                issue.id.clone(),
                format!("[{}] {}", issue.key, issue.title),
                issue.status.clone(),
                issue.status_category.clone(),
            ]);
        }
        write!(w, "{}", table.render())
    }
}

impl Renderable for IssueResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        let issue = &self.issue;
        let heading = format!("[{}] {}", issue.key, issue.title);
        writeln!(w, "{}", style(heading).bold())?;
        writeln!(w)?;
        writeln!(w, "Status: {} ({})", issue.status, issue.status_category)?;
        writeln!(w)?;
        writeln!(w, "Description:")?;
        if issue.description.is_empty() {
            writeln!(w, "{}", style("(none)").dim())?;
        } else {
            writeln!(w, "{}", issue.description)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jira_core::Issue;

    use super::*;
    use crate::cli::OutputFormat;
    use crate::output::test_support::rendered;

    fn issue(id: &str, key: &str, title: &str) -> Issue {
        Issue {
            id: id.to_string(),
            key: key.to_string(),
            title: title.to_string(),
            description: String::new(),
            status: "In Progress".to_string(),
            status_category: "In Progress".to_string(),
            project_id: Some("10000".to_string()),
            issue_type_id: Some("10002".to_string()),
            url: format!("https://example.atlassian.net/rest/api/3/issue/{id}"),
        }
    }

    #[test]
    fn test_issues_table() {
        let result = IssuesResult {
            issues: vec![
                issue("10001", "PROJ-1", "Fix login"),
                issue("10002", "PROJ-22", "Docs"),
            ],
        };

        let text = rendered(&result, OutputFormat::Text);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "ID     Issue               Status       Status Category"
        );
        assert_eq!(
            lines[1],
            "10001  [PROJ-1] Fix login  In Progress  In Progress"
        );
        assert_eq!(
            lines[2],
            "10002  [PROJ-22] Docs      In Progress  In Progress"
        );
    }

    #[test]
    fn test_issues_json_is_array() {
        let result = IssuesResult {
            issues: vec![issue("10001", "PROJ-1", "Fix login")],
        };

        let json: serde_json::Value =
            serde_json::from_str(&rendered(&result, OutputFormat::Json)).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["key"], "PROJ-1");
    }

    #[test]
    fn test_single_issue_text() {
        let mut one = issue("10001", "PROJ-1", "Fix login");
        one.description = "Users cannot sign in.".to_string();

        let text = rendered(&IssueResult { issue: one }, OutputFormat::Text);

        assert!(text.contains("[PROJ-1] Fix login"));
        assert!(text.contains("Description:\nUsers cannot sign in.\n"));
    }

    #[test]
    fn test_issue_yaml() {
        let yaml = rendered(
            &IssueResult {
                issue: issue("10001", "PROJ-1", "Fix login"),
            },
            OutputFormat::Yaml,
        );
        assert!(yaml.contains("key: PROJ-1"));
    }
}

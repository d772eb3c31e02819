// SPDX-License-Identifier: Apache-2.0

//! `jira issue transition` command.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use jira_core::{IssueTracker, Prompter, SelectableList, Selection, Transition, select};
use tracing::{debug, instrument};

use super::types::TransitionResult;

/// Lets the user pick one of the issue's transitions and applies it.
///
/// Returns `None` when the user quits.
#[instrument(skip(tracker, prompter))]
pub async fn run<R: BufRead, W: Write>(
    tracker: &dyn IssueTracker,
    prompter: &mut Prompter<R, W>,
    issue_id: &str,
) -> Result<Option<TransitionResult>> {
    let transitions = tracker
        .transitions(issue_id)
        .await
        .context("Failed to get valid transitions for issue")?;

    let list = SelectableList::new(&transitions)
        .context("Issue has no available transitions")?
        .column("Name", |t: &Transition| t.name.clone())
        .column("Category", |t: &Transition| t.category.clone());

    prompter.println("Available transitions:")?;
    let index = match select(prompter, &list)? {
        Selection::Quit => {
            debug!("Transition aborted");
            return Ok(None);
        }
        Selection::Index(index) => index,
    };

    let transition = transitions[index].clone();
    tracker
        .transition_issue(issue_id, &transition.id)
        .await
        .with_context(|| format!("Failed to transition issue {issue_id}"))?;

    Ok(Some(TransitionResult {
        issue_id: issue_id.to_string(),
        transition,
    }))
}

// SPDX-License-Identifier: Apache-2.0

//! `jira configure` commands.
//!
//! Every flow updates the in-memory [`ConfigStore`] and writes it back once
//! at the end, so a failed prompt leaves the file untouched.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use jira_core::config::keys;
use jira_core::{
    ConfigStore, ConfigValue, IssueTracker, JiraError, Project, Prompter, SelectableList,
    Selection, ensure_parent_dir, select, upsert, upsert_int,
};
use tracing::{info, instrument};

/// Entries of the `jira configure` menu.
const MENU: [&str; 3] = ["Credentials", "Default issue type", "Default project"];

/// A configurable list of ids and the key of its default entry.
#[derive(Debug, Clone, Copy)]
pub struct IdList {
    list_key: &'static str,
    default_key: &'static str,
    label: &'static str,
}

/// Project ids offered by `jira configure`.
pub const PROJECTS: IdList = IdList {
    list_key: keys::PROJECT_IDS,
    default_key: keys::DEFAULT_PROJECT_ID,
    label: "project",
};

/// Issue type ids offered by `jira configure`.
pub const ISSUE_TYPES: IdList = IdList {
    list_key: keys::ISSUE_TYPE_IDS,
    default_key: keys::DEFAULT_ISSUE_TYPE_ID,
    label: "issue type",
};

fn save(store: &ConfigStore) -> Result<()> {
    ensure_parent_dir(store.path())?;
    store.write_back()?;
    info!(path = %store.path().display(), "Configuration saved");
    Ok(())
}

/// Parses a comma-separated list of ids.
fn parse_ids(input: &str, label: &str) -> Result<Vec<i64>, JiraError> {
    input
        .split(',')
        .map(str::trim)
        .map(|id| {
            id.parse()
                .map_err(|_| JiraError::validation(format!("invalid {label} ID: '{id}'")))
        })
        .collect()
}

fn configured_ids(store: &ConfigStore, list: IdList) -> Result<Vec<i64>, JiraError> {
    let ids = store
        .get(list.list_key)
        .map(|v| v.as_list().to_vec())
        .unwrap_or_default();
    if ids.is_empty() {
        return Err(JiraError::NotConfigured {
            key: list.list_key.to_string(),
        });
    }
    Ok(ids)
}

/// Shows the configuration menu and runs the chosen flow.
///
/// `connect` is only called when the chosen flow needs Jira.
pub async fn menu<R, W, F>(
    store: &mut ConfigStore,
    prompter: &mut Prompter<R, W>,
    connect: F,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnOnce() -> Result<Box<dyn IssueTracker>>,
{
    let list = SelectableList::new(&MENU)?.column("Option", |o: &&str| (*o).to_string());

    prompter.println("Configuration options:")?;
    let Selection::Index(index) = select(prompter, &list)? else {
        return Ok(());
    };

    match MENU[index] {
        "Credentials" => credentials(store, prompter),
        "Default issue type" => default_issue_type(store, prompter),
        _ => {
            let tracker = connect()?;
            default_project(store, prompter, tracker.as_ref()).await
        }
    }
}

/// Asks for the Jira domain, email and API token.
#[instrument(skip_all)]
pub fn credentials<R: BufRead, W: Write>(
    store: &mut ConfigStore,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    upsert(
        store,
        prompter,
        keys::DOMAIN,
        "Enter the Jira domain",
        Some("example.atlassian.net"),
        false,
    )
    .context("Failed to configure Jira domain")?;
    upsert(
        store,
        prompter,
        keys::EMAIL,
        "Enter the email address used for Jira",
        Some("example@example.com"),
        false,
    )
    .context("Failed to configure Jira email")?;
    upsert(
        store,
        prompter,
        keys::TOKEN,
        "Enter the Jira API token",
        None,
        true,
    )
    .context("Failed to configure Jira API token")?;

    save(store)
}

/// Replaces the list of available ids, then asks for the default one.
#[instrument(skip(store, prompter))]
pub fn id_list<R: BufRead, W: Write>(
    store: &mut ConfigStore,
    prompter: &mut Prompter<R, W>,
    list: IdList,
) -> Result<()> {
    let current = store
        .get(list.list_key)
        .map(|v| v.as_list().to_vec())
        .unwrap_or_default();

    prompter.println(&format!("Current {} IDs:", list.label))?;
    prompter.println(&ConfigValue::List(current.clone()).to_string())?;

    let input = prompter.ask(&format!(
        "Enter the new list of {} IDs (separate by commas)",
        list.label
    ))?;
    let ids = parse_ids(&input, list.label)?;

    let overwrite = current.is_empty()
        || prompter.confirm(&format!("Overwrite existing {} IDs?", list.label))?;
    let ids = if overwrite {
        store.set(list.list_key, ids.clone());
        ids
    } else {
        current
    };

    if let Some(&first) = ids.first() {
        upsert_int(
            store,
            prompter,
            list.default_key,
            &format!("Enter the default {} ID", list.label),
            Some(first),
        )?;
    }

    save(store)
}

/// Picks the default issue type among the configured ids.
#[instrument(skip_all)]
pub fn default_issue_type<R: BufRead, W: Write>(
    store: &mut ConfigStore,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let ids = configured_ids(store, ISSUE_TYPES)?;
    let list = SelectableList::new(&ids)?.column("Issue Type ID", |id: &i64| id.to_string());

    prompter.println("Configured issue types:")?;
    let Selection::Index(index) = select(prompter, &list)? else {
        return Ok(());
    };

    store.set(keys::DEFAULT_ISSUE_TYPE_ID, ids[index]);
    save(store)?;
    prompter.println(&format!("Default issue type set to {}.", ids[index]))?;
    Ok(())
}

/// Picks the default project among the configured ids, showing key and name.
#[instrument(skip_all)]
pub async fn default_project<R: BufRead, W: Write>(
    store: &mut ConfigStore,
    prompter: &mut Prompter<R, W>,
    tracker: &dyn IssueTracker,
) -> Result<()> {
    let ids = configured_ids(store, PROJECTS)?;

    let mut projects = Vec::with_capacity(ids.len());
    for &id in &ids {
        let project = tracker
            .project(id)
            .await
            .with_context(|| format!("Failed to get project {id}"))?;
        projects.push(project);
    }

    let list = SelectableList::new(&projects)?
        .column("ID", |p: &Project| p.id.clone())
        .column("Key", |p: &Project| p.key.clone())
        .column("Name", |p: &Project| p.name.clone());

    prompter.println("Configured projects:")?;
    let Selection::Index(index) = select(prompter, &list)? else {
        return Ok(());
    };

    store.set(keys::DEFAULT_PROJECT_ID, ids[index]);
    save(store)?;
    prompter.println(&format!(
        "Default project set to {} ({}).",
        projects[index].key, projects[index].name
    ))?;
    Ok(())
}

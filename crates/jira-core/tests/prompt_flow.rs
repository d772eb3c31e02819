// SPDX-License-Identifier: Apache-2.0

//! End-to-end flows over the prompt engine, selection lists and config store.

use std::io::Cursor;

use jira_core::{
    ConfigStore, ConfigValue, JiraError, Prompter, SelectableList, Selection, keys, select,
    upsert, upsert_int,
};

type TestPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

fn prompter(input: &str) -> TestPrompter {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(prompter: TestPrompter) -> String {
    String::from_utf8(prompter.into_inner().1).unwrap()
}

struct Choice {
    name: &'static str,
    category: &'static str,
}

static OPTIONS: [Choice; 3] = [
    Choice {
        name: "To Do",
        category: "To Do",
    },
    Choice {
        name: "In Progress",
        category: "In Progress",
    },
    Choice {
        name: "Done",
        category: "Done",
    },
];

/// Runs the token upsert over `input` and returns what was displayed.
fn upsert_token(store: &mut ConfigStore, input: &str) -> Result<String, JiraError> {
    let mut p = prompter(input);
    upsert(
        store,
        &mut p,
        keys::TOKEN,
        "Enter the Jira API token",
        None,
        true,
    )?;
    Ok(output(p))
}

fn options() -> SelectableList<'static, Choice> {
    SelectableList::new(&OPTIONS)
        .unwrap()
        .column("Name", |o| o.name.to_string())
        .column("Category", |o| o.category.to_string())
}

#[test]
fn token_is_masked_on_the_next_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut store = ConfigStore::load(&path).unwrap();
    let shown = upsert_token(&mut store, "abc123\n").unwrap();
    store.write_back().unwrap();
    assert_eq!(shown, "Enter the Jira API token: ");

    let mut store = ConfigStore::load(&path).unwrap();
    let shown = upsert_token(&mut store, "\n").unwrap();
    assert_eq!(shown, "Enter the Jira API token [a****3]: ");
    assert!(!shown.contains("abc123"));
    assert_eq!(store.get(keys::TOKEN), Some(&ConfigValue::from("abc123")));

    store.write_back().unwrap();
    let reloaded = ConfigStore::load(&path).unwrap();
    assert_eq!(
        reloaded.get(keys::TOKEN),
        Some(&ConfigValue::from("abc123"))
    );
}

#[test]
fn selection_maps_answers_to_indices() {
    let list = options();

    let mut p = prompter("2\n");
    assert_eq!(select(&mut p, &list).unwrap(), Selection::Index(1));
    assert_eq!(list.get(1).map(|o| o.name), Some("In Progress"));

    let mut p = prompter("q\n");
    assert_eq!(select(&mut p, &list).unwrap(), Selection::Quit);

    let mut p = prompter("9\n");
    let err = select(&mut p, &list).unwrap_err();
    assert!(matches!(err, JiraError::Validation(_)));
    assert!(err.to_string().contains("between 1 and 3"));
}

#[test]
fn failed_upsert_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut store = ConfigStore::load(&path).unwrap();
    let result = upsert_token(&mut store, "\n");

    assert!(matches!(result, Err(JiraError::Validation(_))));
    assert!(!store.has(keys::TOKEN));
    assert!(!path.exists());
}

#[test]
fn credentials_flow_round_trips_through_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut store = ConfigStore::load(&path).unwrap();
    let mut p = prompter("acme.atlassian.net\n\n");
    upsert(
        &mut store,
        &mut p,
        keys::DOMAIN,
        "Enter the Jira domain",
        Some("example.atlassian.net"),
        false,
    )
    .unwrap();
    upsert(
        &mut store,
        &mut p,
        keys::EMAIL,
        "Enter the email",
        Some("example@example.com"),
        false,
    )
    .unwrap();
    upsert_token(&mut store, "secret-token\n").unwrap();
    store.write_back().unwrap();

    let reloaded = ConfigStore::load(&path).unwrap();
    assert_eq!(
        reloaded.get(keys::DOMAIN),
        Some(&ConfigValue::from("acme.atlassian.net"))
    );
    assert_eq!(
        reloaded.get(keys::EMAIL),
        Some(&ConfigValue::from("example@example.com"))
    );
    assert_eq!(
        reloaded.get(keys::TOKEN),
        Some(&ConfigValue::from("secret-token"))
    );

    let settings = jira_core::load_settings(&path).unwrap();
    let credentials = settings.credentials().unwrap();
    assert_eq!(credentials.domain, "acme.atlassian.net");
}

#[test]
fn id_lists_and_defaults_survive_write_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut store = ConfigStore::load(&path).unwrap();
    store.set(keys::PROJECT_IDS, vec![10000_i64, 10001]);
    let mut p = prompter("\n");
    upsert_int(
        &mut store,
        &mut p,
        keys::DEFAULT_PROJECT_ID,
        "Enter the default project ID",
        Some(10000),
    )
    .unwrap();
    store.write_back().unwrap();

    let reloaded = ConfigStore::load(&path).unwrap();
    let ids = reloaded.get(keys::PROJECT_IDS).map(ConfigValue::as_list);
    assert_eq!(ids, Some(&[10000, 10001][..]));
    let default = reloaded.get(keys::DEFAULT_PROJECT_ID);
    assert_eq!(default.and_then(ConfigValue::as_int), Some(10000));
}

// SPDX-License-Identifier: Apache-2.0

//! Interactive update-or-insert of a single configuration key.
//!
//! The stored value, when present, becomes the prompt default. Neither
//! function persists anything: callers upsert a batch of related keys and
//! then call [`ConfigStore::write_back`] once.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::JiraError;
use crate::prompt::{PromptOutcome, PromptSpec, Prompter};
use crate::store::{ConfigStore, ConfigValue};

/// Asks for a string value for `key` and stores it in memory.
///
/// An empty literal `default` counts as no default, while a stored value is
/// the default even when it is empty. With `sensitive`, the default is
/// displayed masked.
///
/// # Errors
///
/// Returns `JiraError::Validation` if the answer is empty and there is no
/// default, and `JiraError::Input` if reading fails.
pub fn upsert<R: BufRead, W: Write>(
    store: &mut ConfigStore,
    prompter: &mut Prompter<R, W>,
    key: &str,
    prompt: &str,
    default: Option<&str>,
    sensitive: bool,
) -> Result<(), JiraError> {
    let value = ask(
        store,
        prompter,
        key,
        prompt,
        default.map(str::to_string),
        sensitive,
    )?;
    store.set(key, value);
    debug!(key, "Config value updated");
    Ok(())
}

/// Asks for an integer value for `key` and stores it in memory.
///
/// # Errors
///
/// Returns `JiraError::Validation` if the answer is not a number, or empty
/// without a default.
pub fn upsert_int<R: BufRead, W: Write>(
    store: &mut ConfigStore,
    prompter: &mut Prompter<R, W>,
    key: &str,
    prompt: &str,
    default: Option<i64>,
) -> Result<(), JiraError> {
    let value = ask(
        store,
        prompter,
        key,
        prompt,
        default.map(|d| d.to_string()),
        false,
    )?;
    let value: i64 = value
        .parse()
        .map_err(|_| JiraError::validation(format!("'{value}' is not a number")))?;
    store.set(key, value);
    debug!(key, value, "Config value updated");
    Ok(())
}

fn ask<R: BufRead, W: Write>(
    store: &ConfigStore,
    prompter: &mut Prompter<R, W>,
    key: &str,
    prompt: &str,
    default: Option<String>,
    sensitive: bool,
) -> Result<String, JiraError> {
    let default = store
        .get(key)
        .map(ConfigValue::to_string)
        .or_else(|| default.filter(|d| !d.is_empty()));
    let has_default = default.is_some();

    let spec = PromptSpec::builder()
        .text(prompt)
        .maybe_default(default)
        .sensitive(sensitive)
        .build();

    match prompter.prompt(&spec)? {
        PromptOutcome::Answer(answer) if has_default || !answer.is_empty() => Ok(answer),
        _ => Err(JiraError::validation(format!("value required for '{key}'"))),
    }
}

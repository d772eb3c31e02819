// SPDX-License-Identifier: Apache-2.0

//! Numbered option lists.
//!
//! A [`SelectableList`] pairs a non-empty slice of records with the columns to
//! show for them. [`select`] prints the list as a table, asks for a 1-based
//! option number and returns the 0-based index, or [`Selection::Quit`] when the
//! user enters `q`.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::JiraError;
use crate::prompt::{PromptOutcome, PromptSpec, Prompter};
use crate::table::TablePrinter;

/// A labelled column projecting one record to its displayed value.
pub struct Column<T> {
    label: String,
    value: fn(&T) -> String,
}

/// Records offered to the user, with the columns to display.
pub struct SelectableList<'a, T> {
    items: &'a [T],
    columns: Vec<Column<T>>,
}

/// Outcome of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 0-based index into the list.
    Index(usize),
    /// The user entered the quit sentinel.
    Quit,
}

impl<'a, T> SelectableList<'a, T> {
    /// Creates a list over `items`.
    ///
    /// # Errors
    ///
    /// Returns `JiraError::Validation` if `items` is empty.
    pub fn new(items: &'a [T]) -> Result<Self, JiraError> {
        if items.is_empty() {
            return Err(JiraError::validation("there are no options to select from"));
        }
        Ok(Self {
            items,
            columns: Vec::new(),
        })
    }

    /// Adds a column rendered with `value`.
    #[must_use]
    pub fn column(mut self, label: impl Into<String>, value: fn(&T) -> String) -> Self {
        self.columns.push(Column {
            label: label.into(),
            value,
        });
        self
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: lists are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The record at a 0-based index returned by [`select`].
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.items.get(index)
    }

    /// Renders the header and one numbered row per record.
    #[must_use]
    pub fn render(&self) -> String {
        let mut table = TablePrinter::new();

        let mut header = vec!["#".to_string()];
        header.extend(self.columns.iter().map(|c| c.label.clone()));
        table.add_row(&header);

        for (i, item) in self.items.iter().enumerate() {
            let mut row = vec![(i + 1).to_string()];
            row.extend(self.columns.iter().map(|c| (c.value)(item)));
            table.add_row(&row);
        }

        table.render()
    }
}

/// Parses a 1-based option number against a list of `len` options.
///
/// # Errors
///
/// Returns `JiraError::Validation` if `input` is not a number or out of range.
pub fn parse_choice(input: &str, len: usize) -> Result<usize, JiraError> {
    let choice: i64 = input
        .parse()
        .map_err(|_| JiraError::validation(format!("'{input}' is not a number")))?;

    match usize::try_from(choice) {
        Ok(n) if (1..=len).contains(&n) => Ok(n - 1),
        _ => Err(JiraError::validation(format!(
            "you must choose a number between 1 and {len} (inclusive)"
        ))),
    }
}

/// Shows `list` and asks the user to pick one option.
///
/// # Errors
///
/// Returns `JiraError::Validation` for a non-numeric or out-of-range answer,
/// and `JiraError::Input` if the input stream fails.
pub fn select<T, R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    list: &SelectableList<'_, T>,
) -> Result<Selection, JiraError> {
    let table = list.render();
    let output = prompter.output();
    output
        .write_all(table.as_bytes())
        .and_then(|()| writeln!(output))
        .map_err(JiraError::Input)?;

    let spec = PromptSpec::builder()
        .text(format!(
            "Select an option [1 - {}, or '{}' to quit]",
            list.len(),
            crate::prompt::QUIT_SENTINEL
        ))
        .quit_enabled(true)
        .build();

    match prompter.prompt(&spec)? {
        PromptOutcome::Quit => Ok(Selection::Quit),
        PromptOutcome::Answer(answer) => {
            let index = parse_choice(&answer, list.len())?;
            debug!(index, "Option selected");
            Ok(Selection::Index(index))
        }
    }
}

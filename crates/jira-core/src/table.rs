// SPDX-License-Identifier: Apache-2.0

//! Lightweight table printer for consistent formatting.

use std::fmt::Write;

/// Space between two columns.
const GUTTER: &str = "  ";

/// Renders rows with every column padded to its widest cell.
#[derive(Debug, Default)]
pub struct TablePrinter {
    /// Column widths in characters.
    column_widths: Vec<usize>,
    /// Rows of data.
    rows: Vec<Vec<String>>,
}

impl TablePrinter {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table, updating column widths as needed.
    pub fn add_row<S: AsRef<str>>(&mut self, cells: &[S]) {
        let cells: Vec<String> = cells.iter().map(|c| c.as_ref().to_string()).collect();
        if self.column_widths.len() < cells.len() {
            self.column_widths.resize(cells.len(), 0);
        }
        for (width, cell) in self.column_widths.iter_mut().zip(&cells) {
            *width = (*width).max(cell.chars().count());
        }
        self.rows.push(cells);
    }

    /// Render the table. Lines carry no trailing whitespace.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();

        for row in &self.rows {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    line.push_str(GUTTER);
                }
                let width = self.column_widths[i];
                let _ = write!(line, "{cell:<width$}");
            }
            output.push_str(line.trim_end());
            output.push('\n');
        }

        output
    }
}

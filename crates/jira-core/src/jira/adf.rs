// SPDX-License-Identifier: Apache-2.0

//! Atlassian Document Format (ADF) helpers.

use serde::Deserialize;
use serde_json::{Value, json};

/// A node of an ADF document. Only the parts needed for plain text are kept.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AdfNode {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    content: Vec<AdfNode>,
}

/// Plain text of a document: one line per top-level paragraph.
pub(crate) fn plain_text(doc: &AdfNode) -> String {
    doc.content
        .iter()
        .filter(|node| node.kind == "paragraph")
        .map(|paragraph| {
            paragraph
                .content
                .iter()
                .filter(|node| node.kind == "text")
                .filter_map(|node| node.text.as_deref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds a document with one paragraph per line of `text`.
pub(crate) fn document(text: &str) -> Value {
    let paragraphs: Vec<Value> = text
        .lines()
        .map(|line| {
            if line.is_empty() {
                json!({ "type": "paragraph", "content": [] })
            } else {
                json!({
                    "type": "paragraph",
                    "content": [{ "type": "text", "text": line }]
                })
            }
        })
        .collect();

    json!({ "type": "doc", "version": 1, "content": paragraphs })
}

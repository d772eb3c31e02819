// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::TransitionResult;

use super::Renderable;

impl Renderable for TransitionResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(
            w,
            "Issue {} transitioned to '{}'.",
            self.issue_id, self.transition.name
        )
    }
}

// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use console::style;

use crate::cli::OutputContext;
use crate::commands::types::CreateResult;

use super::Renderable;

impl Renderable for CreateResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w, "Issue '{}' created.", self.title)?;
        writeln!(w, "URL: {}", style(&self.url).cyan().underlined())
    }
}

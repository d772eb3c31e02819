// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::VersionResult;

use super::Renderable;

impl Renderable for VersionResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w, "{} version {}", self.name, self.version)
    }
}

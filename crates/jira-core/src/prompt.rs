// SPDX-License-Identifier: Apache-2.0

//! Line-oriented terminal prompts.
//!
//! [`Prompter`] wraps any `BufRead` input and `Write` output, so the CLI
//! drives it with stdin/stdout and tests drive it with in-memory buffers.
//!
//! A prompt with `quit_enabled` recognizes the literal input `q` as a request
//! to abort the current flow. The sentinel is plain text on purpose: it is
//! what the user types.

use std::io::{BufRead, Write};

use bon::Builder;
use tracing::debug;

use crate::error::JiraError;

/// Input that aborts a quit-enabled prompt.
pub const QUIT_SENTINEL: &str = "q";

/// Number of characters revealed at each end of a masked secret, at most.
const MASK_MAX_SHOWN: usize = 4;

/// Number of `*` characters in a masked secret, at most.
const MASK_MAX_STARS: usize = 20;

/// One input request.
#[derive(Debug, Clone, Builder)]
pub struct PromptSpec {
    /// Text displayed before the default and the colon.
    #[builder(into)]
    pub text: String,
    /// Value returned when the user enters nothing.
    #[builder(into)]
    pub default: Option<String>,
    /// Mask the default when displaying it.
    #[builder(default)]
    pub sensitive: bool,
    /// Treat the input `q` as [`PromptOutcome::Quit`].
    #[builder(default)]
    pub quit_enabled: bool,
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The trimmed input, or the default when the input was empty.
    Answer(String),
    /// The user entered the quit sentinel.
    Quit,
}

/// Masks a secret for display, keeping a few characters at each end.
///
/// With `n` characters, `min(n / 4, 4)` characters are kept on each side and
/// at most 20 stars fill the middle. Strings shorter than four characters are
/// fully masked and the empty string stays empty.
///
/// ```
/// use jira_core::prompt::mask_secret;
///
/// assert_eq!(mask_secret("abcdefgh"), "ab****gh");
/// assert_eq!(mask_secret("abc"), "***");
/// ```
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let n = chars.len();
    let shown = (n / 4).min(MASK_MAX_SHOWN);
    let stars = n.saturating_sub(shown * 2).min(MASK_MAX_STARS);

    let mut masked = String::with_capacity(shown * 2 + stars);
    masked.extend(&chars[..shown]);
    masked.extend(std::iter::repeat_n('*', stars));
    masked.extend(&chars[n - shown..]);
    masked
}

/// Reads answers from `input` and writes prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Output stream, for rendering tables before a prompt.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter and returns its streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Displays `spec` and reads one answer.
    ///
    /// # Errors
    ///
    /// Returns `JiraError::Input` if the input is closed before a line is
    /// read or the streams fail.
    pub fn prompt(&mut self, spec: &PromptSpec) -> Result<PromptOutcome, JiraError> {
        match &spec.default {
            Some(default) if spec.sensitive => {
                self.write_prompt(&format!("{} [{}]: ", spec.text, mask_secret(default)))?;
            }
            Some(default) => self.write_prompt(&format!("{} [{default}]: ", spec.text))?,
            None => self.write_prompt(&format!("{}: ", spec.text))?,
        }

        let input = self.read_line()?;

        if spec.quit_enabled && input == QUIT_SENTINEL {
            debug!("User entered quit sentinel");
            return Ok(PromptOutcome::Quit);
        }

        if input.is_empty()
            && let Some(default) = &spec.default
        {
            return Ok(PromptOutcome::Answer(default.clone()));
        }

        Ok(PromptOutcome::Answer(input))
    }

    /// Prompts without default or quit handling and returns the trimmed input.
    pub fn ask(&mut self, text: &str) -> Result<String, JiraError> {
        self.write_prompt(&format!("{text}: "))?;
        self.read_line()
    }

    /// Asks a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns `JiraError::Validation` unless the answer is exactly `y` or `n`.
    pub fn confirm(&mut self, text: &str) -> Result<bool, JiraError> {
        self.write_prompt(&format!("{text} [y/n]: "))?;

        match self.read_line()?.as_str() {
            "y" => Ok(true),
            "n" => Ok(false),
            _ => Err(JiraError::validation("input must be 'y' or 'n'")),
        }
    }

    /// Writes a line of text followed by a newline.
    pub fn println(&mut self, text: &str) -> Result<(), JiraError> {
        writeln!(self.output, "{text}").map_err(JiraError::Input)
    }

    fn write_prompt(&mut self, text: &str) -> Result<(), JiraError> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(JiraError::Input)
    }

    /// Reads one line, without its terminator, trimmed.
    fn read_line(&mut self) -> Result<String, JiraError> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(JiraError::Input)?;
        if read == 0 {
            return Err(JiraError::Input(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input stream closed",
            )));
        }
        Ok(line.trim().to_string())
    }
}

// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the jira CLI.
//!
//! Uses `tracing` with `tracing-subscriber`, writing to stderr so that
//! command output on stdout stays machine-readable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only
//! jira issue get --all
//!
//! # Debug output for troubleshooting
//! jira --verbose issue get --all
//!
//! # Full control, including HTTP internals
//! RUST_LOG=jira_core=trace,reqwest=debug jira issue get --all
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directives.
const DEFAULT_FILTER: &str = "jira_core=warn,jira_cli=warn,reqwest=error";

/// Filter directives with `--verbose`.
const VERBOSE_FILTER: &str = "jira_core=debug,jira_cli=debug,reqwest=error";

/// Returns the filter directives used when `RUST_LOG` is not set.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` takes precedence over the `verbose` flag.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(verbose)))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_filter(verbose)).is_ok());
        }
    }

    #[test]
    fn test_verbose_raises_crate_levels() {
        assert!(default_filter(true).contains("jira_cli=debug"));
        assert!(default_filter(false).contains("jira_cli=warn"));
    }
}

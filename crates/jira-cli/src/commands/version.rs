// SPDX-License-Identifier: Apache-2.0

//! `jira version` command and the update notice.

use std::time::Duration;

use console::style;
use jira_core::{Settings, UpdateChecker, data_dir};
use tracing::debug;

use super::types::VersionResult;

/// Name of the binary.
const BIN_NAME: &str = "jira";

/// Timeout for the release lookup; kept short so commands are not held up.
const UPDATE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Version of the running binary.
pub fn run() -> VersionResult {
    VersionResult {
        name: BIN_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Text of the notice shown when `latest` is available.
fn update_notice(latest: &str) -> String {
    format!(
        "Version '{latest}' is available. To update to the latest version, run:\n  \
         cargo install --locked --git https://github.com/eeternalsadness/jira jira-cli"
    )
}

/// Prints a notice on stderr when a newer release exists.
///
/// Failures are logged at debug level and otherwise ignored.
pub async fn notify_if_outdated(settings: &Settings) {
    if !settings.check_for_updates {
        debug!("Update check disabled");
        return;
    }

    let checker = UpdateChecker::new(&data_dir(), env!("CARGO_PKG_VERSION"));
    match checker.newer_release(UPDATE_CHECK_TIMEOUT).await {
        Ok(Some(latest)) => eprintln!("\n{}", style(update_notice(&latest)).yellow()),
        Ok(None) => {}
        Err(e) => debug!(error = %e, "Update check failed"),
    }
}

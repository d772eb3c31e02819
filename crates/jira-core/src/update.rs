// SPDX-License-Identifier: Apache-2.0

//! Throttled check for newer releases of the CLI.
//!
//! The time of the last check is kept in `last_version_check` inside the data
//! directory; GitHub is queried at most once every ten minutes.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::debug;

use crate::Result;
use crate::error::JiraError;

/// Latest-release endpoint of the project repository.
pub const RELEASES_URL: &str = "https://api.github.com/repos/eeternalsadness/jira/releases/latest";

/// Minimum number of minutes between two checks.
const CHECK_INTERVAL_MINUTES: i64 = 10;

/// Name of the timestamp file inside the data directory.
const STAMP_FILE: &str = "last_version_check";

#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Checks GitHub for a newer release.
#[derive(Debug, Clone)]
pub struct UpdateChecker {
    stamp_path: PathBuf,
    releases_url: String,
    current_version: String,
}

/// Whether `latest_tag` names a different release than `current_version`.
///
/// Both sides may carry a leading `v`.
#[must_use]
pub fn is_outdated(latest_tag: &str, current_version: &str) -> bool {
    let latest = latest_tag.trim().trim_start_matches('v');
    !latest.is_empty() && latest != current_version.trim_start_matches('v')
}

impl UpdateChecker {
    /// Creates a checker storing its timestamp under `data_dir`.
    #[must_use]
    pub fn new(data_dir: &Path, current_version: impl Into<String>) -> Self {
        Self {
            stamp_path: data_dir.join(STAMP_FILE),
            releases_url: RELEASES_URL.to_string(),
            current_version: current_version.into(),
        }
    }

    /// Overrides the release endpoint.
    #[must_use]
    pub fn with_releases_url(mut self, url: impl Into<String>) -> Self {
        self.releases_url = url.into();
        self
    }

    /// Time of the previous check, if one was recorded.
    fn last_check(&self) -> Option<DateTime<Utc>> {
        let content = fs::read_to_string(&self.stamp_path).ok()?;
        DateTime::parse_from_rfc3339(content.trim())
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }

    /// Whether enough time has passed since the previous check.
    #[must_use]
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.last_check()
            .is_none_or(|last| now - last >= TimeDelta::minutes(CHECK_INTERVAL_MINUTES))
    }

    fn record(&self, now: DateTime<Utc>) -> Result<()> {
        crate::config::ensure_parent_dir(&self.stamp_path)?;
        fs::write(&self.stamp_path, now.to_rfc3339()).map_err(|source| JiraError::Io {
            path: self.stamp_path.clone(),
            source,
        })
    }

    async fn latest_tag(&self, timeout: Duration) -> Result<String> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(format!("jira/{}", self.current_version))
            .build()?;

        let response = http
            .get(&self.releases_url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(JiraError::Api {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
            });
        }

        let bytes = response.bytes().await?;
        let release: Release = crate::jira::client::decode(&bytes)?;
        Ok(release.tag_name)
    }

    /// Returns the newer release tag when a check is due and one exists.
    ///
    /// The check time is recorded even when the request fails, so an
    /// unreachable endpoint is retried only after the interval.
    ///
    /// # Errors
    ///
    /// Returns the network or I/O error that stopped the check.
    pub async fn newer_release(&self, timeout: Duration) -> Result<Option<String>> {
        let now = Utc::now();
        if !self.is_due(now) {
            debug!("Skipping update check");
            return Ok(None);
        }

        let latest = self.latest_tag(timeout).await;
        self.record(now)?;
        let latest = latest?;
        debug!(latest = %latest, current = %self.current_version, "Fetched latest release");

        Ok(is_outdated(&latest, &self.current_version).then_some(latest))
    }
}

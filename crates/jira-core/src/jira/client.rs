// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the Jira REST API.
//!
//! Authenticates with basic auth (account email + API token) and decodes
//! JSON bodies into typed structs. Non-2xx answers become
//! [`JiraError::Api`], undecodable bodies [`JiraError::MalformedResponse`].

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{Issue, IssueTracker, NewIssue, Project, Transition};
use crate::Result;
use crate::config::Credentials;
use crate::error::JiraError;

/// Jira Cloud REST client.
pub struct JiraClient {
    /// HTTP client with configured timeout.
    http: Client,
    /// Base URL ending with `/`, e.g. `https://example.atlassian.net/`.
    base_url: String,
    /// Account email for basic auth.
    email: String,
    /// API token for basic auth.
    token: SecretString,
}

/// Error body returned by Jira for 4xx answers.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ErrorBody {
    error_messages: Vec<String>,
    errors: BTreeMap<String, String>,
}

/// Returns the API base URL for a configured domain.
///
/// A bare domain gets `https://`; a domain that already has a scheme is used
/// as given.
#[must_use]
pub fn base_url(domain: &str) -> String {
    let domain = domain.trim().trim_end_matches('/');
    if domain.starts_with("https://") || domain.starts_with("http://") {
        format!("{domain}/")
    } else {
        format!("https://{domain}/")
    }
}

/// Decodes a JSON body into `T`.
pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| JiraError::MalformedResponse {
        message: e.to_string(),
    })
}

/// Builds a readable message from a failed response body.
fn error_message(bytes: &[u8], reason: Option<&str>) -> String {
    if let Ok(body) = serde_json::from_slice::<ErrorBody>(bytes) {
        let mut messages = body.error_messages;
        messages.extend(body.errors.into_iter().map(|(field, msg)| format!("{field}: {msg}")));
        if !messages.is_empty() {
            return messages.join("; ");
        }
    }

    let text = String::from_utf8_lossy(bytes).trim().to_string();
    if text.is_empty() {
        reason.unwrap_or("unknown error").to_string()
    } else {
        text
    }
}

impl JiraClient {
    /// Creates a client for the given credentials.
    ///
    /// # Errors
    ///
    /// Returns `JiraError::Network` if the HTTP client cannot be built.
    pub fn new(credentials: &Credentials, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url(&credentials.domain),
            email: credentials.email.clone(),
            token: credentials.token.clone(),
        })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a request and returns the body of a successful response.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Vec<u8>> {
        let url = format!("{}{path}", self.base_url);
        debug!(%method, %url, "Calling Jira API");

        let mut request = self
            .http
            .request(method, &url)
            .basic_auth(&self.email, Some(self.token.expose_secret()))
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Jira API returned an error");
            return Err(JiraError::Api {
                status: status.as_u16(),
                message: error_message(&bytes, status.canonical_reason()),
            });
        }

        Ok(bytes.to_vec())
    }

    /// `GET` a path and decode the JSON answer.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let bytes = self.send::<()>(Method::GET, path, None).await?;
        decode(&bytes)
    }

    /// `POST` a JSON body and return the raw answer.
    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Vec<u8>> {
        self.send(Method::POST, path, Some(body)).await
    }
}

#[async_trait]
impl IssueTracker for JiraClient {
    #[instrument(skip(self))]
    async fn assigned_issues(&self) -> Result<Vec<Issue>> {
        self.fetch_assigned_issues().await
    }

    #[instrument(skip(self))]
    async fn issue(&self, issue_id: &str) -> Result<Issue> {
        self.fetch_issue(issue_id).await
    }

    #[instrument(skip_all)]
    async fn create_issue(&self, new_issue: &NewIssue) -> Result<String> {
        self.post_issue(new_issue).await
    }

    #[instrument(skip(self))]
    async fn transitions(&self, issue_id: &str) -> Result<Vec<Transition>> {
        self.fetch_transitions(issue_id).await
    }

    #[instrument(skip(self))]
    async fn transition_issue(&self, issue_id: &str, transition_id: &str) -> Result<()> {
        self.post_transition(issue_id, transition_id).await
    }

    #[instrument(skip(self))]
    async fn project(&self, project_id: i64) -> Result<Project> {
        self.fetch_project(project_id).await
    }

    fn browse_url(&self, issue_key: &str) -> String {
        format!("{}browse/{issue_key}", self.base_url)
    }
}

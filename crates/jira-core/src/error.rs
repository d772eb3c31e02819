// SPDX-License-Identifier: Apache-2.0

//! Error types for the jira CLI.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during jira operations.
#[derive(Error, Debug)]
pub enum JiraError {
    /// Reading from the terminal failed or the input stream was closed.
    #[error("Failed to read user input: {0}")]
    Input(#[source] std::io::Error),

    /// User input was rejected (out-of-range choice, not a number, empty value).
    #[error("{0}")]
    Validation(String),

    /// Config file could not be read or written.
    #[error("Failed to access config file '{}': {source}", path.display())]
    Io {
        /// Path of the file being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Config file content or layered settings are invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// A setting required for talking to Jira is missing.
    #[error("Missing '{key}' in configuration - run `jira configure` first")]
    NotConfigured {
        /// Name of the missing key.
        key: String,
    },

    /// Network/HTTP error from reqwest.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Jira answered with a non-success status code.
    #[error("Jira API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// Jira answered with a body that does not match the expected shape.
    #[error("Malformed response from Jira API: {message}")]
    MalformedResponse {
        /// Decoding error message.
        message: String,
    },
}

impl JiraError {
    /// Shorthand for a [`JiraError::Validation`] error.
    pub fn validation(message: impl Into<String>) -> Self {
        JiraError::Validation(message.into())
    }
}

impl From<config::ConfigError> for JiraError {
    fn from(err: config::ConfigError) -> Self {
        JiraError::Config {
            message: err.to_string(),
        }
    }
}

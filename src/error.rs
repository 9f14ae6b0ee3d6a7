use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Failed to load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        source: dotenvy::Error,
    },

    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Logger error: {0}")]
    Logger(String),
}

/// Login failures. Every variant aborts the run before anything is written.
#[derive(Debug, Error)]
pub(crate) enum AuthError {
    #[error("{var} is not set (expected in the environment or a .env file)")]
    MissingCredential { var: &'static str },

    #[error("Login request to {url} failed: {source}")]
    Transport { url: String, source: ureq::Error },

    #[error("Login rejected by {url} with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Login response from {url} is not valid JSON: {source}")]
    Parse {
        url: String,
        source: serde_json::Error,
    },

    #[error("Login response from {url} has no access_token")]
    MissingToken { url: String },
}

/// Per-endpoint failures. These are logged and recorded as null, never fatal.
#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("Error fetching data from {url}: {source}")]
    Transport { url: String, source: ureq::Error },

    #[error("Error fetching data from {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Error fetching data from {url}: invalid JSON: {source}")]
    Parse {
        url: String,
        source: serde_json::Error,
    },
}

impl FetchError {
    pub(crate) fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Parse { url, .. } => url,
        }
    }
}

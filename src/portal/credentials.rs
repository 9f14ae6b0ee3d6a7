use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::consts::{EMAIL_VAR, PASSWORD_VAR};
use crate::error::{AppError, AuthError};

/// Portal login, serialized as the login request body.
#[derive(Clone, Serialize)]
pub(crate) struct Credentials {
    pub(crate) email: String,
    pub(crate) password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub(crate) fn from_env() -> Result<Self, AuthError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Blank values count as missing so an empty login is never sent.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, AuthError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &'static str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or(AuthError::MissingCredential { var })
        };
        Ok(Self {
            email: read(EMAIL_VAR)?,
            password: read(PASSWORD_VAR)?,
        })
    }
}

/// Load `path`, or `.env` from the working directory upwards when none is given.
/// Only an absent default `.env` is tolerated; a broken one is reported.
pub(crate) fn load_env_file(path: Option<&Path>) -> Result<(), AppError> {
    match path {
        Some(path) => dotenvy::from_path(path).map_err(|source| AppError::EnvFile {
            path: path.to_path_buf(),
            source,
        }),
        None => match dotenvy::dotenv() {
            Err(source) if !source.not_found() => Err(AppError::EnvFile {
                path: PathBuf::from(".env"),
                source,
            }),
            _ => Ok(()),
        },
    }
}

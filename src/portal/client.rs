use std::time::Duration;

use serde::Deserialize;
use ureq::Agent;
use ureq::http::Response;

use crate::error::AuthError;

use super::credentials::Credentials;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Agent shared by the login and both fetches.
/// Status codes are returned as responses so callers can classify them.
pub(crate) fn build_agent() -> Agent {
    Agent::config_builder()
        .timeout_global(Some(REQUEST_TIMEOUT))
        .http_status_as_error(false)
        .build()
        .into()
}

/// Agent plus the bearer token issued at login
pub(crate) struct AuthenticatedClient {
    agent: Agent,
    token: String,
}

impl AuthenticatedClient {
    pub(crate) fn new(agent: Agent, token: String) -> Self {
        Self { agent, token }
    }

    pub(crate) fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub(crate) fn get(&self, url: &str) -> Result<Response<ureq::Body>, ureq::Error> {
        self.agent
            .get(url)
            .header("Authorization", self.authorization())
            .header("Accept", "application/json")
            .call()
    }
}

/// Log in and return a client that authorizes every later request.
pub(crate) fn authenticate(
    agent: Agent,
    login_url: &str,
    credentials: &Credentials,
) -> Result<AuthenticatedClient, AuthError> {
    let response = agent
        .post(login_url)
        .send_json(credentials)
        .map_err(|source| AuthError::Transport {
            url: login_url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(AuthError::Status {
            url: login_url.to_string(),
            status: status.as_u16(),
        });
    }

    let mut body = response.into_body();
    let login: LoginResponse =
        serde_json::from_reader(body.as_reader()).map_err(|source| AuthError::Parse {
            url: login_url.to_string(),
            source,
        })?;

    let token = login
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AuthError::MissingToken {
            url: login_url.to_string(),
        })?;

    tracing::debug!(url = %login_url, "login accepted");
    Ok(AuthenticatedClient::new(agent, token))
}

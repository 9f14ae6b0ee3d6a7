use serde_json::Value;

use crate::error::FetchError;

use super::client::AuthenticatedClient;

/// GET `url` and return its `data` field.
///
/// A body without a `data` key (or with `data: null`) is `Ok(None)`.
pub(crate) fn try_fetch(client: &AuthenticatedClient, url: &str) -> Result<Option<Value>, FetchError> {
    let response = client.get(url).map_err(|source| FetchError::Transport {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let mut body = response.into_body();
    let json: Value = serde_json::from_reader(body.as_reader()).map_err(|source| FetchError::Parse {
        url: url.to_string(),
        source,
    })?;

    Ok(data_field(json))
}

/// `data` of a response object; absent, `null` and non-object bodies all give `None`.
fn data_field(mut json: Value) -> Option<Value> {
    json.get_mut("data")
        .map(Value::take)
        .filter(|data| !data.is_null())
}

/// Like [`try_fetch`], but a failure is logged and recorded as `None`
/// so one endpoint going down never costs the other dataset.
pub(crate) fn fetch_data(client: &AuthenticatedClient, url: &str) -> Option<Value> {
    match try_fetch(client, url) {
        Ok(Some(data)) => {
            tracing::info!(url = %url, "fetched");
            Some(data)
        }
        Ok(None) => {
            tracing::warn!(url = %url, "no data in response");
            None
        }
        Err(e) => {
            tracing::error!(url = %e.url(), error = %e, "fetch failed");
            None
        }
    }
}

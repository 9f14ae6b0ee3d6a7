use std::path::PathBuf;

use crate::cli::Settings;
use crate::error::AppError;
use crate::portal::{Credentials, Endpoint, PortalUrls, authenticate, build_agent, fetch_data};
use crate::snapshot::{CollectedData, persist};

/// One collection run: log in, pull both datasets, write the snapshot.
///
/// Login failure aborts before anything touches disk. After a successful
/// login a snapshot is always written, with `null` for any dataset that
/// could not be fetched.
pub(crate) fn run_collection(settings: &Settings, credentials: &Credentials) -> Result<PathBuf, AppError> {
    let urls = PortalUrls::new(&settings.base_url);

    let client = authenticate(build_agent(), &urls.login(), credentials)?;
    tracing::info!(email = %credentials.email, "logged in");

    let data = CollectedData {
        current_vessel_traffic: fetch_data(&client, &urls.endpoint(Endpoint::CurrentVesselTraffic)),
        position_report: fetch_data(&client, &urls.endpoint(Endpoint::PositionReport)),
    };

    let path = persist(&data, &settings.output_dir, settings.timezone)?;
    tracing::info!(path = %path.display(), "snapshot written");
    Ok(path)
}

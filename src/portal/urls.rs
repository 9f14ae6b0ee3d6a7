//! Portal endpoint addresses
//!
//! Paths are fixed by the portal; only the host can be swapped.

const LOGIN_PATH: &str = "/api/accounts/login";

/// Datasets collected on every run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint {
    CurrentVesselTraffic,
    PositionReport,
}

impl Endpoint {
    pub(crate) fn path(self) -> &'static str {
        match self {
            Endpoint::CurrentVesselTraffic => "/api/pdams/GetCurrentVesselTraffic",
            Endpoint::PositionReport => "/api/map/PositionReport",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct PortalUrls {
    base: String,
}

impl PortalUrls {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn login(&self) -> String {
        format!("{}{}", self.base, LOGIN_PATH)
    }

    pub(crate) fn endpoint(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base, endpoint.path())
    }
}

mod client;
mod credentials;
mod fetch;
mod urls;

#[cfg(test)]
pub(crate) mod stub;

pub(crate) use client::{authenticate, build_agent};
pub(crate) use credentials::{Credentials, load_env_file};
pub(crate) use fetch::fetch_data;
pub(crate) use urls::{Endpoint, PortalUrls};

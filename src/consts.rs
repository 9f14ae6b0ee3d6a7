/// Portal root used when neither the CLI nor the config file override it
pub(crate) const DEFAULT_BASE_URL: &str = "https://ppaportal.portlink.co";

/// Directory snapshots are written to, relative to the working directory
pub(crate) const DEFAULT_OUTPUT_DIR: &str = "data";

/// Snapshot filenames are stamped in the portal's local time
pub(crate) const DEFAULT_TIMEZONE: chrono_tz::Tz = chrono_tz::America::Vancouver;

/// Snapshot filename format: "2025-01-15_08-30-00"
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

pub(crate) const EMAIL_VAR: &str = "EMAIL";
pub(crate) const PASSWORD_VAR: &str = "PASSWORD";

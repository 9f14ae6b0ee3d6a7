//! CLI argument definitions
//!
//! Flags are all optional; with none given a run uses the portal defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::consts::{DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR};
use crate::error::AppError;
use crate::utils::Timezone;

#[derive(Debug, Parser)]
#[command(name = "ppa-collector")]
#[command(
    about = "Snapshot vessel traffic and position reports from the port authority portal",
    version
)]
pub(crate) struct Cli {
    /// Directory snapshots are written to (default: ./data)
    #[arg(short, long, value_name = "DIR")]
    pub(crate) output_dir: Option<PathBuf>,

    /// Portal base URL (default: https://ppaportal.portlink.co)
    #[arg(long, value_name = "URL")]
    pub(crate) base_url: Option<String>,

    /// Timezone for snapshot filenames (e.g., "America/Vancouver", "UTC", "local")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Read EMAIL and PASSWORD from this file instead of ./.env
    #[arg(long, value_name = "PATH")]
    pub(crate) env_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, conflicts_with = "quiet")]
    pub(crate) debug: bool,

    /// Only log errors and skip the summary line
    #[arg(short, long)]
    pub(crate) quiet: bool,
}

/// Fully resolved settings for one collection run
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) base_url: String,
    pub(crate) output_dir: PathBuf,
    pub(crate) timezone: Timezone,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.output_dir.is_none() {
            self.output_dir = config.output_dir.clone();
        }
        if self.base_url.is_none() {
            self.base_url = config.base_url.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        self
    }

    pub(crate) fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.debug {
            "debug"
        } else {
            "info"
        }
    }

    pub(crate) fn settings(&self) -> Result<Settings, AppError> {
        Ok(Settings {
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            output_dir: self
                .output_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            timezone: Timezone::parse(self.timezone.as_deref())?,
        })
    }
}

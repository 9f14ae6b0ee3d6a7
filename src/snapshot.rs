//! Snapshot persistence
//!
//! One run produces one `<stamp>.json` file holding both datasets.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;
use crate::utils::Timezone;

/// Everything collected in one run. Missing datasets serialize as `null`.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CollectedData {
    pub(crate) current_vessel_traffic: Option<Value>,
    pub(crate) position_report: Option<Value>,
}

pub(crate) fn persist(data: &CollectedData, dir: &Path, timezone: Timezone) -> Result<PathBuf, AppError> {
    persist_at(data, dir, timezone, Utc::now())
}

/// Write `data` to `<dir>/<stamp>.json`, creating `dir` if needed.
/// A second snapshot within the same second replaces the first.
pub(crate) fn persist_at(
    data: &CollectedData,
    dir: &Path,
    timezone: Timezone,
    now: DateTime<Utc>,
) -> Result<PathBuf, AppError> {
    fs::create_dir_all(dir).map_err(|source| AppError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(format!("{}.json", timezone.stamp(now)));
    let write_err = |source: std::io::Error| AppError::Write {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data).map_err(|e| write_err(e.into()))?;
    writer.flush().map_err(write_err)?;

    Ok(path)
}

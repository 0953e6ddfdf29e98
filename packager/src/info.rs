//! Version info record.
//!
//! Each package ships a `<version>.info` sidecar holding the version label
//! and the packaging time:
//!
//! ```json
//! {"Version":"v1.0.0","Time":"2026-02-11T10:00:00Z"}
//! ```

use crate::error::{PackError, Result};
use crate::module_id::Version;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};

/// Layout of the `Time` field: UTC with second precision and a literal `Z`.
pub const INFO_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// The JSON record written to `<version>.info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InfoRecord {
    /// The packaged version label.
    pub version: String,
    /// Packaging time formatted with [`INFO_TIME_FORMAT`].
    pub time: String,
}

impl InfoRecord {
    /// Build the record for `version` packaged at `packaged_at`.
    #[must_use]
    pub fn new(version: &Version, packaged_at: DateTime<Utc>) -> Self {
        Self {
            version: version.as_str().to_owned(),
            time: format_info_time(packaged_at),
        }
    }

    /// Serialise the record as compact JSON without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialisation fails.
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

/// Format `instant` for the `Time` field.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use pacmod::info::format_info_time;
///
/// let instant = Utc.with_ymd_and_hms(2026, 2, 11, 10, 0, 0).unwrap();
/// assert_eq!(format_info_time(instant), "2026-02-11T10:00:00Z");
/// ```
#[must_use]
pub fn format_info_time(instant: DateTime<Utc>) -> String {
    instant.format(INFO_TIME_FORMAT).to_string()
}

/// Write the info record for `version` into `output_dir`.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns [`PackError::InfoCreate`] if the file cannot be created and
/// [`PackError::InfoWrite`] if the record cannot be serialised or written.
pub fn write_info_file(
    output_dir: &Utf8Path,
    version: &Version,
    packaged_at: DateTime<Utc>,
) -> Result<Utf8PathBuf> {
    let path = output_dir.join(version.info_file_name());
    let mut file = fs::File::create(&path).map_err(|source| PackError::InfoCreate {
        path: path.clone(),
        source,
    })?;

    let record = InfoRecord::new(version, packaged_at);
    record
        .to_json()
        .map_err(io::Error::from)
        .and_then(|bytes| file.write_all(&bytes))
        .and_then(|()| file.flush())
        .map_err(|source| PackError::InfoWrite {
            path: path.clone(),
            source,
        })?;

    info!("wrote {path} ({})", record.time);
    Ok(path)
}

#[cfg(test)]
#[path = "info_tests.rs"]
mod tests;

//! The packaging pipeline.
//!
//! Runs the four packaging steps in order, stopping at the first failure:
//!
//! 1. resolve the module name from `go.mod`,
//! 2. write `source.zip` with entries under `<module>@<version>/`,
//! 3. write `<version>.info`,
//! 4. copy `go.mod` into the output directory.
//!
//! Artefacts written by earlier steps are left in place when a later step
//! fails.

use crate::archive::{ARCHIVE_FILE_NAME, create_source_archive};
use crate::error::Result;
use crate::info::write_info_file;
use crate::manifest::{copy_manifest, resolve_module_name};
use crate::module_id::{ModuleName, Version};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use log::info;

/// Input parameters for [`pack_module`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackParams {
    /// Root directory of the module; must contain `go.mod`.
    pub module_path: Utf8PathBuf,
    /// Version label used for the archive prefix and the info file name.
    pub version: Version,
    /// Existing directory that receives the artefacts.
    pub output_dir: Utf8PathBuf,
    /// Packaging time recorded in the info file.
    pub packaged_at: DateTime<Utc>,
}

impl PackParams {
    /// Create parameters stamped with the current UTC time.
    #[must_use]
    pub fn new(
        module_path: impl Into<Utf8PathBuf>,
        version: impl Into<Version>,
        output_dir: impl Into<Utf8PathBuf>,
    ) -> Self {
        Self {
            module_path: module_path.into(),
            version: version.into(),
            output_dir: output_dir.into(),
            packaged_at: Utc::now(),
        }
    }

    /// Override the recorded packaging time.
    #[must_use]
    pub fn with_packaged_at(mut self, packaged_at: DateTime<Utc>) -> Self {
        self.packaged_at = packaged_at;
        self
    }
}

/// Artefacts produced by [`pack_module`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackOutput {
    /// Module name read from the manifest.
    pub module_name: ModuleName,
    /// Path of the written `source.zip`.
    pub archive_path: Utf8PathBuf,
    /// Names of the archive entries, in archive order.
    pub entries: Vec<String>,
    /// Path of the written `<version>.info`.
    pub info_path: Utf8PathBuf,
    /// Path of the manifest copy, or `None` when the copy was skipped.
    pub manifest_copy: Option<Utf8PathBuf>,
}

/// Pack the module at `module_path` as `version` into `output_dir`.
///
/// Convenience wrapper over [`pack_module`] using the current time.
///
/// # Errors
///
/// Returns the [`PackError`](crate::error::PackError) of the first step
/// that fails.
pub fn pack(
    module_path: impl AsRef<Utf8Path>,
    version: &str,
    output_dir: impl AsRef<Utf8Path>,
) -> Result<PackOutput> {
    pack_module(&PackParams::new(
        module_path.as_ref(),
        version,
        output_dir.as_ref(),
    ))
}

/// Run the packaging pipeline described by `params`.
///
/// # Errors
///
/// Returns the [`PackError`](crate::error::PackError) of the first step
/// that fails; no later step runs.
pub fn pack_module(params: &PackParams) -> Result<PackOutput> {
    let module_name = resolve_module_name(&params.module_path)?;
    info!(
        "packing {module_name}@{} from {}",
        params.version, params.module_path
    );

    let archive_path = params.output_dir.join(ARCHIVE_FILE_NAME);
    let prefix = module_name.archive_prefix(&params.version);
    let entries = create_source_archive(&params.module_path, &prefix, &archive_path)?;
    info!("wrote {archive_path} with {} entries", entries.len());

    let info_path = write_info_file(&params.output_dir, &params.version, params.packaged_at)?;
    let manifest_copy = copy_manifest(&params.module_path, &params.output_dir)?;

    Ok(PackOutput {
        module_name,
        archive_path,
        entries,
        info_path,
        manifest_copy,
    })
}

#[cfg(test)]
#[path = "pack_tests.rs"]
mod tests;

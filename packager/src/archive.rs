//! Source archive creation.
//!
//! Streams every file of a module tree into `source.zip`, rooting each
//! entry under `<module>@<version>/`.

use crate::error::{PackError, Result};
use crate::walk::collect_source_files;
use camino::{Utf8Component, Utf8Path};
use log::debug;
use std::fs;
use std::io;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// File name of the source archive inside the output directory.
pub const ARCHIVE_FILE_NAME: &str = "source.zip";

/// Margin kept below the 32-bit size limit for Deflate's worst-case growth.
const DEFLATE_HEADROOM: u64 = 1 << 20;

/// Compute the archive entry name for `file` below `module_path`.
///
/// The relative path is joined to `prefix` with `/` separators regardless
/// of the host platform. A trailing separator on `module_path` makes no
/// difference to the result.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use pacmod::archive::entry_name;
///
/// let name = entry_name(
///     "example.com/foo@v1.0.0",
///     Utf8Path::new("src/mod"),
///     Utf8Path::new("src/mod/sub/b.txt"),
/// );
/// assert_eq!(name, "example.com/foo@v1.0.0/sub/b.txt");
/// ```
#[must_use]
pub fn entry_name(prefix: &str, module_path: &Utf8Path, file: &Utf8Path) -> String {
    let relative = file.strip_prefix(module_path).unwrap_or(file);
    let mut name = prefix.to_owned();
    for component in relative.components() {
        if let Utf8Component::Normal(part) = component {
            name.push('/');
            name.push_str(part);
        }
    }
    name
}

/// Create the source archive for the module at `module_path`.
///
/// The tree is walked before the archive file is created, so a walk
/// failure leaves no archive behind. Returns the names of the entries
/// written, in archive order.
///
/// # Errors
///
/// Returns [`PackError::SourceWalk`] if the tree cannot be enumerated,
/// [`PackError::ArchiveCreate`] if `archive_path` cannot be created and
/// [`PackError::ArchiveWrite`] if a source file cannot be streamed into the
/// archive or the archive cannot be finalised.
pub fn create_source_archive(
    module_path: &Utf8Path,
    prefix: &str,
    archive_path: &Utf8Path,
) -> Result<Vec<String>> {
    let files = collect_source_files(module_path)?;

    let output_file = fs::File::create(archive_path).map_err(|source| {
        PackError::ArchiveCreate {
            path: archive_path.to_path_buf(),
            source,
        }
    })?;
    let mut archive = ZipWriter::new(output_file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut names = Vec::with_capacity(files.len());
    for file in &files {
        let name = entry_name(prefix, module_path, file);
        append_file(&mut archive, file, &name, options).map_err(|source| {
            PackError::ArchiveWrite {
                path: file.clone(),
                source,
            }
        })?;
        debug!("archived {file} as {name}");
        names.push(name);
    }

    // Write the central directory before the file handle is dropped.
    archive
        .finish()
        .map_err(|err| PackError::ArchiveWrite {
            path: archive_path.to_path_buf(),
            source: io::Error::other(err),
        })?
        .sync_all()
        .map_err(|source| PackError::ArchiveWrite {
            path: archive_path.to_path_buf(),
            source,
        })?;

    Ok(names)
}

/// Stream `source` into a new archive entry called `name`.
fn append_file(
    archive: &mut ZipWriter<fs::File>,
    source: &Utf8Path,
    name: &str,
    options: SimpleFileOptions,
) -> io::Result<()> {
    let mut input = fs::File::open(source)?;
    let len = input.metadata()?.len();
    let options = options.large_file(needs_zip64(len));
    archive.start_file(name, options).map_err(io::Error::other)?;
    io::copy(&mut input, archive)?;
    Ok(())
}

/// Whether an entry of `len` bytes needs ZIP64 size fields.
fn needs_zip64(len: u64) -> bool {
    len >= u64::from(u32::MAX) - DEFLATE_HEADROOM
}

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;

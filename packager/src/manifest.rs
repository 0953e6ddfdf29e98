//! Module manifest handling.
//!
//! Reads the module name from the first line of `go.mod` and copies the
//! manifest next to the packaged artefacts.

use crate::error::{PackError, Result};
use crate::module_id::ModuleName;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use log::{debug, info};
use std::fs;
use std::io::{self, BufRead, BufReader, Write};

/// File name of the module manifest at the module root.
pub const MANIFEST_FILE_NAME: &str = "go.mod";

/// Permissions given to a manifest copy when it is created.
#[cfg(unix)]
const MANIFEST_COPY_MODE: u32 = 0o644;

/// Return the path of the manifest inside `module_path`.
#[must_use]
pub fn manifest_path(module_path: &Utf8Path) -> Utf8PathBuf {
    module_path.join(MANIFEST_FILE_NAME)
}

/// Extract the module name from a manifest header line.
///
/// The line is split on single spaces and the second token is returned.
/// Tabs and repeated spaces are not collapsed, so `module  foo` yields an
/// empty name.
///
/// # Examples
///
/// ```
/// use pacmod::manifest::parse_module_header;
///
/// assert_eq!(parse_module_header("module example.com/foo"), Some("example.com/foo"));
/// assert_eq!(parse_module_header("module"), None);
/// ```
#[must_use]
pub fn parse_module_header(line: &str) -> Option<&str> {
    line.split(' ').nth(1)
}

/// Resolve the module name declared by the manifest in `module_path`.
///
/// Only the first line is read.
///
/// # Errors
///
/// Returns [`PackError::ManifestRead`] if the manifest cannot be opened or
/// read, and [`PackError::ManifestParse`] if its first line holds fewer
/// than two space-separated tokens.
pub fn resolve_module_name(module_path: &Utf8Path) -> Result<ModuleName> {
    let path = manifest_path(module_path);
    let header = read_first_line(&path).map_err(|source| PackError::ManifestRead {
        path: path.clone(),
        source,
    })?;

    match parse_module_header(&header) {
        Some(name) => {
            debug!("resolved module name {name:?} from {path}");
            Ok(ModuleName::from(name))
        }
        None => Err(PackError::ManifestParse { path, header }),
    }
}

/// Read the first line of `path` without its line terminator.
fn read_first_line(path: &Utf8Path) -> io::Result<String> {
    let mut reader = BufReader::new(fs::File::open(path)?);
    let mut raw = Vec::new();
    reader.read_until(b'\n', &mut raw)?;
    if raw.last() == Some(&b'\n') {
        raw.pop();
    }
    if raw.last() == Some(&b'\r') {
        raw.pop();
    }
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Copy the manifest from `module_path` into `output_dir`.
///
/// The copy is skipped when `output_dir` is literally `"."` or when the
/// source and destination manifest paths are the same path. Returns the
/// destination path when a copy was written.
///
/// # Errors
///
/// Returns [`PackError::ManifestCopyRead`] if the source manifest cannot be
/// read and [`PackError::ManifestCopyWrite`] if the destination cannot be
/// written.
pub fn copy_manifest(module_path: &Utf8Path, output_dir: &Utf8Path) -> Result<Option<Utf8PathBuf>> {
    if output_dir.as_str() == "." {
        debug!("output directory is the current directory; manifest copy skipped");
        return Ok(None);
    }

    let source_path = manifest_path(module_path);
    let destination_path = output_dir.join(MANIFEST_FILE_NAME);
    if same_lexical_path(&source_path, &destination_path) {
        debug!("{source_path} is already in the output directory; manifest copy skipped");
        return Ok(None);
    }

    let contents = fs::read(&source_path).map_err(|source| PackError::ManifestCopyRead {
        path: source_path.clone(),
        source,
    })?;
    write_manifest_copy(&destination_path, &contents).map_err(|source| {
        PackError::ManifestCopyWrite {
            path: destination_path.clone(),
            source,
        }
    })?;

    info!("copied {source_path} to {destination_path}");
    Ok(Some(destination_path))
}

/// Compare two paths after lexical cleaning.
///
/// No filesystem access is performed, so symlinks are not resolved.
fn same_lexical_path(left: &Utf8Path, right: &Utf8Path) -> bool {
    lexically_clean(left) == lexically_clean(right)
}

/// Drop `.` components and fold `name/..` pairs without touching the
/// filesystem. `..` directly under the root is discarded; leading `..` in a
/// relative path is kept.
fn lexically_clean(path: &Utf8Path) -> Vec<Utf8Component<'_>> {
    let mut cleaned: Vec<Utf8Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => match cleaned.last() {
                Some(Utf8Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Utf8Component::RootDir | Utf8Component::Prefix(_)) => {}
                _ => cleaned.push(component),
            },
            _ => cleaned.push(component),
        }
    }
    cleaned
}

/// Write `contents` to `path`, truncating any existing file.
fn write_manifest_copy(path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(MANIFEST_COPY_MODE);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.flush()
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;

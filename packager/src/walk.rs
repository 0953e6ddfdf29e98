//! Source tree enumeration.
//!
//! Collects every file below a module root, depth first, pruning
//! version-control metadata directories.

use crate::error::{PackError, Result};
use camino::{Utf8DirEntry, Utf8Path, Utf8PathBuf};
use log::debug;
use std::io;

/// Directory names that are never descended into.
pub const PRUNED_DIRECTORIES: &[&str] = &[".git"];

/// Return every file below `root`, depth first.
///
/// Entries of each directory are visited in file-name order so the result
/// does not depend on the filesystem's own listing order. Directories are
/// not returned. Symbolic links are not followed while walking; a link is
/// returned like a file.
///
/// # Errors
///
/// Returns [`PackError::SourceWalk`] if a directory cannot be listed or an
/// entry name is not valid UTF-8.
pub fn collect_source_files(root: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();
    walk_dir(root, &mut files)?;
    Ok(files)
}

fn walk_dir(dir: &Utf8Path, files: &mut Vec<Utf8PathBuf>) -> Result<()> {
    let mut entries = dir
        .read_dir_utf8()
        .and_then(|iter| iter.collect::<io::Result<Vec<Utf8DirEntry>>>())
        .map_err(|source| PackError::SourceWalk {
            path: dir.to_path_buf(),
            source,
        })?;
    entries.sort_by(|left, right| left.file_name().cmp(right.file_name()));

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|source| PackError::SourceWalk {
            path: path.to_path_buf(),
            source,
        })?;

        if !file_type.is_dir() {
            files.push(path.to_path_buf());
            continue;
        }
        if is_pruned(path) {
            debug!("skipping {path}");
            continue;
        }
        walk_dir(path, files)?;
    }
    Ok(())
}

fn is_pruned(dir: &Utf8Path) -> bool {
    dir.file_name()
        .is_some_and(|name| PRUNED_DIRECTORIES.contains(&name))
}

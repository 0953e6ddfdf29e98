//! Error types for module packaging.
//!
//! Each variant names the packaging step that failed and carries the path
//! involved together with the underlying cause, so callers can report a
//! message such as "could not create info file dist/v1.0.0.info: ...".

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while packing a module.
#[derive(Debug, Error)]
pub enum PackError {
    /// The module manifest is missing or cannot be opened.
    #[error("could not get module name: unable to open module file {path}")]
    ManifestRead {
        /// Path of the manifest that was expected.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The first manifest line does not contain a module name.
    #[error("could not get module name: unable to parse module header {header:?} in {path}")]
    ManifestParse {
        /// Path of the manifest that was read.
        path: Utf8PathBuf,
        /// The first line as read from the manifest.
        header: String,
    },

    /// The module tree could not be walked to collect source files.
    #[error("could not create zip archive: unable to walk {path}")]
    SourceWalk {
        /// Directory or entry that could not be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The destination archive file could not be created.
    #[error("could not create zip archive: unable to create {path}")]
    ArchiveCreate {
        /// Path of the archive that was being created.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A source file could not be opened or streamed into the archive, or
    /// the archive could not be finalised.
    #[error("could not create zip archive: unable to add {path}")]
    ArchiveWrite {
        /// Source file (or archive path when finalising) that failed.
        path: Utf8PathBuf,
        /// The underlying I/O or ZIP error.
        #[source]
        source: std::io::Error,
    },

    /// The info file could not be created.
    #[error("could not create info file {path}")]
    InfoCreate {
        /// Path of the info file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The info record could not be serialised or written.
    #[error("could not write info file {path}")]
    InfoWrite {
        /// Path of the info file.
        path: Utf8PathBuf,
        /// The underlying I/O or serialisation error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest could not be read for copying.
    #[error("could not copy module file: unable to read {path}")]
    ManifestCopyRead {
        /// Path of the source manifest.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest copy could not be written.
    #[error("could not copy module file: unable to write {path}")]
    ManifestCopyWrite {
        /// Path of the destination manifest.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`PackError`].
pub type Result<T> = std::result::Result<T, PackError>;

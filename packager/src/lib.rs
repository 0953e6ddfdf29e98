//! pacmod library.
//!
//! Packages a Go module directory into a distributable bundle: a
//! `source.zip` whose entries are rooted under `<module>@<version>/`, a
//! `<version>.info` JSON sidecar and a copy of `go.mod`. It is used by the
//! `pacmod` binary and can be called directly through [`pack::pack`].
//!
//! # Modules
//!
//! - [`archive`] - ZIP archive creation and entry naming
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Error types naming the failing packaging step
//! - [`info`] - The `<version>.info` record
//! - [`manifest`] - `go.mod` parsing and copying
//! - [`module_id`] - Module name and version newtypes
//! - [`pack`] - The packaging pipeline
//! - [`walk`] - Source tree enumeration

pub mod archive;
pub mod cli;
pub mod error;
pub mod info;
pub mod manifest;
pub mod module_id;
pub mod pack;
pub mod walk;

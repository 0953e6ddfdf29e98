//! CLI argument definitions for pacmod.
//!
//! Kept apart from the binary so the parser can be unit tested and so the
//! entrypoint only wires arguments to [`crate::pack::pack_module`].

use crate::pack::PackParams;
use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use clap::Parser;
use log::LevelFilter;

/// Package a Go module directory into a distributable bundle.
#[derive(Parser, Debug, Clone)]
#[command(name = "pacmod")]
#[command(version, about)]
#[command(long_about = concat!(
    "Package a Go module directory into a distributable bundle.\n\n",
    "Writes source.zip (entries rooted under <module>@<version>/), ",
    "<version>.info (version and packaging time as JSON) and a copy of ",
    "go.mod into the output directory, which must already exist.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Package the module in the current directory into dist/:\n",
    "    $ pacmod v1.2.0 dist\n\n",
    "  Package another module with a fixed timestamp:\n",
    "    $ pacmod --path ../foo --packaged-at 2026-02-11T10:00:00Z v1.2.0 out",
))]
pub struct Cli {
    /// Version label for the package (e.g. "v1.2.0").
    #[arg(id = "module_version", value_name = "VERSION")]
    pub module_version: String,

    /// Existing directory that receives the artefacts.
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: Utf8PathBuf,

    /// Root directory of the module to package.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub path: Utf8PathBuf,

    /// RFC 3339 packaging time recorded in the info file [default: now].
    #[arg(long, value_name = "TIMESTAMP", value_parser = parse_packaged_at)]
    pub packaged_at: Option<DateTime<Utc>>,

    /// Log each archived file and packaging step.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress the summary of written artefacts (errors still shown).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Build packaging parameters from the parsed arguments.
    #[must_use]
    pub fn pack_params(&self) -> PackParams {
        let params = PackParams::new(
            self.path.clone(),
            self.module_version.as_str(),
            self.output_dir.clone(),
        );
        match self.packaged_at {
            Some(packaged_at) => params.with_packaged_at(packaged_at),
            None => params,
        }
    }

    /// Default log filter used when `RUST_LOG` is unset.
    #[must_use]
    pub fn default_log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}

/// Parse an RFC 3339 timestamp and convert it to UTC.
fn parse_packaged_at(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|instant| instant.with_timezone(&Utc))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

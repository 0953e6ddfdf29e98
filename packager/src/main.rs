//! pacmod CLI entrypoint.
//!
//! Parses arguments, runs the packaging pipeline and reports the written
//! artefacts on stdout. Any failure is printed to stderr with its cause
//! chain and exits with status 1.

use clap::Parser;
use pacmod::cli::Cli;
use pacmod::error::PackError;
use pacmod::pack::{PackOutput, pack_module};
use std::error::Error;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    match pack_module(&cli.pack_params()) {
        Ok(output) => {
            if !cli.quiet {
                report(&output);
            }
        }
        Err(err) => {
            report_error(&err);
            std::process::exit(1);
        }
    }
}

/// Install `env_logger`, honouring `RUST_LOG` over the CLI default.
fn init_logging(cli: &Cli) {
    env_logger::Builder::new()
        .filter_level(cli.default_log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Print one line per artefact written.
fn report(output: &PackOutput) {
    println!(
        "Created {} ({} files)",
        output.archive_path,
        output.entries.len()
    );
    println!("Created {}", output.info_path);
    if let Some(copy) = &output.manifest_copy {
        println!("Created {copy}");
    }
}

/// Print `err` and each underlying cause.
fn report_error(err: &PackError) {
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

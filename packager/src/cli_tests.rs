//! Tests for CLI parsing and parameter mapping.

use super::*;
use chrono::TimeZone;
use clap::CommandFactory;
use rstest::rstest;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn cli_version_flag_prints_tool_version() {
    let err = Cli::try_parse_from(["pacmod", "--version"]).expect_err("--version exits early");
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[test]
fn cli_accepts_flag_like_version_after_separator() {
    let cli = Cli::parse_from(["pacmod", "--", "--version"]);
    assert_eq!(cli.module_version, "--version");
}

#[test]
fn cli_parses_defaults() {
    let cli = Cli::parse_from(["pacmod", "v1.0.0"]);
    assert_eq!(cli.module_version, "v1.0.0");
    assert_eq!(cli.output_dir, Utf8PathBuf::from("."));
    assert_eq!(cli.path, Utf8PathBuf::from("."));
    assert!(cli.packaged_at.is_none());
    assert!(!cli.verbose);
    assert!(!cli.quiet);
}

#[test]
fn cli_parses_output_dir_and_path() {
    let cli = Cli::parse_from(["pacmod", "--path", "../foo", "v1.0.0", "dist"]);
    assert_eq!(cli.path, Utf8PathBuf::from("../foo"));
    assert_eq!(cli.output_dir, Utf8PathBuf::from("dist"));
}

#[test]
fn cli_requires_version() {
    Cli::try_parse_from(["pacmod"]).expect_err("expected clap to reject missing version");
}

#[test]
fn cli_rejects_verbose_with_quiet() {
    Cli::try_parse_from(["pacmod", "-v", "-q", "v1.0.0"])
        .expect_err("expected clap to reject conflicting flags");
}

#[rstest]
#[case::utc("2026-02-11T10:00:00Z", 10)]
#[case::offset("2026-02-11T12:00:00+02:00", 10)]
#[case::fractional("2026-02-11T10:00:00.750Z", 10)]
fn cli_normalises_packaged_at_to_utc(#[case] raw: &str, #[case] hour: u32) {
    let cli = Cli::parse_from(["pacmod", "--packaged-at", raw, "v1.0.0"]);
    let expected = Utc
        .with_ymd_and_hms(2026, 2, 11, hour, 0, 0)
        .single()
        .expect("valid instant");
    let parsed = cli.packaged_at.expect("timestamp parsed");
    assert_eq!(parsed.timestamp(), expected.timestamp());
}

#[rstest]
#[case::date_only("2026-02-11")]
#[case::no_zone("2026-02-11T10:00:00")]
#[case::garbage("yesterday")]
fn cli_rejects_invalid_packaged_at(#[case] raw: &str) {
    Cli::try_parse_from(["pacmod", "--packaged-at", raw, "v1.0.0"])
        .expect_err("expected clap to reject invalid timestamp");
}

#[test]
fn pack_params_carries_arguments() {
    let cli = Cli::parse_from([
        "pacmod",
        "-p",
        "module",
        "--packaged-at",
        "2026-02-11T10:00:00Z",
        "v3.1.4",
        "out",
    ]);
    let params = cli.pack_params();
    assert_eq!(params.module_path, Utf8PathBuf::from("module"));
    assert_eq!(params.version.as_str(), "v3.1.4");
    assert_eq!(params.output_dir, Utf8PathBuf::from("out"));
    assert_eq!(
        Some(params.packaged_at),
        Utc.with_ymd_and_hms(2026, 2, 11, 10, 0, 0).single()
    );
}

#[rstest]
#[case::plain(&["pacmod", "v1"], LevelFilter::Warn)]
#[case::verbose(&["pacmod", "--verbose", "v1"], LevelFilter::Debug)]
fn default_log_level_follows_verbose(#[case] args: &[&str], #[case] expected: LevelFilter) {
    let cli = Cli::parse_from(args.iter().copied());
    assert_eq!(cli.default_log_level(), expected);
}

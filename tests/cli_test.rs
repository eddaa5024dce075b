//! Tests for argument parsing, size resolution, the generate command and exit codes

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use rstest::rstest;
use tempfile::TempDir;

use gridgen::application::services::GridReport;
use gridgen::application::{ApplicationError, IoResultExt};
use gridgen::cli::commands::{generate, resolve_size, summary_lines, INVALID_SIZE_MESSAGE};
use gridgen::cli::{Cli, CliError};
use gridgen::config::Settings;
use gridgen::domain::{GridSize, GridSummary};
use gridgen::exitcode;
use gridgen::infrastructure::di::ServiceContainer;
use gridgen::infrastructure::InfraError;
use gridgen::util::testing;

fn size(n: u32) -> GridSize {
    GridSize::new(n).unwrap()
}

#[test]
fn given_no_args_when_parsing_then_size_absent() {
    let cli = Cli::try_parse_from(["gridgen"]).unwrap();

    assert!(cli.size.is_none());
    assert!(cli.output_dir.is_none());
    assert!(!cli.strict);
    assert_eq!(cli.debug, 0);
}

#[test]
fn given_negative_number_when_parsing_then_kept_as_raw_size() {
    let cli = Cli::try_parse_from(["gridgen", "-5"]).unwrap();

    assert_eq!(cli.size.as_deref(), Some("-5"));
}

#[test]
fn given_flags_when_parsing_then_all_captured() {
    let cli = Cli::try_parse_from(["gridgen", "-dd", "--strict", "-o", "out", "42"]).unwrap();

    assert_eq!(cli.size.as_deref(), Some("42"));
    assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
    assert!(cli.strict);
    assert_eq!(cli.debug, 2);
}

#[test]
fn given_unknown_flag_when_parsing_then_rejected() {
    assert!(Cli::try_parse_from(["gridgen", "--show-config"]).is_err());
}

#[test]
fn given_no_size_when_resolving_then_default_and_silent() {
    let mut out: Vec<u8> = Vec::new();

    assert_eq!(resolve_size(None, size(100), false, &mut out).unwrap(), size(100));
    assert_eq!(resolve_size(None, size(8), true, &mut out).unwrap(), size(8));
    assert!(out.is_empty());
}

#[test]
fn given_valid_size_when_resolving_then_used_and_silent() {
    let mut out: Vec<u8> = Vec::new();

    assert_eq!(resolve_size(Some("12"), size(100), false, &mut out).unwrap(), size(12));
    assert_eq!(resolve_size(Some(" 7 "), size(100), false, &mut out).unwrap(), size(7));
    assert_eq!(resolve_size(Some("1"), size(100), true, &mut out).unwrap(), size(1));
    assert!(out.is_empty());
}

#[rstest]
#[case("abc")]
#[case("-5")]
#[case("0")]
#[case("3.5")]
#[case("")]
fn given_invalid_size_when_resolving_leniently_then_prints_message_and_falls_back(
    #[case] raw: &str,
) {
    testing::init_test_setup();
    let mut out: Vec<u8> = Vec::new();

    let resolved = resolve_size(Some(raw), size(100), false, &mut out).unwrap();

    assert_eq!(resolved, size(100));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Invalid argument, expected a positive integer\n"
    );
}

#[rstest]
#[case("abc")]
#[case("-5")]
#[case("0")]
fn given_invalid_size_when_resolving_strictly_then_usage_error(#[case] raw: &str) {
    let mut out: Vec<u8> = Vec::new();

    let err = resolve_size(Some(raw), size(100), true, &mut out).unwrap_err();

    assert!(matches!(err, CliError::InvalidArgs(_)));
    assert!(err.to_string().contains(raw));
    assert_eq!(err.exit_code(), exitcode::USAGE);
    assert!(out.is_empty());
}

#[test]
fn given_non_numeric_size_when_generating_then_default_grid_written() {
    // Arrange
    testing::init_test_setup();
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_str().unwrap();
    let cli = Cli::try_parse_from(["gridgen", "-o", dir, "abc"]).unwrap();
    let container = ServiceContainer::new(Settings::default());
    let mut out: Vec<u8> = Vec::new();

    // Act
    let report = generate(&cli, &container, &mut out).unwrap();

    // Assert
    let expected = temp_dir.path().join("grid_100.satisfied");
    assert_eq!(report.path, expected);
    assert_eq!(report.summary.size, size(100));

    let content = fs::read_to_string(&expected).unwrap();
    assert_eq!(content.lines().count(), 1 + 10_000 + 19_800);
    assert_eq!(content.lines().next(), Some("#VERSION=0"));

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.starts_with(INVALID_SIZE_MESSAGE));
    assert!(printed.contains("  - 100 x 100 buildings"));
    assert!(printed.contains("grid_100.satisfied"));
}

#[test]
fn given_invalid_size_and_strict_when_generating_then_nothing_written() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_str().unwrap();
    let cli = Cli::try_parse_from(["gridgen", "--strict", "-o", dir, "abc"]).unwrap();
    let container = ServiceContainer::new(Settings::default());
    let mut out: Vec<u8> = Vec::new();

    let err = generate(&cli, &container, &mut out).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::USAGE);
    assert!(!temp_dir.path().join("grid_100.satisfied").exists());
}

#[test]
fn given_report_when_formatting_summary_then_fixed_lines() {
    let report = GridReport {
        path: PathBuf::from("grid_3.satisfied"),
        summary: GridSummary::for_size(size(3)),
        lines_written: 22,
    };

    assert_eq!(
        summary_lines(&report),
        vec![
            "  - 3 x 3 buildings",
            "  - 5 splitters",
            "  - 4 mergers",
            "  - 4 belts",
            "",
            "grid_3.satisfied",
        ]
    );
}

#[test]
fn given_errors_when_mapping_exit_codes_then_sysexits() {
    let config: CliError = ApplicationError::Config {
        message: "bad".into(),
    }
    .into();
    assert_eq!(config.exit_code(), exitcode::CONFIG);

    let not_dir: CliError = ApplicationError::NotADirectory(Path::new("/x").into()).into();
    assert_eq!(not_dir.exit_code(), exitcode::CANTCREAT);

    let io: CliError = InfraError::io(
        "flush stdout",
        io::Error::new(io::ErrorKind::BrokenPipe, "closed"),
    )
    .into();
    assert_eq!(io.exit_code(), exitcode::IOERR);
}

#[test]
fn given_create_failure_when_mapping_exit_code_then_cantcreat() {
    let path = Path::new("/ro/grid_3.satisfied");
    let err = Err::<(), _>(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        .with_path_context("create grid file", path)
        .unwrap_err();

    assert_eq!(CliError::from(err).exit_code(), exitcode::CANTCREAT);
}

#[test]
fn given_write_failure_when_mapping_exit_code_then_ioerr() {
    let path = Path::new("/full/grid_3.satisfied");
    let err = Err::<(), _>(io::Error::new(io::ErrorKind::StorageFull, "disk full"))
        .with_write_context("write grid file", path)
        .unwrap_err();

    assert_eq!(CliError::from(err).exit_code(), exitcode::IOERR);
}

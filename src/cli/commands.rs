//! Command dispatch: resolve the grid size, generate, report

use std::io::{self, Write};

use colored::Colorize;
use tracing::{debug, instrument};

use crate::application::services::GridReport;
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::GridSize;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Diagnostic printed when the size argument is not a positive integer.
pub const INVALID_SIZE_MESSAGE: &str = "Invalid argument, expected a positive integer";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    let container = ServiceContainer::new(settings);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    generate(cli, &container, &mut out)?;
    Ok(())
}

/// Resolve the size, write the grid and print the summary to `out`.
#[instrument(skip(container, out))]
pub fn generate<W: Write>(
    cli: &Cli,
    container: &ServiceContainer,
    out: &mut W,
) -> CliResult<GridReport> {
    let default = container.settings.grid_size()?;
    let size = resolve_size(cli.size.as_deref(), default, cli.strict, out)?;
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| container.settings.output_dir.clone());
    debug!("size: {}, output_dir: {:?}", size, output_dir);

    let report = container.grid_service().generate(size, &output_dir)?;
    write_summary(out, &report)?;
    Ok(report)
}

/// Turn the optional size argument into a grid size.
///
/// Absent means `default`. An invalid value writes [`INVALID_SIZE_MESSAGE`] to
/// `out` and falls back to `default`, or fails with a usage error when `strict`
/// is set.
pub fn resolve_size<W: Write>(
    raw: Option<&str>,
    default: GridSize,
    strict: bool,
    out: &mut W,
) -> CliResult<GridSize> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.parse::<GridSize>() {
        Ok(size) => Ok(size),
        Err(e) if strict => Err(CliError::InvalidArgs(e.to_string())),
        Err(e) => {
            debug!("{}", e);
            writeln!(out, "{}", INVALID_SIZE_MESSAGE).map_err(stdout_err)?;
            output::warning(&format!("using default size {}", default));
            Ok(default)
        }
    }
}

/// Console summary lines, after the header.
pub fn summary_lines(report: &GridReport) -> Vec<String> {
    let s = &report.summary;
    vec![
        format!("  - {} x {} buildings", s.size, s.size),
        format!("  - {} splitters", s.splitters),
        format!("  - {} mergers", s.mergers),
        format!("  - {} belts", s.belts),
        String::new(),
        report.path.display().to_string(),
    ]
}

fn write_summary<W: Write>(out: &mut W, report: &GridReport) -> CliResult<()> {
    writeln!(out, "{}", "Generated grid:".cyan().bold()).map_err(stdout_err)?;
    for line in summary_lines(report) {
        writeln!(out, "{}", line).map_err(stdout_err)?;
    }
    out.flush().map_err(stdout_err)?;
    Ok(())
}

fn stdout_err(e: io::Error) -> CliError {
    InfraError::io("write stdout", e).into()
}

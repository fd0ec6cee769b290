use std::io;
use std::path::Path;

use colored::Colorize;
use jsoncmp_diff::{compare, ComparisonResult};
use jsoncmp_load::{load_document, CompareConfig};
use jsoncmp_report::{CsvSink, JsonSink, ReportSink, TextSink};
use tracing::info;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format;
    match cli.command {
        Command::Run(args) => cmd_run(args, format).map(|_| ()),
        Command::Diff(args) => cmd_diff(args, format).map(|_| ()),
    }
}

fn cmd_run(args: RunArgs, format: OutputFormat) -> anyhow::Result<ComparisonResult> {
    let config = CompareConfig::load(&args.config)?;
    let result = compare_files(&config.left_path(), &config.right_path())?;
    print_result(&result, format)?;

    if config.output.write_csv && !args.no_csv {
        let csv_path = args.csv.unwrap_or(config.output.csv_path);
        write_csv(
            &csv_path,
            &config.input.file_name_1,
            &config.input.file_name_2,
            &result,
            format,
        )?;
    }
    Ok(result)
}

fn cmd_diff(args: DiffArgs, format: OutputFormat) -> anyhow::Result<ComparisonResult> {
    let result = compare_files(&args.left, &args.right)?;
    print_result(&result, format)?;

    if let Some(csv_path) = &args.csv {
        write_csv(
            csv_path,
            &args.left.display().to_string(),
            &args.right.display().to_string(),
            &result,
            format,
        )?;
    }
    Ok(result)
}

/// Decode both documents before comparing, so a bad input never reaches the engine.
fn compare_files(left: &Path, right: &Path) -> anyhow::Result<ComparisonResult> {
    let left_doc = load_document(left)?;
    let right_doc = load_document(right)?;
    let result = compare(&left_doc, &right_doc);
    info!(
        left = %left.display(),
        right = %right.display(),
        mismatches = result.mismatch_count,
        "compared documents"
    );
    Ok(result)
}

fn print_result(result: &ComparisonResult, format: OutputFormat) -> anyhow::Result<()> {
    let stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => TextSink::new(stdout).emit(result)?,
        OutputFormat::Json => JsonSink::new(stdout).emit(result)?,
    }
    Ok(())
}

fn write_csv(
    path: &Path,
    left_name: &str,
    right_name: &str,
    result: &ComparisonResult,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut sink = CsvSink::create(path, left_name, right_name)?;
    sink.emit(result)?;
    info!(path = %path.display(), rows = result.records.len(), "wrote csv report");

    if format == OutputFormat::Text {
        println!(
            "{} Wrote {} rows to {}",
            "✓".green().bold(),
            result.records.len(),
            path.display().to_string().bold()
        );
    }
    Ok(())
}

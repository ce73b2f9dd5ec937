use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::aggregate::CancelToken;
use crate::error::CountError;
use crate::loader::{ColumnSpec, DEFAULT_DATE_COLUMN, DEFAULT_LABEL_COLUMN};
use crate::models::DateRange;
use crate::report::{LogOptions, error_log};
use crate::runner::{self, CountOutcome, CountRequest};

#[derive(Parser)]
#[command(name = "testname-counter")]
#[command(version = "0.1.0")]
#[command(about = "Count test names in spreadsheet files by date range", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count the test names whose date falls inside the range
    Count(CountArgs),
}

#[derive(Args)]
pub struct CountArgs {
    /// First spreadsheet file (.xlsx, .xls or .ods)
    #[arg(long)]
    pub file: PathBuf,

    /// Optional second spreadsheet file, concatenated after the first
    #[arg(long)]
    pub second_file: Option<PathBuf>,

    /// Start of the date range (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub from: NaiveDate,

    /// End of the date range (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub to: NaiveDate,

    /// Header name of the date column
    #[arg(long, default_value = DEFAULT_DATE_COLUMN)]
    pub date_column: String,

    /// Header name of the test name column
    #[arg(long, default_value = DEFAULT_LABEL_COLUMN)]
    pub label_column: String,

    /// Skip the delimited text log
    #[arg(long)]
    pub no_delimited_log: bool,

    /// Also write the workbook (.xlsx) log
    #[arg(long)]
    pub workbook_log: bool,

    /// Directory the logs are written to
    #[arg(long, default_value = ".")]
    pub log_dir: PathBuf,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Count(args)) => run_count(&args),
        None => {
            println!("Use --help for usage information");
            ExitCode::SUCCESS
        }
    }
}

fn run_count(args: &CountArgs) -> ExitCode {
    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(args, err);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &CountArgs) -> anyhow::Result<()> {
    let request = build_request(args)?;

    // One run per invocation; the token is for library callers that drive
    // runner::spawn from an interactive surface.
    let cancel = CancelToken::new();
    let outcome = runner::run(&request, &cancel)?;

    print_outcome(&request.range, &outcome);
    Ok(())
}

fn build_request(args: &CountArgs) -> anyhow::Result<CountRequest> {
    fs::create_dir_all(&args.log_dir)
        .with_context(|| format!("Failed to create log directory {}", args.log_dir.display()))?;

    let mut files = vec![args.file.clone()];
    files.extend(args.second_file.clone());

    Ok(CountRequest {
        files,
        columns: ColumnSpec::new(args.date_column.clone(), args.label_column.clone()),
        range: DateRange::new(args.from, args.to),
        logs: LogOptions {
            delimited: !args.no_delimited_log,
            workbook: args.workbook_log,
            dir: args.log_dir.clone(),
        },
    })
}

fn print_outcome(range: &DateRange, outcome: &CountOutcome) {
    let summary = &outcome.summary;

    println!("Testname Count Results");
    println!("======================");
    println!("Period: {} to {}", range.start, range.end);
    println!("Total count: {}", summary.total_count);
    println!("Adm count: {}", summary.adm_count);
    println!("Adjusted total (excluding 'Adm'): {}", summary.adjusted_count);
    println!();
    println!("Elapsed time: {:.2} seconds", outcome.elapsed.as_secs_f64());
    for path in &outcome.log_paths {
        println!("Log written: {}", path.display());
    }
}

/// Pipeline errors carry their own user-facing message; anything outside
/// the taxonomy is recorded in error.log and reported generically.
fn report_failure(args: &CountArgs, err: anyhow::Error) {
    match err.downcast_ref::<CountError>() {
        Some(count_err) => eprintln!("Error: {}", count_err),
        None => {
            error_log::record(&args.log_dir, &err);
            eprintln!(
                "An unexpected error occurred; details were recorded in {}",
                args.log_dir.join(error_log::ERROR_LOG_FILENAME).display()
            );
        }
    }
}

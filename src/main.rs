//! tabstat CLI - summarize two columns of a delimited text file

use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tabstat::{
    Delimiter, Filter, Loader, RawTable, Statistics, Summary, TabstatError, filter_data,
};

/// Summarize delimited text data.
///
/// Detects the delimiter, skips preamble lines, finds the header row and
/// fits a least-squares line through two numeric columns.
#[derive(Parser, Debug)]
#[command(name = "tabstat")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file(s) to analyze
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Force a delimiter instead of detecting it
    #[arg(short = 'd', long, value_enum)]
    delimiter: Option<DelimiterArg>,

    /// X column: zero-based index or header name
    #[arg(short = 'x', long, default_value = "0")]
    x_column: String,

    /// Y column: zero-based index or header name
    #[arg(short = 'y', long, default_value = "1")]
    y_column: String,

    /// Lower x bound (needs --x-max to take effect)
    #[arg(long, allow_hyphen_values = true)]
    x_min: Option<f64>,

    /// Upper x bound (needs --x-min to take effect)
    #[arg(long, allow_hyphen_values = true)]
    x_max: Option<f64>,

    /// Only use this column to find the header row
    #[arg(long)]
    header_column: Option<usize>,

    /// Output format: text (default) or json
    #[arg(short = 'f', long, default_value = "text")]
    format: OutputFormat,

    /// Show per-axis descriptive statistics
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum DelimiterArg {
    Space,
    Tab,
    Comma,
}

impl From<DelimiterArg> for Delimiter {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Space => Delimiter::Space,
            DelimiterArg::Tab => Delimiter::Tab,
            DelimiterArg::Comma => Delimiter::Comma,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    file: String,
    metadata: &'a [String],
    x_column: &'a str,
    y_column: &'a str,
    statistics: &'a Statistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    x_summary: Option<Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y_summary: Option<Summary>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut exit_code = ExitCode::SUCCESS;

    for file in &args.files {
        if let Err(e) = analyze_file(file, &args) {
            eprintln!("Error processing {}: {}", file.display(), e);
            exit_code = ExitCode::FAILURE;
        }
    }

    exit_code
}

fn analyze_file(path: &Path, args: &Args) -> tabstat::Result<()> {
    let mut loader = Loader::new();
    if let Some(delimiter) = args.delimiter {
        loader.delimiter(delimiter.into());
    }
    if let Some(column) = args.header_column {
        loader.header_column(column);
    }

    let raw = loader.load_path(path)?;

    let x = resolve_column(&raw, &args.x_column)?;
    let y = resolve_column(&raw, &args.y_column)?;

    let points = raw.try_points(x, y)?;
    let points = filter_data(&Filter::new(args.x_min, args.x_max), &points);
    let statistics = Statistics::compute(&points).ok_or(TabstatError::InsufficientData {
        points: points.len(),
    })?;

    let (x_summary, y_summary) = if args.verbose {
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        (Summary::of(&xs), Summary::of(&ys))
    } else {
        (None, None)
    };

    let report = Report {
        file: path.display().to_string(),
        metadata: &raw.metadata,
        x_column: &raw.column_headers[x],
        y_column: &raw.column_headers[y],
        statistics: &statistics,
        x_summary,
        y_summary,
    };

    match args.format {
        OutputFormat::Text => print_text_output(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
    }

    Ok(())
}

/// Accept a header name or a zero-based index.
fn resolve_column(raw: &RawTable, column: &str) -> Result<usize, TabstatError> {
    let index = match raw.column_index(column) {
        Some(index) => index,
        None => column
            .parse::<usize>()
            .map_err(|_| TabstatError::UnknownColumn(column.to_string()))?,
    };
    if index >= raw.num_columns() {
        return Err(TabstatError::ColumnOutOfRange {
            index,
            width: raw.num_columns(),
        });
    }
    Ok(index)
}

fn print_text_output(report: &Report<'_>) {
    let stats = report.statistics;

    println!("File: {}", report.file);
    if !report.metadata.is_empty() {
        println!("  Metadata: {}", report.metadata.join(" "));
    }
    println!("  Columns: {} vs {}", report.x_column, report.y_column);
    println!("  Points: {}", stats.n);
    println!("  Fit: y = {:.6} + {:.6}x", stats.b, stats.m);
    match stats.r2 {
        Some(r2) => println!("  R²: {r2:.6}"),
        None => println!("  R²: undefined"),
    }
    println!("  x range: [{}, {}]", stats.x_min, stats.x_max);
    println!("  x mean: {:.6} (stdev {:.6})", stats.x_mean, stats.x_stdev);
    println!("  y mean: {:.6} (stdev {:.6})", stats.y_mean, stats.y_stdev);

    for (axis, summary) in [("x", &report.x_summary), ("y", &report.y_summary)] {
        if let Some(s) = summary {
            println!(
                "  {axis}: count={} min={} max={} median={:.6} population stdev={:.6}",
                s.count, s.min, s.max, s.median, s.stdev
            );
        }
    }

    println!();
}

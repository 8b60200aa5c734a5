use analytics::{AnalysisRequest, AnalyticsEngine};
use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::{init_tracing, load_settings, OutputFormat};
use core_types::{ChartShape, Dataset, MetricsReport};
use std::io::Read;
use std::path::{Path, PathBuf};

/// The main entry point for the numeric-insights application.
fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Load settings and start logging before anything else can fail
    let settings = load_settings(cli.config.as_deref())?;
    let _log_guard = init_tracing(&settings.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Analyze(args) => {
            let format = args.format.unwrap_or(settings.output.format);
            handle_analyze(args, format)
        }
        Commands::Charts => {
            handle_charts();
            Ok(())
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Derives analytical metrics (concentration, gaps, trend, volatility) from a tabular query result.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the settings file. Defaults to `config.toml`; a missing file is fine.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the metrics for a dataset and print them as JSON.
    Analyze(AnalyzeArgs),
    /// List the recognized chart tags and the analysis each one selects.
    Charts,
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// JSON file holding an array of row objects, or `-` for stdin.
    #[arg(long, short)]
    input: PathBuf,

    /// Column holding the category or date of each row (e.g., "uf").
    #[arg(long)]
    label: String,

    /// Column holding the numeric value of each row (e.g., "vendas").
    #[arg(long)]
    value: String,

    /// The chart the result will be rendered as (e.g., "horizontal_bar", "line").
    #[arg(long)]
    chart: String,

    /// Total of the value column over the whole filtered universe, when the input is only its top N rows.
    #[arg(long)]
    population_total: Option<f64>,

    /// Overrides `output.format` from the settings.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

/// Handles reading the dataset, running the engine and printing the report.
fn handle_analyze(args: AnalyzeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let dataset = read_dataset(&args.input)?;
    tracing::info!(
        "Analyzing {} rows from {} as '{}'",
        dataset.len(),
        args.input.display(),
        args.chart
    );

    let mut request = AnalysisRequest::new(dataset, args.label, args.value, args.chart);
    if let Some(total) = args.population_total {
        request = request.with_population_total(total);
    }

    let engine = AnalyticsEngine::new();
    let report = engine.run(&request)?;
    tracing::info!("Computed {} metrics", report.len());

    println!("{}", render(&report, format)?);
    Ok(())
}

fn read_dataset(input: &Path) -> anyhow::Result<Dataset> {
    let raw = if input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read dataset from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read dataset from {}", input.display()))?
    };

    serde_json::from_str(&raw).context("Dataset must be a JSON array of row objects")
}

fn render(report: &MetricsReport, format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(report)?,
        OutputFormat::Compact => serde_json::to_string(report)?,
    };
    Ok(rendered)
}

// ==============================================================================
// Charts Command Logic
// ==============================================================================

fn handle_charts() {
    for (tag, shape) in ChartShape::TAGS {
        println!("{:<22} {}", tag, shape);
    }
}

//! rv-report: route reports and summary statistics from GPS telemetry.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use routeviz_chart::{render_report, ReportConfig};
use routeviz_geo::{Coordinate, GlyphSet};
use routeviz_stats::{aggregate, load_csv, load_json, load_rows, StatsResult, TelemetryRow};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser)]
#[command(name = "rv-report")]
#[command(about = "Route reports and summary statistics from GPS telemetry")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a TOML config file (standard locations are searched if omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Input format
    #[arg(short, long, global = true, value_enum, default_value = "auto")]
    format: InputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an HTML report with summary statistics and charts
    Render {
        /// Path to the telemetry file
        input: PathBuf,

        /// Where to write the report
        #[arg(short, long, default_value = "report.html")]
        output: PathBuf,
    },

    /// Print summary statistics for a route
    Stats {
        /// Path to the telemetry file
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// Pick a loader from the file extension
    Auto,
    /// Comma-separated values with a header row
    Csv,
    /// A JSON array of row objects
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("rv_report=debug,routeviz_stats=debug,routeviz_chart=debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let result = match cli.command {
        Commands::Render { input, output } => {
            run_render(&input, &output, cli.format, cli.config.as_deref())
        }
        Commands::Stats { input, json } => {
            run_stats(&input, json, cli.format, cli.config.as_deref())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn run_render(
    input: &Path,
    output: &Path,
    format: InputFormat,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = config::load(config_path)?;
    let rows = load_input(input, format)?;
    let html = render_report(&rows, &config)
        .with_context(|| format!("Failed to render report for {}", input.display()))?;

    std::fs::write(output, &html)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;

    println!(
        "{} Report written to {} ({} rows)",
        "✓".green(),
        output.display(),
        rows.len()
    );
    Ok(())
}

fn run_stats(
    input: &Path,
    json: bool,
    format: InputFormat,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = config::load(config_path)?;
    let rows = load_input(input, format)?;
    let stats = aggregate(&rows)
        .with_context(|| format!("Failed to aggregate {}", input.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(&stats, &config);
    }
    Ok(())
}

fn load_input(path: &Path, format: InputFormat) -> Result<Vec<TelemetryRow>> {
    match format {
        InputFormat::Auto => load_rows(path),
        InputFormat::Csv => load_csv(path),
        InputFormat::Json => load_json(path),
    }
    .with_context(|| format!("Failed to load telemetry from {}", path.display()))
}

fn print_stats(stats: &StatsResult, config: &ReportConfig) {
    let lines = [
        (
            "Distance Travelled",
            format!("{:.1} m", stats.distance_travelled_meters),
        ),
        (
            "Fastest Speed",
            format!("{:.2} {}", stats.fastest_speed, config.speed_unit),
        ),
        (
            "Average Speed",
            format!("{:.2} {}", stats.average_speed, config.speed_unit),
        ),
        (
            "Highest Point",
            format!(
                "{} ({:.2} m)",
                terminal_point(&stats.highest_point),
                stats.max_altitude
            ),
        ),
        (
            "Average Altitude",
            format!("{:.2} m", stats.average_altitude),
        ),
        ("Central Point", terminal_point(&stats.central_point)),
    ];

    let width = lines.iter().map(|(key, _)| key.len() + 1).max().unwrap_or(0);
    for (key, value) in lines {
        let label = format!("{:<width$}", format!("{}:", key));
        println!("{} {}", label.bold(), value);
    }
}

// Unicode degree glyphs for the terminal, unlike the HTML entities in reports.
fn terminal_point(coordinate: &Coordinate) -> String {
    format!(
        "({}, {})",
        coordinate.formatted_latitude(GlyphSet::Unicode),
        coordinate.formatted_longitude(GlyphSet::Unicode)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_terminal_point_uses_unicode_glyphs() {
        let point = terminal_point(&Coordinate::new(53.387135, -1.464492));
        assert_eq!(point, "(53\u{00b0}23\u{2019}13.7\u{201d}N, 1\u{00b0}27\u{2019}52.2\u{201d}W)");
    }

    #[test]
    fn test_render_defaults_to_report_html() {
        let cli = Cli::parse_from(["rv-report", "render", "route.csv"]);
        match cli.command {
            Commands::Render { input, output } => {
                assert_eq!(input, PathBuf::from("route.csv"));
                assert_eq!(output, PathBuf::from("report.html"));
            }
            _ => panic!("expected render subcommand"),
        }
        assert_eq!(cli.format, InputFormat::Auto);
    }

    #[test]
    fn test_format_flag_parses() {
        let cli = Cli::parse_from(["rv-report", "--format", "json", "stats", "route.dat"]);
        assert_eq!(cli.format, InputFormat::Json);
    }
}

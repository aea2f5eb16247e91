//! papermap CLI - Command-line interface
//!
//! Places a JSON feed of paywalled-article reports on the map, nudging
//! reports with identical coordinates apart, and emits the placed points as
//! JSON. Logs go to stderr; stdout carries only the output points.

mod error;

use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use papermap::collector::VecCollector;
use papermap::feed;
use papermap::logging::init_logging;
use papermap::placement::{
    PlacementConfig, PlacementEngine, DEFAULT_DISPLACEMENT_RADIUS_M, DEFAULT_MAX_RETRIES,
};
use papermap::report::{PlacedPoint, Report};
use papermap::service::PlacementService;

use error::CliError;

/// Bundled sample feed of real-world report submissions.
const SAMPLE_FEED: &str = include_str!("../assets/sample_reports.json");

#[derive(Parser)]
#[command(name = "papermap")]
#[command(version)]
#[command(about = "Place paywalled-article reports on a map without overlaps", long_about = None)]
struct Args {
    /// JSON report feed to place; uses the bundled sample feed if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Maximum real-world displacement in metres for colliding reports
    #[arg(long, default_value_t = DEFAULT_DISPLACEMENT_RADIUS_M)]
    radius: f64,

    /// Maximum displacement attempts before a duplicate report is rejected
    #[arg(long, default_value_t = DEFAULT_MAX_RETRIES)]
    max_retries: u32,

    /// Seed for the displacement randomness (reproducible placements)
    #[arg(long)]
    seed: Option<u64>,

    /// Write placed points to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging("info") {
        CliError::LoggingInit(e.to_string()).exit();
    }

    let reports = match load_reports(args.input.as_deref()) {
        Ok(reports) => reports,
        Err(e) => e.exit(),
    };

    let config = PlacementConfig::default()
        .with_displacement_radius_m(args.radius)
        .with_max_retries(args.max_retries);
    let collector = VecCollector::new();
    let engine = match args.seed {
        Some(seed) => PlacementEngine::seeded(config, collector, seed),
        None => PlacementEngine::new(config, collector),
    };
    let service = PlacementService::new(engine);

    let total = reports.len();
    let mut rejected = 0usize;
    for report in reports {
        // Per-report failures are not fatal for the run; the service has
        // already logged the reason.
        if service.submit(report).is_err() {
            rejected += 1;
        }
    }

    let points = service.into_engine().into_collector().into_points();
    let displaced = points.iter().filter(|p| p.displaced()).count();
    info!(total, placed = points.len(), displaced, rejected, "feed placed");

    if let Err(e) = write_points(&points, args.output.as_deref()) {
        e.exit();
    }
}

/// Read the feed from a file, or fall back to the bundled sample data.
fn load_reports(input: Option<&Path>) -> Result<Vec<Report>, CliError> {
    match input {
        Some(path) => {
            let file = File::open(path).map_err(|error| CliError::FeedOpen {
                path: path.to_path_buf(),
                error,
            })?;
            feed::parse_reports(file).map_err(|error| CliError::FeedDecode {
                source: path.display().to_string(),
                error,
            })
        }
        None => feed::parse_reports_str(SAMPLE_FEED).map_err(|error| CliError::FeedDecode {
            source: "bundled sample feed".to_string(),
            error,
        }),
    }
}

/// Emit the placed points as pretty JSON, to a file or stdout.
fn write_points(points: &[PlacedPoint], output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|error| CliError::OutputWrite {
                path: path.to_path_buf(),
                error,
            })?;
            serde_json::to_writer_pretty(file, points).map_err(|error| CliError::OutputWrite {
                path: path.to_path_buf(),
                error: error.into(),
            })
        }
        None => {
            // to_string cannot fail for these types; the io path above is
            // the only real failure mode.
            match serde_json::to_string_pretty(points) {
                Ok(json) => {
                    println!("{}", json);
                    Ok(())
                }
                Err(error) => Err(CliError::OutputWrite {
                    path: PathBuf::from("<stdout>"),
                    error: error.into(),
                }),
            }
        }
    }
}

//! Storm Classification CLI
//!
//! Classifies storm observations from a JSON file against a monitoring
//! station registry and emits alert records.
//!
//! Usage:
//!   classify-storms --observations data/active_storms.json \
//!                   --stations data/stations.json \
//!                   --output alerts.json

use anyhow::{Context, Result};
use clap::Parser;
use cyclone_alerts::threat::StationStatus;
use cyclone_alerts::{alert, display, threat, AlertRecord, StormObservation};
use station_registry::{loader, network};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "classify-storms",
    about = "Classify storm observations into alert records"
)]
struct Args {
    /// Path to storm observations JSON file
    #[arg(short = 'i', long, default_value = "data/active_storms.json")]
    observations: PathBuf,

    /// Path to a station registry JSON file (builtin global network if omitted)
    #[arg(short, long)]
    stations: Option<PathBuf>,

    /// Write alert records as JSON to this file instead of rendering text
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let registry = match &args.stations {
        Some(path) => loader::load_stations(path)?,
        None => network::global_network(),
    };
    info!("Monitoring {} stations", registry.len());

    let file = File::open(&args.observations)
        .with_context(|| format!("opening {:?}", args.observations))?;
    let observations: Vec<StormObservation> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {:?}", args.observations))?;
    info!(
        "Loaded {} observations from {:?}",
        observations.len(),
        args.observations
    );

    let alerts: Vec<AlertRecord> = observations
        .iter()
        .filter_map(|obs| alert::generate_alert(Some(obs), &registry))
        .collect();

    if alerts.is_empty() {
        info!("No active tropical cyclones detected");
        return Ok(());
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {:?}", path))?;
            serde_json::to_writer_pretty(BufWriter::new(file), &alerts)?;
            info!("Wrote {} alerts to {:?}", alerts.len(), path);
        }
        None => {
            for record in &alerts {
                println!("{}", "=".repeat(50));
                println!("{}", display::format_alert(record));
                println!();
            }
        }
    }

    // Summary
    let summary = threat::summarize(&alerts, &registry);
    info!(
        "{} active storms ({} critical, {} danger, {} warning)",
        summary.total_storms,
        summary.critical_storms,
        summary.danger_storms,
        summary.warning_storms
    );
    info!(
        "{} of {} stations at risk",
        summary.stations_at_risk, summary.total_stations
    );

    for station in threat::assess_stations(&alerts, &registry) {
        if station.status != StationStatus::Clear {
            info!(
                "  {} ({}): {}",
                station.station_id,
                station.station_name,
                match station.status {
                    StationStatus::Danger => "danger",
                    StationStatus::Warning => "warning",
                    StationStatus::Clear => "clear",
                }
            );
        }
    }

    Ok(())
}

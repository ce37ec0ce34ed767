//! Station loading from JSON files

use crate::{RegistryError, Result, Station, StationRegistry};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Validate latitude is in valid range
fn is_valid_latitude(lat: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && lat.is_finite()
}

/// Validate longitude is in valid range
fn is_valid_longitude(lon: f64) -> bool {
    (-180.0..=180.0).contains(&lon) && lon.is_finite()
}

/// Sanitize ID to alphanumeric, dash, underscore only
fn sanitize_id(id: String) -> String {
    id.chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .take(32)
        .collect()
}

/// Raw station entry from JSON
#[derive(Debug, Deserialize)]
struct RawStation {
    id: Option<String>,
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    country: Option<String>,
}

/// Load a station registry from a JSON array of station objects.
///
/// Entries with missing or out-of-range coordinates are skipped and
/// counted; an input with no valid station at all is an error.
pub fn load_stations(path: impl AsRef<Path>) -> Result<StationRegistry> {
    let path = path.as_ref();
    info!("Loading stations from {:?}", path);

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let raw: Vec<RawStation> = serde_json::from_reader(reader)?;

    let mut stations = Vec::new();
    let mut skipped = 0;

    for (i, entry) in raw.into_iter().enumerate() {
        let lat = match entry.latitude {
            Some(l) if is_valid_latitude(l) => l,
            _ => {
                skipped += 1;
                continue;
            }
        };
        let lon = match entry.longitude {
            Some(l) if is_valid_longitude(l) => l,
            _ => {
                skipped += 1;
                continue;
            }
        };

        let id = sanitize_id(entry.id.unwrap_or_else(|| format!("st-{}", i)));
        if id.is_empty() {
            skipped += 1;
            continue;
        }
        let name = entry.name.unwrap_or_else(|| "Unknown".to_string());

        stations.push(Station {
            id,
            name,
            latitude: lat,
            longitude: lon,
            country: entry.country,
        });
    }

    info!(
        "Loaded {} stations ({} skipped for invalid coords)",
        stations.len(),
        skipped
    );

    if stations.is_empty() {
        return Err(RegistryError::NoStations);
    }

    Ok(StationRegistry::from_stations(stations))
}

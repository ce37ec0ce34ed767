//! Monitoring Station Registry
//!
//! Immutable registry of the named coastal stations used to contextualize
//! tropical cyclone positions:
//! - nearest-station lookup by WGS-84 geodesic distance
//! - builtin global monitoring network (60 stations)
//! - JSON loader with coordinate validation

use geo::{Distance, Geodesic, Point};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub mod loader;
pub mod network;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no valid stations in input")]
    NoStations,
}

pub type Result<T> = std::result::Result<T, RegistryError>;

/// A named geographic monitoring station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Registry of monitoring stations keyed by id.
///
/// Built once at startup and never mutated afterwards; share it by
/// reference (or behind `Arc`) from any number of classification calls.
/// Iteration is id-ascending, so nearest-lookup ties resolve to the
/// lexicographically smallest id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StationRegistry {
    stations: BTreeMap<String, Station>,
}

impl StationRegistry {
    pub fn new() -> Self {
        Self {
            stations: BTreeMap::new(),
        }
    }

    /// Build a registry from stations. Duplicate ids keep the last entry.
    pub fn from_stations(stations: impl IntoIterator<Item = Station>) -> Self {
        Self {
            stations: stations
                .into_iter()
                .map(|s| (s.id.clone(), s))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Station> {
        self.stations.get(id)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Stations in id-ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// The station nearest to a point, with its geodesic distance in km.
    ///
    /// Exact ties go to the lexicographically smaller id. `None` only for
    /// an empty registry.
    pub fn nearest(&self, latitude: f64, longitude: f64) -> Option<(&Station, f64)> {
        let mut best: Option<(&Station, f64)> = None;

        for station in self.stations.values() {
            let dist = geodesic_km(latitude, longitude, station.latitude, station.longitude);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((station, dist)),
            }
        }

        best
    }
}

/// WGS-84 geodesic distance between two points in km.
///
/// Ellipsoidal (Karney), not a spherical approximation: nearest-station
/// distances must line up with reference geodesic outputs.
pub fn geodesic_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let a = Point::new(lon1, lat1);
    let b = Point::new(lon2, lat2);
    Geodesic.distance(a, b) / 1000.0
}

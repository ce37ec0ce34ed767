//! Tropical Cyclone Alert Classification
//!
//! Turns storm observations into structured alert records:
//! - Saffir-Simpson category and alert severity from sustained wind
//! - nearest monitoring station by geodesic distance
//! - compass-converted movement vector
//! - triggered warnings (hurricane-force wind, station proximity)
//!
//! The classifier is pure and synchronous: observations arrive already
//! parsed from the upstream feed, and every absent input field stays
//! absent in the output record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod alert;
pub mod classify;
pub mod compass;
pub mod display;
pub mod threat;

pub use alert::generate_alert;
pub use classify::{Severity, StormCategory};
pub use compass::degrees_to_cardinal;

/// Knots to statute miles per hour.
pub const KNOTS_TO_MPH: f64 = 1.15078;

/// Sustained wind at or above this many knots is hurricane force.
pub const HURRICANE_FORCE_KT: f64 = 64.0;

/// Storms nearer than this many km to a station trigger a proximity warning.
pub const PROXIMITY_WARNING_KM: f64 = 200.0;

/// One snapshot of a tropical cyclone from the upstream feed.
///
/// Early or partial advisories can lack position, intensity, or movement;
/// those fields are optional rather than zero-filled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StormObservation {
    pub id: String,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Sustained wind in knots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed_kt: Option<f64>,
    /// Central pressure in millibars
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure_mb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement_speed_kt: Option<f64>,
    /// Movement bearing in degrees from north
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement_direction_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forecast: Vec<ForecastPoint>,
}

/// A forecast track position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Structured alert derived from one observation against the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRecord {
    pub storm_id: String,
    pub storm_name: String,
    pub issued_at: DateTime<Utc>,
    pub category: StormCategory,
    pub severity: Severity,
    pub position: StormPosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed_kt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed_mph: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure_mb: Option<f64>,
    pub movement: StormMovement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_station: Option<NearestStation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forecast: Vec<ForecastPoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<AlertWarning>,
}

/// Observed storm position, carried through from the observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StormPosition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub observed_at: DateTime<Utc>,
}

/// Storm movement vector with compass-converted bearing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StormMovement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_kt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction_deg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction_cardinal: Option<String>,
}

/// The monitoring station nearest to the storm's observed position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestStation {
    pub id: String,
    pub name: String,
    pub distance_km: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Kind of triggered warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    HighWind,
    ProximityWarning,
}

/// One triggered warning entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertWarning {
    pub kind: WarningKind,
    pub message: String,
}

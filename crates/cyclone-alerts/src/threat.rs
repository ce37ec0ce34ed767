//! Station threat assessment and alert-set statistics
//!
//! Rolls one classification cycle's alerts back onto the registry: which
//! stations are under threat, and how the active storms break down by
//! severity.

use crate::{AlertRecord, Severity, PROXIMITY_WARNING_KM};
use serde::{Deserialize, Serialize};
use station_registry::StationRegistry;

/// A danger-severity (or worse) storm inside this radius puts the
/// station at danger status.
pub const DANGER_RADIUS_KM: f64 = 100.0;

/// A warning-severity storm inside this radius puts the station at
/// warning status.
pub const WARNING_RADIUS_KM: f64 = 150.0;

/// Threat status of a monitoring station, ordered clear < warning < danger.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    Clear,
    Warning,
    Danger,
}

/// A station together with its assessed threat status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationThreat {
    pub station_id: String,
    pub station_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: StationStatus,
}

/// Assess every registry station against the active alert set.
///
/// A station is `danger` when a danger- or critical-severity storm has it
/// as nearest station within 100 km; `warning` when a warning-severity
/// storm is nearest within 150 km, or any storm is nearest within 200 km.
/// The highest status across storms wins.
pub fn assess_stations(
    alerts: &[AlertRecord],
    registry: &StationRegistry,
) -> Vec<StationThreat> {
    registry
        .iter()
        .map(|station| {
            let mut status = StationStatus::Clear;

            for alert in alerts {
                let Some(near) = &alert.nearest_station else {
                    continue;
                };
                if near.id != station.id {
                    continue;
                }

                let from_storm = if alert.severity >= Severity::Danger
                    && near.distance_km < DANGER_RADIUS_KM
                {
                    StationStatus::Danger
                } else if alert.severity == Severity::Warning
                    && near.distance_km < WARNING_RADIUS_KM
                {
                    StationStatus::Warning
                } else if near.distance_km < PROXIMITY_WARNING_KM {
                    StationStatus::Warning
                } else {
                    StationStatus::Clear
                };

                status = status.max(from_storm);
            }

            StationThreat {
                station_id: station.id.clone(),
                station_name: station.name.clone(),
                latitude: station.latitude,
                longitude: station.longitude,
                status,
            }
        })
        .collect()
}

/// Aggregate statistics over one classification cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertSummary {
    pub total_storms: usize,
    pub critical_storms: usize,
    pub danger_storms: usize,
    pub warning_storms: usize,
    pub total_stations: usize,
    pub stations_at_risk: usize,
}

/// Summarize the active alert set against the registry.
pub fn summarize(alerts: &[AlertRecord], registry: &StationRegistry) -> AlertSummary {
    let count = |level: Severity| alerts.iter().filter(|a| a.severity == level).count();

    let stations_at_risk = registry
        .iter()
        .filter(|station| {
            alerts.iter().any(|a| {
                a.nearest_station
                    .as_ref()
                    .is_some_and(|n| n.id == station.id && n.distance_km < PROXIMITY_WARNING_KM)
            })
        })
        .count();

    AlertSummary {
        total_storms: alerts.len(),
        critical_storms: count(Severity::Critical),
        danger_storms: count(Severity::Danger),
        warning_storms: count(Severity::Warning),
        total_stations: registry.len(),
        stations_at_risk,
    }
}

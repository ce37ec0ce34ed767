//! Alert generation
//!
//! Derives one `AlertRecord` from one storm observation against the
//! station registry: category and severity, unit conversion, nearest-
//! station association, and the warning rules.

use crate::classify::StormCategory;
use crate::compass::degrees_to_cardinal;
use crate::{
    AlertRecord, AlertWarning, NearestStation, StormMovement, StormObservation, StormPosition,
    WarningKind, HURRICANE_FORCE_KT, KNOTS_TO_MPH, PROXIMITY_WARNING_KM,
};
use chrono::Utc;
use station_registry::StationRegistry;

/// Generate the alert for one observation, or `None` when there is
/// nothing to alert on.
///
/// Absent inputs stay absent in the record: no coordinates means no
/// nearest station, no wind speed means an unknown category and no mph
/// figure. The two warning rules are evaluated independently, so a
/// record carries zero, one, or two warnings. Pure apart from the
/// `issued_at` stamp.
pub fn generate_alert(
    observation: Option<&StormObservation>,
    registry: &StationRegistry,
) -> Option<AlertRecord> {
    let obs = observation?;

    let category = StormCategory::from_wind_speed(obs.wind_speed_kt);
    let severity = category.severity();

    let nearest_station = match (obs.latitude, obs.longitude) {
        (Some(lat), Some(lon)) => {
            registry
                .nearest(lat, lon)
                .map(|(station, distance_km)| NearestStation {
                    id: station.id.clone(),
                    name: station.name.clone(),
                    distance_km,
                    latitude: station.latitude,
                    longitude: station.longitude,
                })
        }
        _ => None,
    };

    let wind_speed_mph = obs.wind_speed_kt.map(|kt| kt * KNOTS_TO_MPH);

    let mut warnings = Vec::new();
    if let Some(kt) = obs.wind_speed_kt {
        if kt >= HURRICANE_FORCE_KT {
            warnings.push(AlertWarning {
                kind: WarningKind::HighWind,
                message: format!(
                    "Dangerous winds of {} knots ({:.1} mph)",
                    kt,
                    kt * KNOTS_TO_MPH
                ),
            });
        }
    }
    if let Some(near) = &nearest_station {
        if near.distance_km < PROXIMITY_WARNING_KM {
            warnings.push(AlertWarning {
                kind: WarningKind::ProximityWarning,
                message: format!("Storm is {:.1} km from {}", near.distance_km, near.name),
            });
        }
    }

    Some(AlertRecord {
        storm_id: obs.id.clone(),
        storm_name: obs.name.clone(),
        issued_at: Utc::now(),
        category,
        severity,
        position: StormPosition {
            latitude: obs.latitude,
            longitude: obs.longitude,
            observed_at: obs.timestamp,
        },
        wind_speed_kt: obs.wind_speed_kt,
        wind_speed_mph,
        pressure_mb: obs.pressure_mb,
        movement: StormMovement {
            speed_kt: obs.movement_speed_kt,
            direction_deg: obs.movement_direction_deg,
            direction_cardinal: degrees_to_cardinal(obs.movement_direction_deg)
                .map(str::to_owned),
        },
        nearest_station,
        forecast: obs.forecast.clone(),
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ForecastPoint, Severity};
    use chrono::TimeZone;
    use station_registry::{network, Station};

    fn observation(
        lat: Option<f64>,
        lon: Option<f64>,
        wind_kt: Option<f64>,
    ) -> StormObservation {
        StormObservation {
            id: "al062026".to_string(),
            name: "FRANKLIN".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
            latitude: lat,
            longitude: lon,
            wind_speed_kt: wind_kt,
            pressure_mb: Some(955.0),
            movement_speed_kt: Some(12.0),
            movement_direction_deg: Some(292.5),
            forecast: vec![],
        }
    }

    /// Registry with one station at the given point plus a distant decoy.
    fn registry_near(lat: f64, lon: f64) -> StationRegistry {
        StationRegistry::from_stations(vec![
            Station {
                id: "NEAR".to_string(),
                name: "Near Station".to_string(),
                latitude: lat,
                longitude: lon,
                country: None,
            },
            Station {
                id: "FAR".to_string(),
                name: "Far Station".to_string(),
                latitude: -40.0,
                longitude: 170.0,
                country: None,
            },
        ])
    }

    #[test]
    fn test_absent_observation_yields_no_alert() {
        let registry = network::global_network();
        assert!(generate_alert(None, &registry).is_none());
    }

    #[test]
    fn test_both_warnings_fire_independently() {
        // 70 kt hurricane ~150 km from the station: both rules trigger.
        // 1.35 deg of latitude is ~149 km.
        let registry = registry_near(25.0, -75.0);
        let obs = observation(Some(26.35), Some(-75.0), Some(70.0));
        let alert = generate_alert(Some(&obs), &registry).unwrap();

        assert_eq!(alert.warnings.len(), 2);
        assert_eq!(alert.warnings[0].kind, WarningKind::HighWind);
        assert_eq!(alert.warnings[1].kind, WarningKind::ProximityWarning);
        let near = alert.nearest_station.unwrap();
        assert_eq!(near.id, "NEAR");
        assert!(near.distance_km < PROXIMITY_WARNING_KM);
    }

    #[test]
    fn test_high_wind_only_when_distant() {
        // 70 kt but ~500 km away: only the wind rule triggers.
        let registry = registry_near(25.0, -75.0);
        let obs = observation(Some(29.5), Some(-75.0), Some(70.0));
        let alert = generate_alert(Some(&obs), &registry).unwrap();

        assert_eq!(alert.warnings.len(), 1);
        assert_eq!(alert.warnings[0].kind, WarningKind::HighWind);
    }

    #[test]
    fn test_proximity_only_when_weak() {
        // 20 kt depression ~50 km out: only the proximity rule triggers.
        let registry = registry_near(25.0, -75.0);
        let obs = observation(Some(25.45), Some(-75.0), Some(20.0));
        let alert = generate_alert(Some(&obs), &registry).unwrap();

        assert_eq!(alert.warnings.len(), 1);
        assert_eq!(alert.warnings[0].kind, WarningKind::ProximityWarning);
    }

    #[test]
    fn test_absent_fields_propagate() {
        let registry = network::global_network();
        let obs = StormObservation {
            id: "al992026".to_string(),
            name: "INVEST".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
            latitude: None,
            longitude: None,
            wind_speed_kt: None,
            pressure_mb: None,
            movement_speed_kt: None,
            movement_direction_deg: None,
            forecast: vec![],
        };
        let alert = generate_alert(Some(&obs), &registry).unwrap();

        assert_eq!(alert.category, StormCategory::Unknown);
        assert_eq!(alert.severity, Severity::Info);
        assert!(alert.nearest_station.is_none());
        assert!(alert.wind_speed_mph.is_none());
        assert!(alert.pressure_mb.is_none());
        assert!(alert.movement.direction_cardinal.is_none());
        assert!(alert.warnings.is_empty());
    }

    #[test]
    fn test_missing_latitude_alone_drops_nearest() {
        let registry = network::global_network();
        let obs = observation(None, Some(-75.0), Some(50.0));
        let alert = generate_alert(Some(&obs), &registry).unwrap();
        assert!(alert.nearest_station.is_none());
    }

    #[test]
    fn test_mph_conversion_round_trips() {
        let registry = network::global_network();
        let obs = observation(Some(25.5), Some(-75.0), Some(105.0));
        let alert = generate_alert(Some(&obs), &registry).unwrap();

        let mph = alert.wind_speed_mph.unwrap();
        assert!((mph - 105.0 * KNOTS_TO_MPH).abs() < 1e-9);
        assert!((mph / KNOTS_TO_MPH - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_forecast_passes_through_in_order() {
        let registry = network::global_network();
        let mut obs = observation(Some(25.5), Some(-75.0), Some(105.0));
        obs.forecast = vec![
            ForecastPoint {
                timestamp: Utc.with_ymd_and_hms(2026, 8, 2, 0, 0, 0).unwrap(),
                latitude: 26.0,
                longitude: -76.0,
            },
            ForecastPoint {
                timestamp: Utc.with_ymd_and_hms(2026, 8, 2, 12, 0, 0).unwrap(),
                latitude: 27.0,
                longitude: -77.5,
            },
        ];

        let alert = generate_alert(Some(&obs), &registry).unwrap();
        assert_eq!(alert.forecast, obs.forecast);
    }

    #[test]
    fn test_end_to_end_atlantic_scenario() {
        // 105 kt storm at 25.5N 75.0W moving WNW, against the builtin
        // network: Category 3 / danger, nearest station Miami, which is
        // far enough away that only the wind warning fires.
        let registry = network::global_network();
        let obs = observation(Some(25.5), Some(-75.0), Some(105.0));
        let alert = generate_alert(Some(&obs), &registry).unwrap();

        assert_eq!(alert.category, StormCategory::Category3);
        assert_eq!(alert.severity, Severity::Danger);
        assert_eq!(alert.movement.direction_cardinal.as_deref(), Some("WNW"));

        let near = alert.nearest_station.unwrap();
        assert_eq!(near.id, "MIA");
        assert!(
            near.distance_km > PROXIMITY_WARNING_KM && near.distance_km < 600.0,
            "Miami distance: {}",
            near.distance_km
        );

        assert_eq!(alert.warnings.len(), 1);
        assert_eq!(alert.warnings[0].kind, WarningKind::HighWind);
    }
}

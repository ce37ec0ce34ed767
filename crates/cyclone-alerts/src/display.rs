//! Human-readable alert rendering

use crate::{AlertRecord, Severity};

fn fmt_coord(value: Option<f64>, positive: char, negative: char) -> String {
    match value {
        Some(v) if v < 0.0 => format!("{:.2}{}", -v, negative),
        Some(v) => format!("{:.2}{}", v, positive),
        None => "unknown".to_string(),
    }
}

fn fmt_knots(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.0} kt", v),
        None => "unknown".to_string(),
    }
}

/// Render one alert as a multi-line text block.
///
/// Missing fields render as "unknown"; the formatter never fabricates
/// numbers the classifier did not produce.
pub fn format_alert(alert: &AlertRecord) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} ALERT: {} [{}]",
        alert.category.display_name().to_uppercase(),
        alert.storm_name,
        alert.severity.label()
    ));
    lines.push(String::new());

    lines.push(format!(
        "Position: {}, {} (as of {})",
        fmt_coord(alert.position.latitude, 'N', 'S'),
        fmt_coord(alert.position.longitude, 'E', 'W'),
        alert.position.observed_at.format("%Y-%m-%d %H:%MZ")
    ));

    let mph = match alert.wind_speed_mph {
        Some(v) => format!(" ({:.1} mph)", v),
        None => String::new(),
    };
    lines.push(format!("Winds: {}{}", fmt_knots(alert.wind_speed_kt), mph));

    if let Some(p) = alert.pressure_mb {
        lines.push(format!("Pressure: {:.0} mb", p));
    }

    lines.push(format!(
        "Movement: {} toward {}",
        fmt_knots(alert.movement.speed_kt),
        alert
            .movement
            .direction_cardinal
            .as_deref()
            .unwrap_or("unknown")
    ));

    match &alert.nearest_station {
        Some(near) => lines.push(format!(
            "Nearest station: {} ({:.1} km away)",
            near.name, near.distance_km
        )),
        None => lines.push("Nearest station: unknown".to_string()),
    }

    if !alert.warnings.is_empty() {
        lines.push(String::new());
        lines.push("WARNINGS:".to_string());
        for warning in &alert.warnings {
            lines.push(format!("  - {}", warning.message));
        }
    }

    lines.push(String::new());
    match alert.severity {
        Severity::Critical => {
            lines.push("IMMEDIATE ACTION REQUIRED:".to_string());
            lines.push("  - Follow evacuation orders if issued".to_string());
            lines.push("  - Move to a safe location immediately".to_string());
            lines.push("  - Stay away from windows and exterior walls".to_string());
            lines.push("  - Have emergency supplies ready".to_string());
        }
        Severity::Danger | Severity::Warning => {
            lines.push("PREPARE NOW:".to_string());
            lines.push("  - Review your emergency plan".to_string());
            lines.push("  - Secure outdoor items".to_string());
            lines.push("  - Prepare emergency supplies".to_string());
            lines.push("  - Stay updated on storm progress".to_string());
        }
        Severity::Info => {
            lines.push("ADVISORY:".to_string());
            lines.push("  - Monitor the storm's progress".to_string());
            lines.push("  - Stay informed with official updates".to_string());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_alert, StormObservation};
    use chrono::{TimeZone, Utc};
    use station_registry::network;

    fn sample_alert(wind_kt: Option<f64>) -> AlertRecord {
        let obs = StormObservation {
            id: "al062026".to_string(),
            name: "FRANKLIN".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
            latitude: Some(25.5),
            longitude: Some(-75.0),
            wind_speed_kt: wind_kt,
            pressure_mb: Some(955.0),
            movement_speed_kt: Some(12.0),
            movement_direction_deg: Some(292.5),
            forecast: vec![],
        };
        generate_alert(Some(&obs), &network::global_network()).unwrap()
    }

    #[test]
    fn test_major_hurricane_rendering() {
        let text = format_alert(&sample_alert(Some(105.0)));

        assert!(text.starts_with("CATEGORY 3 ALERT: FRANKLIN [danger]"));
        assert!(text.contains("Position: 25.50N, 75.00W"));
        assert!(text.contains("Winds: 105 kt (120.8 mph)"));
        assert!(text.contains("Movement: 12 kt toward WNW"));
        assert!(text.contains("Nearest station: Miami"));
        assert!(text.contains("Dangerous winds of 105 knots"));
        assert!(text.contains("PREPARE NOW:"));
    }

    #[test]
    fn test_unknown_fields_render_as_unknown() {
        let text = format_alert(&sample_alert(None));

        assert!(text.starts_with("UNKNOWN ALERT: FRANKLIN [info]"));
        assert!(text.contains("Winds: unknown"));
        assert!(!text.contains("WARNINGS:"));
        assert!(text.contains("ADVISORY:"));
    }
}

//! Compass conversion for storm movement bearings

/// The 16 compass points, clockwise from north.
pub const CARDINAL_DIRECTIONS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Convert a bearing in degrees to one of 16 compass labels.
///
/// Sectors are 22.5 deg wide starting at north: index = trunc((deg mod
/// 360) / 22.5). The truncation is contractual: boundary bearings stay
/// in the lower sector (11.25 -> "N", 22.5 -> "NNE"). Negative bearings
/// wrap via the Euclidean remainder.
pub fn degrees_to_cardinal(degrees: Option<f64>) -> Option<&'static str> {
    let deg = degrees?;
    let index = (deg.rem_euclid(360.0) / 22.5) as usize % 16;
    Some(CARDINAL_DIRECTIONS[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_north_and_wraparound() {
        assert_eq!(degrees_to_cardinal(Some(0.0)), Some("N"));
        assert_eq!(degrees_to_cardinal(Some(360.0)), Some("N"));
        assert_eq!(degrees_to_cardinal(Some(720.0)), Some("N"));
    }

    #[test]
    fn test_boundary_truncates_down() {
        // 11.25 sits on the N/NNE boundary; truncation keeps it in N.
        assert_eq!(degrees_to_cardinal(Some(11.25)), Some("N"));
        // The next sector starts exactly at 22.5.
        assert_eq!(degrees_to_cardinal(Some(22.5)), Some("NNE"));
        assert_eq!(degrees_to_cardinal(Some(22.49)), Some("N"));
    }

    #[test]
    fn test_all_sixteen_sector_centers() {
        for (i, label) in CARDINAL_DIRECTIONS.iter().enumerate() {
            // Center of each sector under the start-at-north layout.
            let deg = i as f64 * 22.5 + 11.0;
            assert_eq!(degrees_to_cardinal(Some(deg)), Some(*label));
        }
    }

    #[test]
    fn test_named_bearings() {
        assert_eq!(degrees_to_cardinal(Some(90.0)), Some("E"));
        assert_eq!(degrees_to_cardinal(Some(180.0)), Some("S"));
        assert_eq!(degrees_to_cardinal(Some(270.0)), Some("W"));
        assert_eq!(degrees_to_cardinal(Some(292.5)), Some("WNW"));
    }

    #[test]
    fn test_negative_bearing_wraps() {
        // -10 mod 360 = 350, which is the NNW sector.
        assert_eq!(degrees_to_cardinal(Some(-10.0)), Some("NNW"));
    }

    #[test]
    fn test_absent_bearing() {
        assert_eq!(degrees_to_cardinal(None), None);
    }
}

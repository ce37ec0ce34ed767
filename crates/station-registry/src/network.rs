//! Builtin global monitoring network
//!
//! The worldwide coastal station table compiled in as the default
//! registry: major port and population centers across the Atlantic, Gulf,
//! Indian Ocean, and western Pacific cyclone basins.

use crate::{Station, StationRegistry};

/// The builtin 60-station global monitoring network.
pub fn global_network() -> StationRegistry {
    let entries: &[(&str, &str, f64, f64, &str)] = &[
        // United States
        ("MIA", "Miami", 25.7617, -80.1918, "USA"),
        ("TPA", "Tampa", 27.9506, -82.4572, "USA"),
        ("JAX", "Jacksonville", 30.3322, -81.6557, "USA"),
        ("MSY", "New Orleans", 29.9511, -90.0715, "USA"),
        ("HOU", "Houston", 29.7604, -95.3698, "USA"),
        ("CHS", "Charleston", 32.7765, -79.9311, "USA"),
        ("ORF", "Norfolk", 36.8508, -76.2859, "USA"),
        ("NYC", "New York", 40.7128, -74.0060, "USA"),
        ("BOS", "Boston", 42.3601, -71.0589, "USA"),
        ("SJU", "San Juan", 18.4655, -66.1057, "USA"),
        // India
        ("MUM", "Mumbai", 19.0760, 72.8777, "India"),
        ("CHE", "Chennai", 13.0827, 80.2707, "India"),
        ("KOL", "Kolkata", 22.5726, 88.3639, "India"),
        ("COK", "Kochi", 9.9312, 76.2673, "India"),
        ("VIS", "Visakhapatnam", 17.6868, 83.2185, "India"),
        ("GOA", "Goa", 15.2993, 74.1240, "India"),
        ("PBL", "Port Blair", 11.6234, 92.7265, "India"),
        ("KAN", "Kandla", 23.0333, 70.2167, "India"),
        ("TUT", "Tuticorin", 8.8047, 78.1348, "India"),
        ("PAR", "Paradip", 20.2648, 86.6109, "India"),
        ("MAN", "Mangalore", 12.9141, 74.8560, "India"),
        ("KAK", "Kakinada", 16.9891, 82.2475, "India"),
        // China
        ("SHA", "Shanghai", 31.2304, 121.4737, "China"),
        ("HKG", "Hong Kong", 22.3193, 114.1694, "China"),
        ("GUA", "Guangzhou", 23.1291, 113.2644, "China"),
        ("SHE", "Shenzhen", 22.5431, 114.0579, "China"),
        ("TIA", "Tianjin", 39.3434, 117.3616, "China"),
        ("DAL", "Dalian", 38.9140, 121.6147, "China"),
        ("QIN", "Qingdao", 36.0986, 120.3719, "China"),
        ("XIA", "Xiamen", 24.4798, 118.0819, "China"),
        // Japan
        ("TOK", "Tokyo", 35.6762, 139.6503, "Japan"),
        ("OSA", "Osaka", 34.6937, 135.5023, "Japan"),
        ("YOK", "Yokohama", 35.4437, 139.6380, "Japan"),
        ("KOB", "Kobe", 34.6901, 135.1956, "Japan"),
        ("NAG", "Nagoya", 35.1815, 136.9066, "Japan"),
        ("FUK", "Fukuoka", 33.5904, 130.4017, "Japan"),
        // Southeast Asia
        ("SIN", "Singapore", 1.3521, 103.8198, "Singapore"),
        ("BAN", "Bangkok", 13.7563, 100.5018, "Thailand"),
        ("MNL", "Manila", 14.5995, 120.9842, "Philippines"),
        ("JAK", "Jakarta", -6.2088, 106.8456, "Indonesia"),
        ("KUL", "Kuala Lumpur", 3.1390, 101.6869, "Malaysia"),
        ("HAN", "Hanoi", 21.0285, 105.8542, "Vietnam"),
        ("HCM", "Ho Chi Minh City", 10.8231, 106.6297, "Vietnam"),
        ("CEB", "Cebu", 10.3157, 123.8854, "Philippines"),
        // Europe
        ("LON", "London", 51.5074, -0.1278, "UK"),
        ("AMS", "Amsterdam", 52.3676, 4.9041, "Netherlands"),
        ("HAM", "Hamburg", 53.5511, 9.9937, "Germany"),
        ("MAR", "Marseille", 43.2965, 5.3698, "France"),
        ("BAR", "Barcelona", 41.3851, 2.1734, "Spain"),
        ("ROM", "Rome", 41.9028, 12.4964, "Italy"),
        ("ATH", "Athens", 37.9838, 23.7275, "Greece"),
        ("IST", "Istanbul", 41.0082, 28.9784, "Turkey"),
        ("LIS", "Lisbon", 38.7223, -9.1393, "Portugal"),
        ("STO", "Stockholm", 59.3293, 18.0686, "Sweden"),
        // Middle East
        ("DUB", "Dubai", 25.2048, 55.2708, "UAE"),
        ("DOH", "Doha", 25.2854, 51.5310, "Qatar"),
        ("KUW", "Kuwait City", 29.3759, 47.9774, "Kuwait"),
        ("MUS", "Muscat", 23.5859, 58.4059, "Oman"),
        ("JED", "Jeddah", 21.4858, 39.1925, "Saudi Arabia"),
        ("DAM", "Dammam", 26.4207, 50.0888, "Saudi Arabia"),
    ];

    StationRegistry::from_stations(entries.iter().map(|&(id, name, lat, lon, country)| {
        Station {
            id: id.to_string(),
            name: name.to_string(),
            latitude: lat,
            longitude: lon,
            country: Some(country.to_string()),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_network_size() {
        let registry = global_network();
        assert_eq!(registry.len(), 60);
    }

    #[test]
    fn test_miami_entry() {
        let registry = global_network();
        let mia = registry.get("MIA").expect("MIA should be present");
        assert_eq!(mia.name, "Miami");
        assert!((mia.latitude - 25.7617).abs() < 1e-6);
        assert!((mia.longitude + 80.1918).abs() < 1e-6);
        assert_eq!(mia.country.as_deref(), Some("USA"));
    }

    #[test]
    fn test_nearest_to_florida_strait_is_miami() {
        let registry = global_network();
        let (station, dist) = registry.nearest(25.0, -80.0).unwrap();
        assert_eq!(station.id, "MIA");
        assert!(dist < 100.0, "Miami should be under 100 km away: {}", dist);
    }
}

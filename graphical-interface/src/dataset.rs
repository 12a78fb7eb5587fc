use std::collections::BTreeMap;

use crate::{
    errors::MapError,
    types::{Airport, AirportRecord},
};

/// Airport reference data shipped with the binary, keyed by ICAO identifier.
pub const BUNDLED_AIRPORTS: &str = include_str!("../assets/airports.json");

/// Parses a mapping-of-records airport dataset, ordered by identifier.
pub fn load_airports(json: &str) -> Result<Vec<Airport>, MapError> {
    let records: BTreeMap<String, AirportRecord> = serde_json::from_str(json)?;
    Ok(records.into_values().map(Airport::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_loads() {
        let airports = load_airports(BUNDLED_AIRPORTS).unwrap();
        assert!(airports.len() > 20);

        let antalya = airports.iter().find(|a| a.iata == "AYT").unwrap();
        assert_eq!(antalya.icao, "LTAI");
        assert!((antalya.position.lon() - 30.8005).abs() < 1e-3);

        let dusseldorf = airports.iter().find(|a| a.iata == "DUS").unwrap();
        assert!((dusseldorf.position.lat() - 51.2895).abs() < 1e-3);
    }

    #[test]
    fn test_records_are_ordered_by_key_and_codes_optional() {
        let json = r#"{
            "ZZZZ": {"name": "Last", "iata": "LST", "icao": "ZZZZ", "lat": 1.0, "lon": 2.0},
            "AAAA": {"name": "Strip", "icao": "AAAA", "lat": 3.0, "lon": 4.0}
        }"#;

        let airports = load_airports(json).unwrap();
        assert_eq!(airports[0].name, "Strip");
        assert_eq!(airports[0].code(), "AAAA");
        assert_eq!(airports[1].code(), "LST");
    }

    #[test]
    fn test_invalid_dataset_is_an_error() {
        let result = load_airports(r#"{"EDDL": {"name": "Dusseldorf"}}"#);
        assert!(matches!(result, Err(MapError::AirportData(_))));
    }
}

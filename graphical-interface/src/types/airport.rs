use serde::Deserialize;
use walkers::Position;

/// Represents an airport with its name, IATA and ICAO codes, and geographical position.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub name: String,
    pub iata: String,
    pub icao: String,
    pub position: Position,
}

impl Airport {
    pub fn new(name: String, iata: String, icao: String, position: Position) -> Self {
        Self {
            name,
            iata,
            icao,
            position,
        }
    }

    /// Code shown to the user: IATA when the airport has one, ICAO otherwise.
    pub fn code(&self) -> &str {
        if self.iata.is_empty() {
            &self.icao
        } else {
            &self.iata
        }
    }
}

/// One entry of the bundled dataset, keyed by identifier in the file.
#[derive(Debug, Deserialize)]
pub struct AirportRecord {
    pub name: String,
    #[serde(default)]
    pub iata: String,
    #[serde(default)]
    pub icao: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<AirportRecord> for Airport {
    fn from(record: AirportRecord) -> Self {
        Airport::new(
            record.name,
            record.iata,
            record.icao,
            Position::from_lat_lon(record.lat, record.lon),
        )
    }
}

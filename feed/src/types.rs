use serde::Deserialize;

/// Body of one aircraft-state poll.
///
/// The collection is required: a body without it is treated as malformed.
#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    #[serde(alias = "aircraft")]
    pub ac: Vec<AircraftState>,
}

/// One raw entry of the polled collection, as the endpoint reports it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AircraftState {
    pub flight: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub track: Option<f64>,
}

/// An aircraft ready to be drawn: positioned, identified and oriented.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftSample {
    pub lon: f64,
    pub lat: f64,
    /// Degrees clockwise from north.
    pub heading: f32,
    pub flight: String,
}

impl AircraftSample {
    /// Keeps the state only if both coordinates are non-zero and a flight
    /// identifier is present. A missing, zero or NaN track becomes heading 0.
    pub fn from_state(state: AircraftState) -> Option<Self> {
        let lat = state.lat.filter(|lat| *lat != 0.0)?;
        let lon = state.lon.filter(|lon| *lon != 0.0)?;
        let flight = state.flight?;
        let heading = state
            .track
            .filter(|track| *track != 0.0 && !track.is_nan())
            .unwrap_or(0.0) as f32;

        Some(Self {
            lon,
            lat,
            heading,
            flight: flight.trim_end().to_string(),
        })
    }
}

/// Filters and reshapes one poll into the point set to publish.
pub fn samples_from_states(states: Vec<AircraftState>) -> Vec<AircraftSample> {
    states
        .into_iter()
        .filter_map(AircraftSample::from_state)
        .collect()
}

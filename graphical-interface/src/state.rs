use std::sync::Arc;

use feed::AircraftSample;

use crate::{
    sources::LiveSource,
    types::{Airport, CountryShape},
};

/// Tracks the airports, planes and country shapes to display.
pub struct ViewState {
    pub airports: Vec<Airport>,
    pub planes: Arc<Vec<AircraftSample>>,
    pub countries: Arc<Vec<CountryShape>>,
}

impl ViewState {
    pub fn new(airports: Vec<Airport>) -> Self {
        Self {
            airports,
            planes: Arc::new(Vec::new()),
            countries: Arc::new(Vec::new()),
        }
    }

    pub fn update_planes(&mut self, source: &LiveSource<AircraftSample>) {
        self.planes = source.snapshot();
    }

    pub fn update_countries(&mut self, source: &LiveSource<CountryShape>) {
        self.countries = source.snapshot();
    }
}

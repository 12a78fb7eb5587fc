use std::{sync::Arc, thread};

use geo::{Geometry, MultiPolygon, Polygon};
use geojson::{feature::Id, Feature, GeoJson};
use logger::{Color, Logger};
use serde_json::Value;

use crate::{
    errors::MapError,
    sources::LiveSource,
    types::{CountryShape, FilledPolygon},
};

/// Property names that may carry the ISO alpha-3 code, in lookup order.
const CODE_PROPERTIES: [&str; 3] = ["iso_3166_1_alpha_3", "ISO_A3", "iso_a3"];

/// Reads every Polygon/MultiPolygon feature of a boundary collection.
///
/// Features without a code are skipped. Other geometry kinds yield a shape
/// with nothing to fill.
pub fn parse_countries(geojson: GeoJson) -> Vec<CountryShape> {
    let features = match geojson {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(_) => Vec::new(),
    };

    features.into_iter().filter_map(country_shape).collect()
}

fn country_shape(feature: Feature) -> Option<CountryShape> {
    let code = country_code(&feature)?;
    let disputed = is_disputed(feature.property("disputed"));
    let worldview = worldviews(feature.property("worldview"));

    let polygons = boundaries(feature)
        .iter()
        .filter(|polygon| is_closed_area(polygon))
        .map(FilledPolygon::from_polygon)
        .collect();

    Some(CountryShape {
        code,
        disputed,
        worldview,
        polygons,
    })
}

fn country_code(feature: &Feature) -> Option<String> {
    let id = match &feature.id {
        Some(Id::String(id)) => Some(id.as_str()),
        _ => None,
    };

    CODE_PROPERTIES
        .iter()
        .filter_map(|key| feature.property(*key).and_then(Value::as_str))
        .chain(id)
        .find(|code| !code.is_empty() && *code != "-99")
        .map(String::from)
}

fn is_disputed(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(disputed)) => *disputed,
        Some(Value::String(disputed)) => disputed == "true",
        _ => false,
    }
}

fn worldviews(value: Option<&Value>) -> Vec<String> {
    match value.and_then(Value::as_str) {
        Some(list) => list.split(',').map(|w| w.trim().to_string()).collect(),
        None => vec!["all".to_string()],
    }
}

fn boundaries(feature: Feature) -> MultiPolygon<f64> {
    let Some(geometry) = feature.geometry else {
        return MultiPolygon(Vec::new());
    };

    match Geometry::<f64>::try_from(geometry.value) {
        Ok(Geometry::Polygon(polygon)) => polygon.into(),
        Ok(Geometry::MultiPolygon(multi)) => multi,
        _ => MultiPolygon(Vec::new()),
    }
}

/// Every ring needs at least three distinct points plus the closing one.
fn is_closed_area(polygon: &Polygon<f64>) -> bool {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .all(|ring| ring.0.len() >= 4)
}

/// Downloads and parses the country-boundary collection at `url`.
pub fn fetch_countries(url: &str) -> Result<Vec<CountryShape>, MapError> {
    let response = ureq::get(url)
        .call()
        .map_err(|e| MapError::Countries(e.to_string()))?;
    let geojson: GeoJson = serde_json::from_reader(response.into_reader())
        .map_err(|e| MapError::Countries(e.to_string()))?;
    Ok(parse_countries(geojson))
}

/// Fills `source` once, in the background, from the boundaries at `url`.
///
/// A failed download is logged and leaves the source empty.
pub fn spawn_loader(
    url: String,
    source: Arc<LiveSource<CountryShape>>,
    logger: Logger,
) -> Result<(), MapError> {
    thread::Builder::new()
        .name("countries-loader".to_string())
        .spawn(move || match fetch_countries(&url) {
            Ok(shapes) => {
                let count = shapes.len();
                match source.set_data(shapes) {
                    Ok(()) => {
                        let _ = logger.info(
                            &format!("Loaded {} country boundaries", count),
                            Color::Green,
                        );
                    }
                    Err(e) => {
                        let _ = logger.warn(&format!("Dropped country boundaries: {}", e));
                    }
                }
            }
            Err(e) => {
                let _ = logger.error(&e.to_string());
            }
        })
        .map_err(|e| MapError::Thread(e.to_string()))?;

    Ok(())
}

use std::{env, path::PathBuf, time::Duration};

use crate::refresher::REFRESH_INTERVAL_MS;

pub const ACCESS_TOKEN_VAR: &str = "MAPBOX_ACCESS_TOKEN";
pub const FEED_URL_VAR: &str = "FLIGHT_MAP_FEED_URL";
pub const COUNTRIES_URL_VAR: &str = "FLIGHT_MAP_COUNTRIES_URL";
pub const WORLDVIEW_VAR: &str = "FLIGHT_MAP_WORLDVIEW";
pub const LOG_DIR_VAR: &str = "FLIGHT_MAP_LOG_DIR";

/// Aircraft within 250 nm of the map center.
const DEFAULT_FEED_URL: &str = "https://api.airplanes.live/v2/point/44.0/19.0/250";
const DEFAULT_COUNTRIES_URL: &str =
    "https://raw.githubusercontent.com/holtzy/D3-graph-gallery/master/DATA/world.geojson";
const DEFAULT_WORLDVIEW: &str = "US";

/// Startup settings, read once from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Credential for the styled tile service. Without it OpenStreetMap is used.
    pub access_token: Option<String>,
    pub feed_url: String,
    pub countries_url: String,
    pub worldview: String,
    pub log_dir: PathBuf,
    pub refresh_interval: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            access_token: get(ACCESS_TOKEN_VAR),
            feed_url: get(FEED_URL_VAR).unwrap_or_else(|| DEFAULT_FEED_URL.to_string()),
            countries_url: get(COUNTRIES_URL_VAR)
                .unwrap_or_else(|| DEFAULT_COUNTRIES_URL.to_string()),
            worldview: get(WORLDVIEW_VAR).unwrap_or_else(|| DEFAULT_WORLDVIEW.to_string()),
            log_dir: get(LOG_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(env::temp_dir),
            refresh_interval: Duration::from_millis(REFRESH_INTERVAL_MS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_without_environment() {
        let config = Config::default();

        assert_eq!(config.access_token, None);
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.worldview, "US");
        assert_eq!(config.log_dir, env::temp_dir());
        assert_eq!(config.refresh_interval, Duration::from_millis(1000));
    }

    #[test]
    fn test_values_override_defaults_and_blanks_are_ignored() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ACCESS_TOKEN_VAR, " pk.test-token "),
            (FEED_URL_VAR, "http://localhost:8080/aircraft.json"),
            (WORLDVIEW_VAR, "   "),
            (LOG_DIR_VAR, "/var/log/flight-map"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.access_token.as_deref(), Some("pk.test-token"));
        assert_eq!(config.feed_url, "http://localhost:8080/aircraft.json");
        assert_eq!(config.countries_url, DEFAULT_COUNTRIES_URL);
        assert_eq!(config.worldview, "US");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/flight-map"));
    }
}

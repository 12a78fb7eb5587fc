use walkers::Position;

/// Endpoints as (longitude, latitude).
pub const ROUTE_START: (f64, f64) = (30.8005, 36.9038);
pub const ROUTE_END: (f64, f64) = (6.7668, 51.2895);

/// A fixed two-point line drawn between the route endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    coordinates: [(f64, f64); 2],
}

impl Route {
    pub fn fixed() -> Self {
        Self {
            coordinates: [ROUTE_START, ROUTE_END],
        }
    }

    /// Line geometry in (longitude, latitude) order.
    pub fn coordinates(&self) -> &[(f64, f64)] {
        &self.coordinates
    }

    pub fn positions(&self) -> [Position; 2] {
        self.coordinates
            .map(|(lon, lat)| Position::from_lat_lon(lat, lon))
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::fixed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_has_exactly_the_fixed_endpoints_in_order() {
        let route = Route::default();
        assert_eq!(
            route.coordinates(),
            &[(30.8005, 36.9038), (6.7668, 51.2895)]
        );
    }

    #[test]
    fn test_positions_swap_to_lat_lon() {
        let [start, end] = Route::fixed().positions();
        assert_eq!(start.lat(), 36.9038);
        assert_eq!(start.lon(), 30.8005);
        assert_eq!(end.lat(), 51.2895);
        assert_eq!(end.lon(), 6.7668);
    }
}

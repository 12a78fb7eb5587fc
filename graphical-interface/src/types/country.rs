use std::collections::HashSet;

use egui::Color32;
use geo::{Polygon, TriangulateEarcut};
use walkers::Position;

/// ISO alpha-3 codes filled with [`HIGHLIGHT_COLOR`].
pub const HIGHLIGHTED_COUNTRIES: [&str; 6] = ["TUR", "DEU", "BGR", "SRB", "HUN", "AUT"];

/// Amber at roughly 35% opacity, premultiplied.
pub const HIGHLIGHT_COLOR: Color32 = Color32::from_rgba_premultiplied(90, 49, 0, 90);

/// Worldview value shared by every viewpoint.
pub const ALL_WORLDVIEWS: &str = "all";

/// Picks the fill color of a country polygon from its code.
#[derive(Debug, Clone)]
pub struct CountryHighlight {
    codes: HashSet<String>,
    color: Color32,
}

impl CountryHighlight {
    pub fn new<I, S>(codes: I, color: Color32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
            color,
        }
    }

    /// The highlight color for a listed code, fully transparent otherwise.
    pub fn fill_color(&self, code: &str) -> Color32 {
        if self.codes.contains(code) {
            self.color
        } else {
            Color32::TRANSPARENT
        }
    }
}

impl Default for CountryHighlight {
    fn default() -> Self {
        Self::new(HIGHLIGHTED_COUNTRIES, HIGHLIGHT_COLOR)
    }
}

/// Decides which boundary variants are drawn for a given viewpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Worldview {
    viewpoint: String,
}

impl Worldview {
    pub fn new(viewpoint: impl Into<String>) -> Self {
        Self {
            viewpoint: viewpoint.into(),
        }
    }

    pub fn viewpoint(&self) -> &str {
        &self.viewpoint
    }

    /// Undisputed shapes are drawn when shared by all worldviews or listed for
    /// this one. Disputed shapes only when this viewpoint claims them.
    pub fn admits(&self, shape: &CountryShape) -> bool {
        let claimed = shape.worldview.iter().any(|w| *w == self.viewpoint);
        if shape.disputed {
            return claimed;
        }
        claimed || shape.worldview.iter().any(|w| w == ALL_WORLDVIEWS)
    }
}

/// A boundary polygon, holes included, cut into triangles for filling.
#[derive(Debug, Clone)]
pub struct FilledPolygon {
    pub vertices: Vec<Position>,
    pub triangles: Vec<[u32; 3]>,
}

impl FilledPolygon {
    /// Triangulates a polygon whose coordinates are (longitude, latitude).
    pub fn from_polygon(polygon: &Polygon<f64>) -> Self {
        let raw = polygon.earcut_triangles_raw();

        let vertices = raw
            .vertices
            .chunks_exact(2)
            .map(|lon_lat| Position::from_lat_lon(lon_lat[1], lon_lat[0]))
            .collect();
        let triangles = raw
            .triangle_indices
            .chunks_exact(3)
            .map(|t| [t[0] as u32, t[1] as u32, t[2] as u32])
            .collect();

        Self {
            vertices,
            triangles,
        }
    }
}

/// One feature of the country-boundary source.
#[derive(Debug, Clone)]
pub struct CountryShape {
    pub code: String,
    pub disputed: bool,
    pub worldview: Vec<String>,
    pub polygons: Vec<FilledPolygon>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn shape(disputed: bool, worldview: &[&str]) -> CountryShape {
        CountryShape {
            code: "XKX".to_string(),
            disputed,
            worldview: worldview.iter().map(|w| w.to_string()).collect(),
            polygons: Vec::new(),
        }
    }

    #[test]
    fn test_listed_codes_get_the_highlight_color() {
        let highlight = CountryHighlight::default();
        for code in HIGHLIGHTED_COUNTRIES {
            assert_eq!(highlight.fill_color(code), HIGHLIGHT_COLOR);
        }
    }

    #[test]
    fn test_other_codes_are_transparent() {
        let highlight = CountryHighlight::default();
        for code in ["FRA", "USA", "tur", "", "DEUX"] {
            assert_eq!(highlight.fill_color(code), Color32::TRANSPARENT);
        }
    }

    #[test]
    fn test_custom_set_and_color() {
        let highlight = CountryHighlight::new(vec!["NLD".to_string()], Color32::RED);
        assert_eq!(highlight.fill_color("NLD"), Color32::RED);
        assert_eq!(highlight.fill_color("TUR"), Color32::TRANSPARENT);
    }

    #[test]
    fn test_undisputed_shapes_follow_worldview_list() {
        let us = Worldview::new("US");
        assert!(us.admits(&shape(false, &["all"])));
        assert!(us.admits(&shape(false, &["US", "JP"])));
        assert!(!us.admits(&shape(false, &["CN", "IN"])));
    }

    #[test]
    fn test_disputed_shapes_need_a_claim() {
        let us = Worldview::new("US");
        assert!(!us.admits(&shape(true, &["all"])));
        assert!(!us.admits(&shape(true, &["CN"])));
        assert!(us.admits(&shape(true, &["US"])));
    }

    fn filled_area(filled: &FilledPolygon) -> f64 {
        filled
            .triangles
            .iter()
            .map(|[a, b, c]| {
                let [a, b, c] = [a, b, c].map(|i| filled.vertices[*i as usize]);
                ((b.lon() - a.lon()) * (c.lat() - a.lat())
                    - (c.lon() - a.lon()) * (b.lat() - a.lat()))
                .abs()
                    / 2.0
            })
            .sum()
    }

    #[test]
    fn test_square_is_filled_with_two_triangles() {
        let square = polygon![
            (x: 26.0, y: 41.0),
            (x: 44.0, y: 41.0),
            (x: 44.0, y: 36.0),
            (x: 26.0, y: 36.0),
        ];

        let filled = FilledPolygon::from_polygon(&square);
        assert_eq!(filled.triangles.len(), 2);
        assert_eq!(filled.vertices[0].lat(), 41.0);
        assert_eq!(filled.vertices[0].lon(), 26.0);
        assert!((filled_area(&filled) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_concave_outline_is_filled_exactly() {
        let l_shape = polygon![
            (x: 0.0, y: 0.0),
            (x: 2.0, y: 0.0),
            (x: 2.0, y: 1.0),
            (x: 1.0, y: 1.0),
            (x: 1.0, y: 2.0),
            (x: 0.0, y: 2.0),
        ];

        let filled = FilledPolygon::from_polygon(&l_shape);
        assert_eq!(filled.triangles.len(), 4);
        assert!((filled_area(&filled) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_holes_are_left_unfilled() {
        let with_hole = polygon![
            exterior: [
                (x: 0.0, y: 0.0),
                (x: 4.0, y: 0.0),
                (x: 4.0, y: 4.0),
                (x: 0.0, y: 4.0),
            ],
            interiors: [
                [
                    (x: 1.0, y: 1.0),
                    (x: 3.0, y: 1.0),
                    (x: 3.0, y: 3.0),
                    (x: 1.0, y: 3.0),
                ],
            ],
        ];

        let filled = FilledPolygon::from_polygon(&with_hole);
        assert!((filled_area(&filled) - 12.0).abs() < 1e-9);
    }
}

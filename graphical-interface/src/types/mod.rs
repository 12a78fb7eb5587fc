mod airport;
pub use airport::{Airport, AirportRecord};

mod country;
pub use country::{
    CountryHighlight, CountryShape, FilledPolygon, Worldview, HIGHLIGHTED_COUNTRIES, HIGHLIGHT_COLOR,
};

mod route;
pub use route::Route;

mod airports;
mod countries;
mod planes;
mod route;

pub use airports::Airports;
pub use countries::Countries;
pub use planes::Planes;
pub use route::RouteLine;

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use feed::AircraftSample;
use walkers::Tiles;

use crate::{errors::SourceError, types::CountryShape};

pub const PLANES_SOURCE: &str = "planes";
pub const COUNTRIES_SOURCE: &str = "countries";

struct SourceData<T> {
    items: Arc<Vec<T>>,
    updated_at: Option<DateTime<Utc>>,
    disposed: bool,
}

/// A named slot of geometry that layers draw from.
///
/// Writers always replace the whole collection. Readers get a cheap
/// snapshot that stays valid while the next write happens.
pub struct LiveSource<T> {
    name: &'static str,
    data: RwLock<SourceData<T>>,
}

impl<T> LiveSource<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            data: RwLock::new(SourceData {
                items: Arc::new(Vec::new()),
                updated_at: None,
                disposed: false,
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Replaces the entire contents of the source.
    pub fn set_data(&self, items: Vec<T>) -> Result<(), SourceError> {
        let mut data = self
            .data
            .write()
            .map_err(|_| SourceError::Poisoned(self.name))?;

        if data.disposed {
            return Err(SourceError::Disposed(self.name));
        }

        data.items = Arc::new(items);
        data.updated_at = Some(Utc::now());
        Ok(())
    }

    pub fn snapshot(&self) -> Arc<Vec<T>> {
        match self.data.read() {
            Ok(data) => Arc::clone(&data.items),
            Err(poisoned) => Arc::clone(&poisoned.into_inner().items),
        }
    }

    /// Time of the last accepted write, if any.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        match self.data.read() {
            Ok(data) => data.updated_at,
            Err(poisoned) => poisoned.into_inner().updated_at,
        }
    }

    pub fn is_alive(&self) -> bool {
        match self.data.read() {
            Ok(data) => !data.disposed,
            Err(_) => false,
        }
    }

    /// Drops the contents and rejects every later write.
    pub fn dispose(&self) {
        let mut data = match self.data.write() {
            Ok(data) => data,
            Err(poisoned) => poisoned.into_inner(),
        };
        data.disposed = true;
        data.items = Arc::new(Vec::new());
    }
}

/// The single rendering surface: tile provider plus every live source.
pub struct Surface {
    pub tiles: Option<Box<dyn Tiles>>,
    pub planes: Arc<LiveSource<AircraftSample>>,
    pub countries: Arc<LiveSource<CountryShape>>,
    released: bool,
}

impl Surface {
    pub fn new(tiles: Option<Box<dyn Tiles>>) -> Self {
        Self {
            tiles,
            planes: Arc::new(LiveSource::new(PLANES_SOURCE)),
            countries: Arc::new(LiveSource::new(COUNTRIES_SOURCE)),
            released: false,
        }
    }

    /// Releases tiles and disposes the sources. Returns `false` if the
    /// surface had already been released, in which case nothing happens.
    pub fn release(&mut self) -> bool {
        if self.released {
            return false;
        }
        self.released = true;
        self.tiles = None;
        self.planes.dispose();
        self.countries.dispose();
        true
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_data_replaces_everything() {
        let source = LiveSource::new(PLANES_SOURCE);
        assert!(source.updated_at().is_none());

        source.set_data(vec![1, 2, 3]).unwrap();
        assert_eq!(*source.snapshot(), vec![1, 2, 3]);

        source.set_data(Vec::new()).unwrap();
        assert!(source.snapshot().is_empty());
        assert!(source.updated_at().is_some());
    }

    #[test]
    fn test_snapshot_survives_later_writes() {
        let source = LiveSource::new(PLANES_SOURCE);
        source.set_data(vec!["DLH1"]).unwrap();

        let before = source.snapshot();
        source.set_data(vec!["THY2", "PGT3"]).unwrap();

        assert_eq!(*before, vec!["DLH1"]);
        assert_eq!(source.snapshot().len(), 2);
    }

    #[test]
    fn test_disposed_source_rejects_writes() {
        let source = LiveSource::new(PLANES_SOURCE);
        source.set_data(vec![1]).unwrap();
        source.dispose();

        assert!(!source.is_alive());
        assert_eq!(
            source.set_data(vec![2]),
            Err(SourceError::Disposed(PLANES_SOURCE))
        );
        assert!(source.snapshot().is_empty());
    }

    #[test]
    fn test_surface_is_released_exactly_once() {
        let mut surface = Surface::new(None);
        let planes = Arc::clone(&surface.planes);

        assert!(surface.release());
        assert!(!surface.release());
        assert!(surface.is_released());
        assert!(!planes.is_alive());
        assert!(!surface.countries.is_alive());
    }
}

//! The authoritative in-memory station list.
//!
//! A [`StationRegistry`] is an explicitly constructed value handed to every
//! component that needs station access; there is no process-global catalog.
//! The registry owns the stations for the whole process lifetime and exposes
//! pure lookups plus a user-facing ordering that other components read back.

mod catalog;

use crate::model::station::Station;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Seed data for one station: `(name, id, latitude, longitude)`.
#[derive(Debug, Clone)]
pub struct StationSeed {
    pub name: String,
    pub id: i32,
    pub latitude: f64,
    pub longitude: f64,
}

/// User-selectable ordering of the station list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortOrder {
    /// By station name.
    Alphabetic,
    /// Most-accessed first.
    Favorites,
    /// Nearest to the given coordinates first.
    Closest { latitude: f64, longitude: f64 },
}

/// The catalog of known stations plus the legacy-id remap table.
#[derive(Debug)]
pub struct StationRegistry {
    stations: Mutex<Vec<Arc<Station>>>,
    legacy_ids: HashMap<i32, i32>,
}

impl StationRegistry {
    /// Builds a registry from arbitrary seed data. The iteration order of
    /// `seeds` becomes the initial registry order.
    pub fn new(
        seeds: impl IntoIterator<Item = StationSeed>,
        legacy_ids: impl IntoIterator<Item = (i32, i32)>,
    ) -> StationRegistry {
        let stations = seeds
            .into_iter()
            .map(|s| Arc::new(Station::new(s.name, s.id, s.latitude, s.longitude)))
            .collect();
        StationRegistry {
            stations: Mutex::new(stations),
            legacy_ids: legacy_ids.into_iter().collect(),
        }
    }

    /// The full MeteoGalicia municipal catalog, including the legacy-id remap
    /// table.
    pub fn meteogalicia() -> StationRegistry {
        StationRegistry::new(
            catalog::STATIONS
                .iter()
                .map(|&(name, id, latitude, longitude)| StationSeed {
                    name: name.to_string(),
                    id,
                    latitude,
                    longitude,
                }),
            catalog::LEGACY_IDS.iter().copied(),
        )
    }

    /// Snapshot of the stations in the current registry order.
    pub fn stations(&self) -> Vec<Arc<Station>> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Looks a station up by id, remapping legacy feed ids first.
    pub fn get_by_id(&self, station_id: i32) -> Option<Arc<Station>> {
        let station_id = self
            .legacy_ids
            .get(&station_id)
            .copied()
            .unwrap_or(station_id);
        self.lock()
            .iter()
            .find(|station| station.id() == station_id)
            .cloned()
    }

    pub fn is_legacy_id(&self, station_id: i32) -> bool {
        self.legacy_ids.contains_key(&station_id)
    }

    /// The station closest to the given coordinates, or `None` on an empty
    /// registry.
    pub fn closest_station(&self, latitude: f64, longitude: f64) -> Option<Arc<Station>> {
        self.lock()
            .iter()
            .min_by(|a, b| {
                let da = Station::distance2(a.latitude(), a.longitude(), latitude, longitude);
                let db = Station::distance2(b.latitude(), b.longitude(), latitude, longitude);
                da.total_cmp(&db)
            })
            .cloned()
    }

    /// The most-accessed station, or `None` on an empty registry. Ties keep
    /// the earliest station in registry order.
    pub fn favorite_station(&self) -> Option<Arc<Station>> {
        let stations = self.lock();
        let mut favorite = stations.first()?;
        for station in stations.iter() {
            if station.access_count() > favorite.access_count() {
                favorite = station;
            }
        }
        Some(Arc::clone(favorite))
    }

    /// Re-sorts the registry order in place. Components that read
    /// [`stations`](Self::stations) afterwards see the new order.
    pub fn sort_stations(&self, order: SortOrder) {
        let mut stations = self.lock();
        match order {
            SortOrder::Alphabetic => stations.sort_by(|a, b| a.name().cmp(b.name())),
            SortOrder::Favorites => {
                stations.sort_by(|a, b| b.access_count().cmp(&a.access_count()))
            }
            SortOrder::Closest {
                latitude,
                longitude,
            } => stations.sort_by(|a, b| {
                let da = Station::distance2(a.latitude(), a.longitude(), latitude, longitude);
                let db = Station::distance2(b.latitude(), b.longitude(), latitude, longitude);
                da.total_cmp(&db)
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Arc<Station>>> {
        self.stations.lock().unwrap_or_else(|e| e.into_inner())
    }
}

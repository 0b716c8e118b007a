//! A forecast station: immutable identity plus mutable forecast state.

use crate::model::prediction::Prediction;
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::sync::Mutex;

/// A fixed geographic forecast point.
///
/// Identity (id, name, coordinates) never changes; the forecast state
/// (predictions, access statistics) is mutated in place through `&self` and is
/// guarded by a per-station lock, since the update worker and UI-facing reads
/// touch it concurrently. Stations are created once by the
/// [`StationRegistry`](crate::StationRegistry) and live for the whole process.
#[derive(Debug)]
pub struct Station {
    id: i32,
    name: String,
    latitude: f64,
    longitude: f64,
    state: Mutex<StationState>,
}

#[derive(Debug, Default)]
struct StationState {
    access_count: u32,
    last_access: Option<DateTime<Utc>>,
    predictions: Vec<Prediction>,
    /// Most recent creation date seen across all incoming predictions.
    last_creation: Option<DateTime<Utc>>,
}

impl Station {
    pub fn new(name: impl Into<String>, id: i32, latitude: f64, longitude: f64) -> Station {
        Station {
            id,
            name: name.into(),
            latitude,
            longitude,
            state: Mutex::new(StationState::default()),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// How often the user has opened this station. Fed from an external
    /// favorites store at start-up; drives the favorites ordering.
    pub fn access_count(&self) -> u32 {
        self.lock().access_count
    }

    pub fn set_access_count(&self, access_count: u32) {
        self.lock().access_count = access_count;
    }

    pub fn last_access(&self) -> Option<DateTime<Utc>> {
        self.lock().last_access
    }

    pub fn set_last_access(&self, last_access: DateTime<Utc>) {
        self.lock().last_access = Some(last_access);
    }

    /// Snapshot of the current prediction list.
    pub fn predictions(&self) -> Vec<Prediction> {
        self.lock().predictions.clone()
    }

    pub fn has_predictions(&self) -> bool {
        !self.lock().predictions.is_empty()
    }

    /// Most recent creation date across every prediction batch ever applied,
    /// used to detect an unchanged upstream feed.
    pub fn last_creation_date(&self) -> Option<DateTime<Utc>> {
        self.lock().last_creation
    }

    /// Replaces or extends the prediction list with a freshly parsed batch.
    ///
    /// Short-term feeds pass `clear_existing = true` (a new batch supersedes
    /// everything), medium-term feeds pass `false` so their records sit next
    /// to the retained short-term batch. Records dated strictly before
    /// yesterday are dropped, as is any record without a target date; the
    /// creation-date high-water mark is folded over the whole incoming batch
    /// before that filter.
    pub fn set_predictions(&self, incoming: Vec<Prediction>, clear_existing: bool) {
        let yesterday = Utc::now() - Duration::days(1);
        let mut state = self.lock();
        if clear_existing {
            state.predictions.clear();
        }
        for prediction in incoming {
            if let Some(creation) = prediction.creation_date() {
                if state.last_creation.map_or(true, |last| creation > last) {
                    state.last_creation = Some(creation);
                }
            }
            if prediction.date().is_some_and(|date| date > yesterday) {
                state.predictions.push(prediction);
            }
        }
    }

    /// Squared equirectangular distance between two coordinate pairs. Good
    /// enough to rank stations inside one region; not a geodesic distance.
    pub fn distance2(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
        let lat_dist = lat2 - lat1;
        let lng_dist = lng2 - lng1;
        lat_dist * lat_dist + lng_dist * lng_dist
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StationState> {
        // A poisoned station lock means a panic mid-mutation; the forecast
        // state is still structurally valid, so keep serving it.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

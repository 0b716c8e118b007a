//! Runtime configuration and the connectivity signal the update worker
//! consults between cycles.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use std::time::Duration;

/// Default pause between update cycles.
pub const DEFAULT_UPDATE_PERIOD: Duration = Duration::from_secs(3600);

/// Tunable update behavior.
///
/// Serde-roundtrippable so an embedding application can persist it however it
/// likes; the crate itself never touches a settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateSettings {
    /// Pause between full update cycles.
    #[serde(with = "duration_secs")]
    pub update_period: Duration,
    /// How many stations each cycle refreshes, in registry order. `0` means
    /// the whole registry.
    pub max_stations_per_cycle: usize,
    /// When `false`, cycles serve cached feeds only and never touch the
    /// network.
    pub background_data_allowed: bool,
}

impl Default for UpdateSettings {
    fn default() -> UpdateSettings {
        UpdateSettings {
            update_period: DEFAULT_UPDATE_PERIOD,
            max_stations_per_cycle: 0,
            background_data_allowed: true,
        }
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(deserializer)?))
    }
}

/// What the update worker asks its embedder between steps: the current
/// settings snapshot and whether the device currently has connectivity.
pub trait ServicePolicy: Send + Sync + 'static {
    fn settings(&self) -> UpdateSettings;
    fn has_connectivity(&self) -> bool;
}

/// In-memory [`ServicePolicy`] the embedding side can mutate at runtime.
#[derive(Debug)]
pub struct SharedSettings {
    settings: RwLock<UpdateSettings>,
    connectivity: AtomicBool,
}

impl SharedSettings {
    pub fn new(settings: UpdateSettings) -> SharedSettings {
        SharedSettings {
            settings: RwLock::new(settings),
            connectivity: AtomicBool::new(true),
        }
    }

    pub fn update(&self, settings: UpdateSettings) {
        *self
            .settings
            .write()
            .unwrap_or_else(|e| e.into_inner()) = settings;
    }

    pub fn set_connectivity(&self, available: bool) {
        self.connectivity.store(available, Ordering::SeqCst);
    }
}

impl Default for SharedSettings {
    fn default() -> SharedSettings {
        SharedSettings::new(UpdateSettings::default())
    }
}

impl ServicePolicy for SharedSettings {
    fn settings(&self) -> UpdateSettings {
        self.settings
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn has_connectivity(&self) -> bool {
        self.connectivity.load(Ordering::SeqCst)
    }
}

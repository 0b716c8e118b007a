mod cache;
mod error;
mod model;
mod parser;
mod registry;
mod service;
mod settings;
mod utils;

pub use error::MeteogalError;

pub use cache::{FeedCache, FeedCacheError, FeedKind, MAX_STORAGE_AGE};
pub use parser::{parse_feed, FeedParseError};

pub use model::prediction::{
    MediumTermPrediction, Prediction, ShortTermPrediction, SkyState, WindState,
};
pub use model::station::Station;

pub use registry::{SortOrder, StationRegistry, StationSeed};

pub use service::{
    RefreshError, ServiceState, UpdateListener, UpdateService, WidgetSink,
    WAIT_CONNECTION_TIMEOUT,
};
pub use settings::{
    ServicePolicy, SharedSettings, UpdateSettings, DEFAULT_UPDATE_PERIOD,
};

pub use utils::{ensure_cache_dir_exists, get_cache_dir};

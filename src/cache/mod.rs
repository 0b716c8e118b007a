//! Time-bounded cache for the per-station forecast feeds.
//!
//! One file per (station, feed kind) under an application-private cache
//! directory; the file's existence and mtime alone encode freshness, there is
//! no separate index. Fresh-enough copies are served locally, stale or
//! missing ones trigger a network fetch that is persisted atomically before
//! being served back from disk.

mod error;

pub use error::FeedCacheError;

use bon::bon;
use log::{info, warn};
use reqwest::Client;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use tokio::task;

const DEFAULT_BASE_URL: &str = "https://servizos.meteogalicia.es";

/// Cached copies older than this are re-fetched from the network.
pub const MAX_STORAGE_AGE: Duration = Duration::from_secs(3600);

/// The two forecast feeds published per station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    /// Daily forecast with morning/afternoon/night granularity.
    ShortTerm,
    /// Multi-day outlook with one value per day.
    MediumTerm,
}

impl FeedKind {
    /// Both kinds, in the order a station refresh processes them.
    pub const ALL: [FeedKind; 2] = [FeedKind::ShortTerm, FeedKind::MediumTerm];

    fn url_action(&self) -> &'static str {
        match self {
            FeedKind::ShortTerm => "rssLocalidades.action",
            FeedKind::MediumTerm => "rssConcellosMPrazo.action",
        }
    }

    pub(crate) fn cache_file_name(&self, station_id: i32) -> String {
        match self {
            FeedKind::ShortTerm => format!("{station_id}_short.rss"),
            FeedKind::MediumTerm => format!("{station_id}_medium.rss"),
        }
    }

    /// Whether a parsed batch of this kind replaces the station's whole
    /// prediction list or sits next to the retained other batch.
    pub(crate) fn clears_predictions(&self) -> bool {
        matches!(self, FeedKind::ShortTerm)
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedKind::ShortTerm => write!(f, "short-term"),
            FeedKind::MediumTerm => write!(f, "medium-term"),
        }
    }
}

/// Resolves a (station, feed kind) pair to feed bytes, preferring a
/// sufficiently fresh local copy and falling back between network and storage.
///
/// Holds no in-memory state beyond the HTTP client; staleness is derived from
/// the filesystem on every call.
#[derive(Debug)]
pub struct FeedCache {
    cache_dir: PathBuf,
    base_url: String,
    max_age: Duration,
    client: Client,
}

#[bon]
impl FeedCache {
    /// Creates a cache rooted at `cache_dir`.
    ///
    /// `base_url` and `max_age` default to the MeteoGalicia service and one
    /// hour; overriding them is mainly useful for tests and mirrors.
    #[builder]
    pub fn new(cache_dir: PathBuf, base_url: Option<String>, max_age: Option<Duration>) -> FeedCache {
        FeedCache {
            cache_dir,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            max_age: max_age.unwrap_or(MAX_STORAGE_AGE),
            client: Client::new(),
        }
    }
}

impl FeedCache {
    /// Fetches the feed for one station and kind.
    ///
    /// With `force_local` the network is never attempted, regardless of age
    /// or connectivity. Otherwise a missing or stale copy triggers a
    /// download; a downloaded feed is persisted whole (a partial write never
    /// becomes visible) and served back from the freshly written file. When
    /// the network is skipped or fails, the stored copy is served if one
    /// exists.
    ///
    /// # Errors
    ///
    /// [`FeedCacheError::NotFound`] when nothing could be served at all;
    /// [`FeedCacheError::HttpStatus`] when the server refused the request and
    /// no stored copy exists.
    pub async fn fetch(
        &self,
        station_id: i32,
        kind: FeedKind,
        force_local: bool,
    ) -> Result<Vec<u8>, FeedCacheError> {
        let path = self.cache_dir.join(kind.cache_file_name(station_id));
        let age = storage_age(&path).await;
        let stale = age.map_or(true, |age| age > self.max_age);

        let mut server_error = None;
        if !force_local && stale {
            match self.download(station_id, kind).await {
                Ok(bytes) => {
                    if let Err(e) = self.store(&path, &bytes).await {
                        // Storage unavailable: degrade to network-only.
                        warn!(
                            "cache write failed for {:?}, serving download directly: {}",
                            path, e
                        );
                        return Ok(bytes);
                    }
                    info!(
                        "cached {} feed for station {} at {:?}",
                        kind, station_id, path
                    );
                    return tokio::fs::read(&path)
                        .await
                        .map_err(|e| FeedCacheError::Io(path, e));
                }
                Err(e) => {
                    warn!("download of {} feed for station {} failed: {}", kind, station_id, e);
                    if matches!(e, FeedCacheError::HttpStatus { .. }) {
                        server_error = Some(e);
                    }
                }
            }
        }

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(server_error.unwrap_or(FeedCacheError::NotFound { station_id, kind }))
            }
            Err(e) => Err(FeedCacheError::Io(path, e)),
        }
    }

    /// Deletes the stored copy so the next request is forced to the network.
    /// Deleting an absent entry is not an error.
    pub async fn invalidate(&self, station_id: i32, kind: FeedKind) -> Result<(), FeedCacheError> {
        let path = self.cache_dir.join(kind.cache_file_name(station_id));
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                info!("evicted cached {} feed for station {}", kind, station_id);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FeedCacheError::Io(path, e)),
        }
    }

    async fn download(&self, station_id: i32, kind: FeedKind) -> Result<Vec<u8>, FeedCacheError> {
        let url = format!(
            "{}/rss/predicion/{}?idZona={}&dia=-1",
            self.base_url,
            kind.url_action(),
            station_id
        );
        info!("downloading {} feed for station {} from {}", kind, station_id, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FeedCacheError::Network(url.clone(), e))?;
        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    FeedCacheError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    FeedCacheError::Network(url, e)
                });
            }
        };

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FeedCacheError::Network(url, e))?;
        Ok(bytes.to_vec())
    }

    /// Writes the whole buffer to a temp file in the cache directory and
    /// renames it into place, so readers only ever see complete feeds.
    async fn store(&self, path: &Path, bytes: &[u8]) -> Result<(), io::Error> {
        let dir = self.cache_dir.clone();
        let path = path.to_path_buf();
        let bytes = bytes.to_vec();
        task::spawn_blocking(move || {
            std::fs::create_dir_all(&dir)?;
            let mut tmp = NamedTempFile::new_in(&dir)?;
            tmp.write_all(&bytes)?;
            tmp.flush()?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
    }
}

/// Age of the stored copy, or `None` when no entry exists. An mtime in the
/// future counts as age zero.
async fn storage_age(path: &Path) -> Option<Duration> {
    let metadata = tokio::fs::metadata(path).await.ok()?;
    let mtime = metadata.modified().ok()?;
    Some(mtime.elapsed().unwrap_or(Duration::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    // Port 9 (discard) refuses connections immediately, so any accidental
    // network attempt fails fast instead of hanging the test.
    const UNROUTABLE: &str = "http://127.0.0.1:9";

    fn cache(dir: &Path, max_age: Duration) -> FeedCache {
        FeedCache::builder()
            .cache_dir(dir.to_path_buf())
            .base_url(UNROUTABLE.to_string())
            .max_age(max_age)
            .build()
    }

    async fn seed(dir: &Path, station_id: i32, kind: FeedKind, bytes: &[u8]) {
        tokio::fs::create_dir_all(dir).await.unwrap();
        tokio::fs::write(dir.join(kind.cache_file_name(station_id)), bytes)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn force_local_serves_stored_copy_without_network() {
        let dir = tempdir().unwrap();
        seed(dir.path(), 15030, FeedKind::ShortTerm, b"<rss/>").await;
        // Zero max age: a network-preferring fetch would always try to
        // download, so force-local must be what keeps it off the wire.
        let cache = cache(dir.path(), Duration::ZERO);

        let bytes = cache.fetch(15030, FeedKind::ShortTerm, true).await.unwrap();
        assert_eq!(bytes, b"<rss/>");
    }

    #[tokio::test]
    async fn force_local_without_stored_copy_is_not_found() {
        let dir = tempdir().unwrap();
        let cache = cache(dir.path(), MAX_STORAGE_AGE);

        let err = cache
            .fetch(15030, FeedKind::MediumTerm, true)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FeedCacheError::NotFound {
                station_id: 15030,
                kind: FeedKind::MediumTerm,
            }
        ));
    }

    #[tokio::test]
    async fn fresh_copy_is_served_without_download() {
        let dir = tempdir().unwrap();
        seed(dir.path(), 36057, FeedKind::ShortTerm, b"fresh").await;
        let cache = cache(dir.path(), MAX_STORAGE_AGE);

        let bytes = cache.fetch(36057, FeedKind::ShortTerm, false).await.unwrap();
        assert_eq!(bytes, b"fresh");
    }

    #[tokio::test]
    async fn stale_copy_survives_a_failed_download() {
        let dir = tempdir().unwrap();
        seed(dir.path(), 36057, FeedKind::MediumTerm, b"stale but usable").await;
        let cache = cache(dir.path(), Duration::ZERO);

        let bytes = cache
            .fetch(36057, FeedKind::MediumTerm, false)
            .await
            .unwrap();
        assert_eq!(bytes, b"stale but usable");
    }

    #[tokio::test]
    async fn no_copy_and_no_network_reports_not_found() {
        let dir = tempdir().unwrap();
        let cache = cache(dir.path(), Duration::ZERO);

        let err = cache
            .fetch(27028, FeedKind::ShortTerm, false)
            .await
            .unwrap_err();
        assert!(matches!(err, FeedCacheError::NotFound { .. }));
    }

    #[tokio::test]
    async fn invalidate_removes_the_entry() {
        let dir = tempdir().unwrap();
        seed(dir.path(), 15030, FeedKind::ShortTerm, b"poisoned").await;
        let cache = cache(dir.path(), MAX_STORAGE_AGE);

        cache.invalidate(15030, FeedKind::ShortTerm).await.unwrap();
        let err = cache
            .fetch(15030, FeedKind::ShortTerm, true)
            .await
            .unwrap_err();
        assert!(matches!(err, FeedCacheError::NotFound { .. }));

        // Evicting an already absent entry stays quiet.
        cache.invalidate(15030, FeedKind::ShortTerm).await.unwrap();
    }
}

//! The background update worker.
//!
//! A single spawned task drives the [`ServiceState`] machine: it drains a
//! pending queue of stations, refreshing each one through the feed cache and
//! parser, and parks in a wait state when the queue runs dry or connectivity
//! drops. UI-side collaborators interact with the worker only through queue
//! inserts, wake notifications and listener callbacks.

mod error;
mod listener;
mod state;

pub use error::RefreshError;
pub use listener::{UpdateListener, WidgetSink};
pub use state::ServiceState;

use crate::cache::{FeedCache, FeedCacheError, FeedKind};
use crate::model::station::Station;
use crate::parser::parse_feed;
use crate::registry::StationRegistry;
use crate::settings::ServicePolicy;
use bon::bon;
use log::{error, info, warn};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::{self, JoinHandle};

/// How long the worker sleeps between connectivity polls while offline.
pub const WAIT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Handle to the update worker.
///
/// Cheap to clone; all clones share one worker. Construction does not start
/// the worker, [`start`](UpdateService::start) does.
#[derive(Clone)]
pub struct UpdateService {
    inner: Arc<ServiceInner>,
}

struct ServiceInner {
    registry: Arc<StationRegistry>,
    cache: FeedCache,
    policy: Arc<dyn ServicePolicy>,
    widget: Option<Arc<dyn WidgetSink>>,
    listeners: Mutex<Vec<Arc<dyn UpdateListener>>>,
    pending: Mutex<VecDeque<Arc<Station>>>,
    /// Set by priority requests; consumed by wait states on wake and by the
    /// queue pop that serves the request.
    priority_requested: AtomicBool,
    interrupted: AtomicBool,
    wake: Notify,
    state: Mutex<ServiceState>,
}

#[bon]
impl UpdateService {
    #[builder]
    pub fn new(
        registry: Arc<StationRegistry>,
        cache: FeedCache,
        policy: Arc<dyn ServicePolicy>,
        widget: Option<Arc<dyn WidgetSink>>,
    ) -> UpdateService {
        UpdateService {
            inner: Arc::new(ServiceInner {
                registry,
                cache,
                policy,
                widget,
                listeners: Mutex::new(Vec::new()),
                pending: Mutex::new(VecDeque::new()),
                priority_requested: AtomicBool::new(false),
                interrupted: AtomicBool::new(false),
                wake: Notify::new(),
                state: Mutex::new(ServiceState::Created),
            }),
        }
    }
}

impl UpdateService {
    /// Spawns the worker task. Call once; a second worker on the same handle
    /// would race the first over the queue.
    pub fn start(&self) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.run().await })
    }

    /// Asks the worker to stop and wakes whatever it is waiting on. The
    /// worker finishes its current station before exiting.
    pub fn shutdown(&self) {
        self.inner.interrupted.store(true, Ordering::SeqCst);
        self.inner.wake.notify_one();
    }

    /// The state the worker is currently executing.
    pub fn state(&self) -> ServiceState {
        *self.inner.state()
    }

    pub fn add_listener(&self, listener: Arc<dyn UpdateListener>) {
        self.inner.listeners().push(listener);
    }

    pub fn remove_listener(&self, listener: &Arc<dyn UpdateListener>) {
        self.inner
            .listeners()
            .retain(|known| !Arc::ptr_eq(known, listener));
    }

    /// Moves a station to the front of the queue (inserting it if absent) and
    /// wakes any wait state. A waiting worker resumes immediately: from
    /// [`ServiceState::WaitConnection`] it serves the station from storage,
    /// from [`ServiceState::WaitNextUpdate`] it starts a cycle without
    /// refilling the queue.
    pub fn request_priority_update(&self, station: Arc<Station>) {
        {
            let mut pending = self.inner.pending();
            pending.retain(|queued| queued.id() != station.id());
            pending.push_front(station);
        }
        self.inner.priority_requested.store(true, Ordering::SeqCst);
        self.inner.wake.notify_one();
    }

    /// Signals that connectivity came back. Only a worker parked in
    /// [`ServiceState::WaitConnection`] reacts; every other state either polls
    /// connectivity itself or does not care.
    pub fn notify_connectivity_available(&self) {
        if *self.inner.state() == ServiceState::WaitConnection {
            self.inner.wake.notify_one();
        }
    }

    /// Number of stations waiting to be refreshed.
    pub fn pending_count(&self) -> usize {
        self.inner.pending().len()
    }
}

impl ServiceInner {
    async fn run(&self) {
        let mut state = ServiceState::Created;
        info!("update worker started");
        while !self.interrupted() {
            *self.state() = state;
            let next = self.step(state).await;
            if next != state {
                info!("update worker: {state} -> {next}");
            }
            if !self.policy.has_connectivity() {
                self.deliver_internet_off();
            }
            if next == ServiceState::Stopped {
                break;
            }
            state = next;
        }
        *self.state() = ServiceState::Stopped;
        info!("update worker stopped");
    }

    /// Executes one state transition and returns the successor state.
    async fn step(&self, state: ServiceState) -> ServiceState {
        match state {
            ServiceState::Created => {
                if let Some(station) = self.widget_station() {
                    self.pending().push_back(station);
                }
                if self.policy.has_connectivity() {
                    ServiceState::UpdateCycle
                } else {
                    ServiceState::UpdateCached
                }
            }
            ServiceState::UpdateCycle => {
                let pending = self.has_pending_stations();
                let online = self.policy.has_connectivity();
                if pending && online {
                    self.process_next_station(false).await;
                    ServiceState::UpdateCycle
                } else if !pending {
                    if self.policy.settings().background_data_allowed {
                        ServiceState::WaitNextUpdate
                    } else {
                        ServiceState::Stopped
                    }
                } else {
                    ServiceState::WaitConnection
                }
            }
            ServiceState::UpdateCached => {
                if self.policy.has_connectivity() {
                    // Connectivity came back mid-drain; the rest of the queue
                    // can be refreshed for real.
                    ServiceState::UpdateCycle
                } else if self.has_pending_stations() {
                    self.process_next_station(true).await;
                    ServiceState::UpdateCached
                } else {
                    ServiceState::WaitConnection
                }
            }
            ServiceState::WaitConnection => {
                if self.policy.has_connectivity() {
                    return if self.policy.settings().background_data_allowed {
                        ServiceState::UpdateCycle
                    } else {
                        ServiceState::Stopped
                    };
                }
                self.wait(WAIT_CONNECTION_TIMEOUT).await;
                if self.interrupted() {
                    ServiceState::Stopped
                } else if self.take_priority_request() {
                    // If connectivity also returned during this sleep, the
                    // priority branch wins here; UpdateCached upgrades to
                    // UpdateCycle on its first poll, so nothing is lost.
                    ServiceState::UpdateCached
                } else {
                    ServiceState::WaitConnection
                }
            }
            ServiceState::WaitNextUpdate => {
                self.wait(self.policy.settings().update_period).await;
                if self.interrupted() {
                    return ServiceState::Stopped;
                }
                if self.take_priority_request() {
                    // Serve the requested station alone; the periodic refill
                    // waits for the next regular wake.
                    return ServiceState::UpdateCycle;
                }
                self.fill_stations();
                if self.policy.settings().background_data_allowed {
                    ServiceState::UpdateCycle
                } else {
                    ServiceState::Stopped
                }
            }
            ServiceState::Stopped => ServiceState::Stopped,
        }
    }

    /// Pops and refreshes the head of the queue, delivering the outcome to
    /// listeners and deciding whether the station goes back in the queue.
    async fn process_next_station(&self, force_local: bool) {
        let Some(station) = self.next_station() else {
            return;
        };
        match self.refresh_station(&station, force_local).await {
            Ok(true) => {
                info!("station {} was already up to date", station);
                if self.policy.has_connectivity() {
                    self.deliver_up_to_date(&station);
                }
                // The publisher regenerates all feeds in one sweep, so every
                // queued station that already has data would come back
                // unchanged too.
                self.clear_predicted_stations();
            }
            Ok(false) => {
                info!("station {} updated", station);
                self.deliver_update(&station);
                self.update_widget(&station);
            }
            Err(RefreshError::Cache(e)) => match e {
                FeedCacheError::HttpStatus { .. } => {
                    error!("refresh of station {} failed: {}", station, e);
                    self.deliver_internet_error();
                    self.pending().push_back(station);
                }
                FeedCacheError::NotFound { .. } | FeedCacheError::Network(..) => {
                    error!("refresh of station {} failed: {}", station, e);
                    self.deliver_internet_error();
                    // Re-enqueueing here would make an offline worker spin
                    // through the queue emitting errors.
                }
                FeedCacheError::Io(..) => {
                    error!("refresh of station {} failed: {}", station, e);
                    self.deliver_internal_error();
                }
            },
            Err(RefreshError::Parse(e)) => {
                error!("failed parsing feeds for station {}: {}", station, e);
                self.deliver_internet_error();
                // The stored copies are poison; evict them so the next
                // attempt goes back to the network.
                for kind in FeedKind::ALL {
                    if let Err(e) = self.cache.invalidate(station.id(), kind).await {
                        warn!("could not evict {} feed for station {}: {}", kind, station, e);
                    }
                }
            }
            Err(RefreshError::Join(e)) => {
                error!("refresh of station {} failed: {}", station, e);
                self.deliver_internal_error();
            }
        }
    }

    /// Fetches and applies both feeds for one station. `Ok(true)` means the
    /// refresh ran but produced the same feed generation the station already
    /// had.
    async fn refresh_station(
        &self,
        station: &Arc<Station>,
        force_local: bool,
    ) -> Result<bool, RefreshError> {
        let old_creation = if station.has_predictions() {
            station.last_creation_date()
        } else {
            None
        };

        for kind in FeedKind::ALL {
            let bytes = self.cache.fetch(station.id(), kind, force_local).await?;
            let station_id = station.id();
            let batch = task::spawn_blocking(move || parse_feed(station_id, kind, &bytes)).await??;
            station.set_predictions(batch, kind.clears_predictions());
        }

        let up_to_date = station.has_predictions()
            && station.last_creation_date().is_some()
            && station.last_creation_date() == old_creation;
        Ok(up_to_date)
    }

    /// Refills the queue in registry order, bounded by the per-cycle limit,
    /// then reorders the whole queue most-used-first so the most relevant
    /// stations land first if connectivity dies mid-cycle.
    fn fill_stations(&self) {
        let settings = self.policy.settings();
        let stations = self.registry.stations();
        let take = if settings.max_stations_per_cycle == 0 {
            stations.len()
        } else {
            settings.max_stations_per_cycle.min(stations.len())
        };
        let mut pending = self.pending();
        for station in stations.into_iter().take(take) {
            pending.push_back(station);
        }
        pending
            .make_contiguous()
            .sort_by(|a, b| b.access_count().cmp(&a.access_count()));
    }

    fn next_station(&self) -> Option<Arc<Station>> {
        let station = self.pending().pop_front();
        if station.is_some() {
            self.priority_requested.store(false, Ordering::SeqCst);
        }
        station
    }

    fn has_pending_stations(&self) -> bool {
        !self.pending().is_empty()
    }

    fn clear_predicted_stations(&self) {
        self.pending().retain(|station| !station.has_predictions());
    }

    /// The station the widget should show: its bound station, or the user's
    /// favorite when unbound.
    fn widget_station(&self) -> Option<Arc<Station>> {
        self.widget
            .as_ref()
            .and_then(|widget| widget.station())
            .or_else(|| self.registry.favorite_station())
    }

    fn update_widget(&self, station: &Arc<Station>) {
        let Some(widget) = &self.widget else {
            return;
        };
        let show = match widget.station() {
            None => true,
            Some(bound) => !bound.has_predictions() || bound.id() == station.id(),
        };
        if show {
            widget.show(station);
        }
    }

    async fn wait(&self, timeout: Duration) {
        tokio::select! {
            _ = tokio::time::sleep(timeout) => {}
            _ = self.wake.notified() => {}
        }
    }

    fn take_priority_request(&self) -> bool {
        self.priority_requested.swap(false, Ordering::SeqCst)
    }

    fn interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    fn listener_snapshot(&self) -> Vec<Arc<dyn UpdateListener>> {
        self.listeners().clone()
    }

    fn deliver_update(&self, station: &Arc<Station>) {
        for listener in self.listener_snapshot() {
            listener.on_station_update(station);
        }
    }

    fn deliver_up_to_date(&self, station: &Arc<Station>) {
        for listener in self.listener_snapshot() {
            listener.on_up_to_date(station);
        }
    }

    fn deliver_internet_error(&self) {
        for listener in self.listener_snapshot() {
            listener.on_internet_error();
        }
    }

    fn deliver_internal_error(&self) {
        for listener in self.listener_snapshot() {
            listener.on_internal_error();
        }
    }

    fn deliver_internet_off(&self) {
        for listener in self.listener_snapshot() {
            listener.on_internet_off();
        }
    }

    fn pending(&self) -> MutexGuard<'_, VecDeque<Arc<Station>>> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<Arc<dyn UpdateListener>>> {
        self.listeners.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn state(&self) -> MutexGuard<'_, ServiceState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{SortOrder, StationSeed};
    use crate::settings::{SharedSettings, UpdateSettings};
    use chrono::{Duration as ChronoDuration, Utc};
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    const UNROUTABLE: &str = "http://127.0.0.1:9";

    fn registry() -> Arc<StationRegistry> {
        Arc::new(StationRegistry::new(
            vec![
                StationSeed {
                    name: "Vigo".to_string(),
                    id: 36057,
                    latitude: 42.231397,
                    longitude: -8.712445,
                },
                StationSeed {
                    name: "A Coruña".to_string(),
                    id: 15030,
                    latitude: 43.370971,
                    longitude: -8.395824,
                },
            ],
            vec![],
        ))
    }

    fn short_feed(creation: &str) -> String {
        let tomorrow = (Utc::now() + ChronoDuration::days(1)).format("%d/%m/%Y");
        format!(
            r#"<rss version="2.0"><channel><item>
                <dataPredicion formato="dd/MM/yyyy">{tomorrow}</dataPredicion>
                <dataCreacion>{creation}</dataCreacion>
                <tMax>21</tMax><tMin>12</tMin>
                <ceoM>101</ceoM>
            </item></channel></rss>"#
        )
    }

    fn medium_feed(creation: &str) -> String {
        let in_two_days = (Utc::now() + ChronoDuration::days(2)).format("%d/%m/%Y");
        format!(
            r#"<rss version="2.0"><channel><item>
                <dataPredicion formato="dd/MM/yyyy">{in_two_days}</dataPredicion>
                <dataCreacion>{creation}</dataCreacion>
                <tMax>19</tMax><tMin>11</tMin>
                <ceo>105</ceo>
            </item></channel></rss>"#
        )
    }

    fn seed_feeds(dir: &Path, station_id: i32, creation: &str) {
        std::fs::write(
            dir.join(FeedKind::ShortTerm.cache_file_name(station_id)),
            short_feed(creation),
        )
        .unwrap();
        std::fs::write(
            dir.join(FeedKind::MediumTerm.cache_file_name(station_id)),
            medium_feed(creation),
        )
        .unwrap();
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }

        fn push(&self, event: &str) {
            self.events.lock().unwrap().push(event.to_string());
        }
    }

    impl UpdateListener for Recorder {
        fn on_station_update(&self, station: &Arc<Station>) {
            self.push(&format!("update:{}", station.id()));
        }
        fn on_up_to_date(&self, station: &Arc<Station>) {
            self.push(&format!("up_to_date:{}", station.id()));
        }
        fn on_internet_error(&self) {
            self.push("internet_error");
        }
        fn on_internal_error(&self) {
            self.push("internal_error");
        }
        fn on_internet_off(&self) {
            self.push("internet_off");
        }
    }

    struct Fixture {
        service: UpdateService,
        policy: Arc<SharedSettings>,
        recorder: Arc<Recorder>,
        _cache_dir: TempDir,
    }

    fn fixture(registry: Arc<StationRegistry>) -> Fixture {
        fixture_at(registry, UNROUTABLE)
    }

    fn fixture_at(registry: Arc<StationRegistry>, base_url: &str) -> Fixture {
        let cache_dir = tempdir().unwrap();
        let cache = FeedCache::builder()
            .cache_dir(cache_dir.path().to_path_buf())
            .base_url(base_url.to_string())
            .build();
        let policy = Arc::new(SharedSettings::default());
        let service = UpdateService::builder()
            .registry(registry)
            .cache(cache)
            .policy(Arc::clone(&policy) as Arc<dyn ServicePolicy>)
            .build();
        let recorder = Arc::new(Recorder::default());
        service.add_listener(Arc::clone(&recorder) as Arc<dyn UpdateListener>);
        Fixture {
            service,
            policy,
            recorder,
            _cache_dir: cache_dir,
        }
    }

    impl Fixture {
        fn cache_path(&self) -> &Path {
            self._cache_dir.path()
        }

        async fn step(&self, state: ServiceState) -> ServiceState {
            self.service.inner.step(state).await
        }

        fn enqueue(&self, station: Arc<Station>) {
            self.service.inner.pending().push_back(station);
        }
    }

    #[tokio::test]
    async fn created_state_branches_on_connectivity() {
        let registry = registry();
        let f = fixture(Arc::clone(&registry));
        registry.get_by_id(36057).unwrap().set_access_count(1);

        assert_eq!(f.step(ServiceState::Created).await, ServiceState::UpdateCycle);
        // The favorite station was queued for the widget.
        assert_eq!(f.service.pending_count(), 1);

        f.policy.set_connectivity(false);
        assert_eq!(f.step(ServiceState::Created).await, ServiceState::UpdateCached);
    }

    #[tokio::test]
    async fn update_cycle_refreshes_station_from_fresh_cache() {
        let registry = registry();
        let f = fixture(Arc::clone(&registry));
        let station = registry.get_by_id(36057).unwrap();
        seed_feeds(f.cache_path(), 36057, "2026-08-30T09:00:00Z");
        f.enqueue(Arc::clone(&station));

        assert_eq!(f.step(ServiceState::UpdateCycle).await, ServiceState::UpdateCycle);
        assert!(station.has_predictions());
        assert_eq!(station.predictions().len(), 2);
        assert_eq!(f.recorder.events(), vec!["update:36057"]);

        // Queue drained; the next step parks the worker.
        assert_eq!(
            f.step(ServiceState::UpdateCycle).await,
            ServiceState::WaitNextUpdate
        );
    }

    #[tokio::test]
    async fn unchanged_feed_reports_up_to_date_and_purges_queue() {
        let registry = registry();
        let f = fixture(Arc::clone(&registry));
        let station = registry.get_by_id(36057).unwrap();
        let other = registry.get_by_id(15030).unwrap();
        seed_feeds(f.cache_path(), 36057, "2026-08-30T09:00:00Z");
        seed_feeds(f.cache_path(), 15030, "2026-08-30T09:00:00Z");

        // First refresh populates the station.
        f.enqueue(Arc::clone(&station));
        f.step(ServiceState::UpdateCycle).await;

        // Second refresh of the same generation, with an already-predicted
        // station queued behind it.
        f.enqueue(Arc::clone(&other));
        f.step(ServiceState::UpdateCycle).await;
        f.enqueue(Arc::clone(&station));
        f.enqueue(Arc::clone(&other));
        f.step(ServiceState::UpdateCycle).await;

        let events = f.recorder.events();
        assert_eq!(
            events,
            vec!["update:36057", "update:15030", "up_to_date:36057"]
        );
        // Both queued stations already had data, so the purge emptied the
        // queue without refreshing the second one.
        assert_eq!(f.service.pending_count(), 0);
    }

    #[tokio::test]
    async fn cached_cycle_serves_storage_while_offline() {
        let registry = registry();
        let f = fixture(Arc::clone(&registry));
        f.policy.set_connectivity(false);
        let station = registry.get_by_id(15030).unwrap();
        seed_feeds(f.cache_path(), 15030, "2026-08-30T09:00:00Z");
        f.enqueue(Arc::clone(&station));

        assert_eq!(
            f.step(ServiceState::UpdateCached).await,
            ServiceState::UpdateCached
        );
        assert!(station.has_predictions());
        assert_eq!(
            f.step(ServiceState::UpdateCached).await,
            ServiceState::WaitConnection
        );
    }

    #[tokio::test]
    async fn cached_cycle_upgrades_when_connectivity_returns() {
        let f = fixture(registry());
        assert_eq!(
            f.step(ServiceState::UpdateCached).await,
            ServiceState::UpdateCycle
        );
    }

    /// Minimal HTTP server that answers every request with a 500.
    async fn serve_server_error() -> std::net::SocketAddr {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let mut buf = [0u8; 1024];
                    let _ = socket.read(&mut buf).await;
                    let _ = socket
                        .write_all(
                            b"HTTP/1.1 500 Internal Server Error\r\n\
                              content-length: 0\r\nconnection: close\r\n\r\n",
                        )
                        .await;
                });
            }
        });
        addr
    }

    #[tokio::test]
    async fn unreachable_feed_reports_internet_error_without_requeue() {
        let registry = registry();
        let f = fixture(Arc::clone(&registry));
        f.enqueue(registry.get_by_id(36057).unwrap());

        f.step(ServiceState::UpdateCycle).await;
        assert_eq!(f.recorder.events(), vec!["internet_error"]);
        assert_eq!(f.service.pending_count(), 0);
    }

    #[tokio::test]
    async fn server_error_requeues_station_at_the_tail() {
        let registry = registry();
        let addr = serve_server_error().await;
        let f = fixture_at(Arc::clone(&registry), &format!("http://{addr}"));
        f.enqueue(registry.get_by_id(36057).unwrap());
        f.enqueue(registry.get_by_id(15030).unwrap());

        assert_eq!(
            f.step(ServiceState::UpdateCycle).await,
            ServiceState::UpdateCycle
        );
        assert_eq!(f.recorder.events(), vec!["internet_error"]);
        // The server answered, so the refresh is worth retrying: the failed
        // station goes back in behind the rest of the queue.
        let pending = f.service.inner.pending();
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].id(), 15030);
        assert_eq!(pending[1].id(), 36057);
    }

    #[tokio::test]
    async fn unreadable_cache_entry_reports_internal_error() {
        let registry = registry();
        let f = fixture(Arc::clone(&registry));
        // A directory where the cache file should be: fresh by mtime, but
        // reading it fails with something other than not-found.
        std::fs::create_dir_all(
            f.cache_path()
                .join(FeedKind::ShortTerm.cache_file_name(36057)),
        )
        .unwrap();
        f.enqueue(registry.get_by_id(36057).unwrap());

        f.step(ServiceState::UpdateCycle).await;
        assert_eq!(f.recorder.events(), vec!["internal_error"]);
        assert_eq!(f.service.pending_count(), 0);
    }

    #[tokio::test]
    async fn parse_failure_evicts_both_cached_feeds() {
        let registry = registry();
        let f = fixture(Arc::clone(&registry));
        let station = registry.get_by_id(36057).unwrap();
        for kind in FeedKind::ALL {
            std::fs::write(
                f.cache_path().join(kind.cache_file_name(36057)),
                "<rss><channel><item></oops></channel></rss>",
            )
            .unwrap();
        }
        f.enqueue(Arc::clone(&station));

        f.step(ServiceState::UpdateCycle).await;
        assert_eq!(f.recorder.events(), vec!["internet_error"]);
        assert_eq!(f.service.pending_count(), 0);
        for kind in FeedKind::ALL {
            assert!(!f.cache_path().join(kind.cache_file_name(36057)).exists());
        }
    }

    #[tokio::test]
    async fn priority_request_wakes_wait_next_update_without_refill() {
        let registry = registry();
        let f = fixture(Arc::clone(&registry));
        let station = registry.get_by_id(15030).unwrap();

        // The wake permit is stored, so the wait returns immediately.
        f.service.request_priority_update(Arc::clone(&station));
        assert_eq!(
            f.step(ServiceState::WaitNextUpdate).await,
            ServiceState::UpdateCycle
        );
        assert_eq!(f.service.pending_count(), 1);
        assert_eq!(f.service.inner.pending()[0].id(), 15030);
    }

    #[tokio::test]
    async fn priority_request_moves_queued_station_to_front() {
        let registry = registry();
        let f = fixture(Arc::clone(&registry));
        f.enqueue(registry.get_by_id(36057).unwrap());
        f.enqueue(registry.get_by_id(15030).unwrap());

        f.service
            .request_priority_update(registry.get_by_id(15030).unwrap());
        let pending = f.service.inner.pending();
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].id(), 15030);
        assert_eq!(pending[1].id(), 36057);
    }

    #[tokio::test]
    async fn repeated_priority_requests_coalesce_at_the_front() {
        let registry = registry();
        let f = fixture(Arc::clone(&registry));
        let vigo = registry.get_by_id(36057).unwrap();
        let coruna = registry.get_by_id(15030).unwrap();

        f.service.request_priority_update(Arc::clone(&vigo));
        f.service.request_priority_update(Arc::clone(&coruna));
        f.service.request_priority_update(Arc::clone(&vigo));

        // The repeated station moved back to the front, no duplicate entry.
        let pending = f.service.inner.pending();
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].id(), 36057);
        assert_eq!(pending[1].id(), 15030);
    }

    #[tokio::test]
    async fn wait_connection_branches_on_wake_reason() {
        let registry = registry();
        let f = fixture(Arc::clone(&registry));

        // Online: resume the cycle without sleeping.
        assert_eq!(
            f.step(ServiceState::WaitConnection).await,
            ServiceState::UpdateCycle
        );

        // Offline with a stored wake from a priority request: serve caches.
        f.policy.set_connectivity(false);
        f.service
            .request_priority_update(registry.get_by_id(36057).unwrap());
        assert_eq!(
            f.step(ServiceState::WaitConnection).await,
            ServiceState::UpdateCached
        );
    }

    #[tokio::test]
    async fn wait_next_update_refills_in_favorites_order() {
        let registry = registry();
        let f = fixture(Arc::clone(&registry));
        registry.sort_stations(SortOrder::Alphabetic);
        registry.get_by_id(36057).unwrap().set_access_count(9);

        // A stored wake makes the sleep return immediately; no priority flag
        // is set, so the queue refills normally.
        f.service.inner.wake.notify_one();
        assert_eq!(
            f.step(ServiceState::WaitNextUpdate).await,
            ServiceState::UpdateCycle
        );
        let pending = f.service.inner.pending();
        assert_eq!(pending.len(), 2);
        // Registry order is alphabetic, but the queue is most-used-first.
        assert_eq!(pending[0].id(), 36057);
    }

    #[tokio::test]
    async fn per_cycle_limit_bounds_the_refill() {
        let registry = registry();
        let f = fixture(Arc::clone(&registry));
        f.policy.update(UpdateSettings {
            max_stations_per_cycle: 1,
            ..UpdateSettings::default()
        });

        f.service.inner.wake.notify_one();
        f.step(ServiceState::WaitNextUpdate).await;
        assert_eq!(f.service.pending_count(), 1);
    }

    #[tokio::test]
    async fn shutdown_stops_a_parked_worker() {
        let registry = registry();
        let f = fixture(registry);
        f.policy.set_connectivity(false);

        let handle = f.service.start();
        f.service.shutdown();
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("worker should stop promptly")
            .unwrap();
        assert_eq!(f.service.state(), ServiceState::Stopped);
    }

    #[tokio::test]
    async fn widget_follows_the_binding_rule() {
        struct FakeWidget {
            bound: Mutex<Option<Arc<Station>>>,
            shown: Mutex<Vec<i32>>,
        }

        impl WidgetSink for FakeWidget {
            fn station(&self) -> Option<Arc<Station>> {
                self.bound.lock().unwrap().clone()
            }
            fn show(&self, station: &Arc<Station>) {
                self.shown.lock().unwrap().push(station.id());
            }
        }

        let registry = registry();
        let station = registry.get_by_id(36057).unwrap();
        let other = registry.get_by_id(15030).unwrap();
        let widget = Arc::new(FakeWidget {
            bound: Mutex::new(None),
            shown: Mutex::new(Vec::new()),
        });

        let cache_dir = tempdir().unwrap();
        let cache = FeedCache::builder()
            .cache_dir(cache_dir.path().to_path_buf())
            .base_url(UNROUTABLE.to_string())
            .build();
        let service = UpdateService::builder()
            .registry(Arc::clone(&registry))
            .policy(Arc::new(SharedSettings::default()) as Arc<dyn ServicePolicy>)
            .cache(cache)
            .widget(Arc::clone(&widget) as Arc<dyn WidgetSink>)
            .build();

        // Unbound widget: always shown.
        service.inner.update_widget(&station);
        // Bound to an empty station: shown.
        *widget.bound.lock().unwrap() = Some(Arc::clone(&other));
        service.inner.update_widget(&station);
        // Bound to a different station that has data: skipped.
        other.set_predictions(
            vec![crate::model::prediction::Prediction::MediumTerm(
                crate::model::prediction::MediumTermPrediction {
                    date: Some(Utc::now() + ChronoDuration::days(1)),
                    ..Default::default()
                },
            )],
            true,
        );
        service.inner.update_widget(&station);
        // Bound to the refreshed station itself: shown.
        service.inner.update_widget(&other);

        assert_eq!(*widget.shown.lock().unwrap(), vec![36057, 36057, 15030]);
    }
}

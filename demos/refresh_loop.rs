//! Runs the update worker against the live MeteoGalicia feeds for a short
//! while, printing every listener event it delivers.

use meteogal::{
    ensure_cache_dir_exists, get_cache_dir, FeedCache, MeteogalError, ServicePolicy,
    SharedSettings, Station, StationRegistry, UpdateListener, UpdateService,
};
use std::sync::Arc;
use std::time::Duration;

struct PrintListener;

impl UpdateListener for PrintListener {
    fn on_station_update(&self, station: &Arc<Station>) {
        println!("updated {} ({} predictions)", station, station.predictions().len());
    }

    fn on_up_to_date(&self, station: &Arc<Station>) {
        println!("{} was already up to date", station);
    }

    fn on_internet_error(&self) {
        println!("internet error");
    }

    fn on_internal_error(&self) {
        println!("internal error");
    }

    fn on_internet_off(&self) {
        println!("no connectivity");
    }
}

#[tokio::main]
async fn main() -> Result<(), MeteogalError> {
    env_logger::init();

    let cache_dir = get_cache_dir()?;
    ensure_cache_dir_exists(&cache_dir).await?;

    let registry = Arc::new(StationRegistry::meteogalicia());
    let policy = Arc::new(SharedSettings::default());
    let service = UpdateService::builder()
        .registry(Arc::clone(&registry))
        .cache(FeedCache::builder().cache_dir(cache_dir).build())
        .policy(Arc::clone(&policy) as Arc<dyn ServicePolicy>)
        .build();
    service.add_listener(Arc::new(PrintListener));

    let worker = service.start();

    // Jump the queue for Santiago de Compostela, as a foreground UI would.
    if let Some(station) = registry.get_by_id(15078) {
        service.request_priority_update(station);
    }

    tokio::time::sleep(Duration::from_secs(60)).await;
    service.shutdown();
    let _ = worker.await;

    for station in registry.stations().iter().take(5) {
        println!(
            "{}: {} predictions cached",
            station,
            station.predictions().len()
        );
    }
    Ok(())
}

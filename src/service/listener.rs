use crate::model::station::Station;
use std::sync::Arc;

/// Outbound notifications from the update worker.
///
/// Callbacks run on the worker task with no queue lock held; implementations
/// should hand heavy work off rather than block the worker. All methods
/// default to no-ops so a listener only implements the events it cares about.
pub trait UpdateListener: Send + Sync {
    /// A station's predictions changed.
    fn on_station_update(&self, _station: &Arc<Station>) {}

    /// A refresh ran but the upstream feed had not been regenerated.
    fn on_up_to_date(&self, _station: &Arc<Station>) {}

    /// A refresh failed on the network side or on feed content.
    fn on_internet_error(&self) {}

    /// A refresh failed inside the process (storage, task scheduling).
    fn on_internal_error(&self) {}

    /// The worker finished an iteration without connectivity.
    fn on_internet_off(&self) {}
}

/// A desktop-widget style display slot fed by the update worker.
///
/// The worker pushes a freshly updated station to the widget when the widget
/// is unbound, bound to a station with no data yet, or bound to the station
/// that was just refreshed.
pub trait WidgetSink: Send + Sync {
    /// The station the widget is currently bound to, if any.
    fn station(&self) -> Option<Arc<Station>>;

    /// Renders the given station.
    fn show(&self, station: &Arc<Station>);
}

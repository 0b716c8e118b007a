use std::fmt;

/// The update worker's state machine.
///
/// The worker owns the state and drives one transition per loop iteration;
/// external events (priority requests, connectivity changes, shutdown) only
/// set flags and wake the current wait, they never mutate the state directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    /// Initial state: seed the queue with the widget station, then branch on
    /// connectivity.
    Created,
    /// Draining the pending queue against the network.
    UpdateCycle,
    /// Draining the pending queue from storage only, while offline.
    UpdateCached,
    /// Offline with nothing left to serve; poll connectivity periodically.
    WaitConnection,
    /// Idle between update cycles.
    WaitNextUpdate,
    /// Terminal; the worker loop exits.
    Stopped,
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ServiceState::Created => "CREATED",
            ServiceState::UpdateCycle => "UPDATE_CYCLE",
            ServiceState::UpdateCached => "UPDATE_CACHED",
            ServiceState::WaitConnection => "WAIT_CONNECTION",
            ServiceState::WaitNextUpdate => "WAIT_NEXT_UPDATE",
            ServiceState::Stopped => "STOPPED",
        })
    }
}

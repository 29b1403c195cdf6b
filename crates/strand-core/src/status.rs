use serde::{Deserialize, Serialize};

/// Snapshot of backlog occupancy.
///
/// `pending` counts entries that have not been claimed by the drain
/// loop yet; `in_flight` is true while the head entry is executing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStatus {
    pub pending: usize,
    pub in_flight: bool,
}

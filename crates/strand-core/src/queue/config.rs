//! Queue configuration, resolved once at construction.

use serde::{Deserialize, Serialize};

/// Configuration for an [`super::OrderedQueue`].
///
/// All fields have safe defaults; construction never fails. The config
/// is immutable for the life of the queue instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Maximum backlog size. `None` means unbounded. When an admission
    /// would exceed it, the oldest not-yet-started entries are evicted
    /// first.
    pub capacity: Option<usize>,

    /// Hand the scheduler a turn after each completed item (never
    /// after the item that empties the backlog). Per-item
    /// `yield_after` overrides this.
    pub yield_after_each: bool,

    /// What the drain loop does when an action settles with a failure.
    pub on_failure: FailurePolicy,
}

impl QueueConfig {
    /// A capacity-bounded config with everything else defaulted.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }
}

/// Failure handling policy for the drain loop.
///
/// Either way the failed item is removed from the backlog; the policy
/// only decides what happens to the rest of the drain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Log the failure and keep draining. The caller of `start()`
    /// observes nothing.
    #[default]
    Swallow,

    /// Stop draining and return the failure from `start()`. Remaining
    /// items stay queued for a later `start()`.
    Propagate,
}

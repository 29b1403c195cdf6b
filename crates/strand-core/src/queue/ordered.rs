//! The ordered queue: bounded admission plus a self-draining loop.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use super::config::{FailurePolicy, QueueConfig};
use super::entry::QueueEntry;
use crate::error::QueueError;
use crate::status::QueueStatus;
use crate::task::Submission;

/// An in-process sequencer: items run strictly in insertion order, one
/// at a time, with a bounded backlog.
///
/// Design:
/// - The backlog is the single source of truth. At most one entry is
///   started at any time, and if one is, it is the entry at index 0.
/// - Enqueue is synchronous and atomic with respect to the backlog;
///   the mutex is never held across an await, so enqueueing while a
///   drain is in progress is always safe.
/// - `start()` is single-flight: overlapping calls see the started
///   head and return immediately.
pub struct OrderedQueue {
    backlog: Mutex<VecDeque<QueueEntry>>,
    config: QueueConfig,
    next_seq: AtomicU64,
}

impl OrderedQueue {
    pub fn new(config: QueueConfig) -> Self {
        Self {
            backlog: Mutex::new(VecDeque::new()),
            config,
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Append one item to the tail, evicting the oldest pending entry
    /// first if the backlog is at capacity. Chainable; never fails.
    pub fn enqueue(&self, item: impl Into<Submission>) -> &Self {
        self.admit(vec![item.into()]);
        self
    }

    /// Convenience for a bare async closure with no per-item options.
    pub fn enqueue_fn<F, Fut>(&self, action: F) -> &Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), String>> + Send + 'static,
    {
        self.admit(vec![Submission::bare(action)]);
        self
    }

    /// Append a batch in the given order, with the same per-item
    /// capacity handling as [`OrderedQueue::enqueue`], atomically.
    pub fn enqueue_all<I>(&self, items: I) -> &Self
    where
        I: IntoIterator<Item = Submission>,
    {
        self.admit(items.into_iter().collect());
        self
    }

    /// Admission: items are admitted in order, each one evicting the
    /// oldest not-yet-started entry first if its append would exceed
    /// capacity. One lock scope, no await.
    fn admit(&self, items: Vec<Submission>) {
        let mut backlog = self.backlog.lock().unwrap();
        let mut evicted = 0usize;

        for item in items {
            if let Some(capacity) = self.config.capacity {
                let mut needed = (backlog.len() + 1).saturating_sub(capacity);
                // Oldest eligible first: scan from the head, skipping a
                // started entry (only the head can be one). If nothing
                // is eligible, stop early; the backlog may then exceed
                // capacity by the started entry.
                while needed > 0 {
                    let Some(pos) = backlog.iter().position(|e| !e.is_started()) else {
                        break;
                    };
                    backlog.remove(pos);
                    evicted += 1;
                    needed -= 1;
                }
            }
            let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
            backlog.push_back(QueueEntry::new(item.into_item(), seq));
        }

        if evicted > 0 {
            debug!(evicted, "evicted oldest pending entries to stay within capacity");
        }
    }

    /// Drain the backlog: claim the head, run it, remove it, repeat.
    ///
    /// Returns immediately if the backlog is empty or the head is
    /// already started (another drain owns it). Resolves once the
    /// backlog it observed has been fully consumed; the queue is
    /// reusable afterward.
    ///
    /// Suspends at exactly two points per iteration: awaiting the
    /// action, and the optional yield back to the scheduler. The head
    /// is re-read by position each iteration, so items enqueued
    /// mid-drain are picked up.
    ///
    /// Only returns `Err` under [`FailurePolicy::Propagate`]; the
    /// failed item is removed either way.
    pub async fn start(&self) -> Result<(), QueueError> {
        loop {
            let (seq, action, yield_override) = {
                let mut backlog = self.backlog.lock().unwrap();
                let Some(head) = backlog.front_mut() else {
                    return Ok(());
                };
                let Some(action) = head.claim() else {
                    // Another drain chain owns this head.
                    return Ok(());
                };
                (head.seq(), action, head.yield_after())
            };

            // Run with the backlog unlocked so enqueue never blocks on
            // an in-flight action.
            let outcome = action().await;

            // The started head is pinned at index 0 (eviction skips
            // it), so this removal is the entry we just ran.
            let yield_now = {
                let mut backlog = self.backlog.lock().unwrap();
                let finished = backlog.pop_front();
                debug_assert!(finished.is_some_and(|e| e.is_started() && e.seq() == seq));
                !backlog.is_empty() && yield_override.unwrap_or(self.config.yield_after_each)
            };

            if let Err(message) = outcome {
                match self.config.on_failure {
                    FailurePolicy::Swallow => {
                        warn!(seq, error = %message, "task failed; continuing drain");
                    }
                    FailurePolicy::Propagate => {
                        return Err(QueueError::TaskFailed { seq, message });
                    }
                }
            }

            if yield_now {
                tokio::task::yield_now().await;
            }
        }
    }

    /// Total backlog size, including an in-flight head.
    pub fn len(&self) -> usize {
        self.backlog.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.backlog.lock().unwrap().is_empty()
    }

    /// Occupancy snapshot.
    pub fn status(&self) -> QueueStatus {
        let backlog = self.backlog.lock().unwrap();
        let in_flight = backlog.front().is_some_and(QueueEntry::is_started);
        QueueStatus {
            pending: backlog.len() - usize::from(in_flight),
            in_flight,
        }
    }
}

impl Default for OrderedQueue {
    fn default() -> Self {
        Self::new(QueueConfig::default())
    }
}

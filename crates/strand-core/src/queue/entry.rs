//! Backlog entry: a normalized work item plus its runtime flag.

use crate::task::{Action, WorkItem};

/// A work item as it sits in the backlog.
///
/// Design:
/// - `started` flips to true exactly once, via [`QueueEntry::claim`],
///   immediately before the drain loop invokes the action.
/// - Eviction only ever targets entries with `started = false`.
/// - `seq` is an admission-order sequence number, used for log and
///   error identification only.
pub(crate) struct QueueEntry {
    seq: u64,
    action: Option<Action>,
    yield_after: Option<bool>,
    started: bool,
}

impl QueueEntry {
    pub(crate) fn new(item: WorkItem, seq: u64) -> Self {
        Self {
            seq,
            action: Some(item.action),
            yield_after: item.yield_after,
            started: false,
        }
    }

    pub(crate) fn seq(&self) -> u64 {
        self.seq
    }

    pub(crate) fn is_started(&self) -> bool {
        self.started
    }

    pub(crate) fn yield_after(&self) -> Option<bool> {
        self.yield_after
    }

    /// Mark the entry started and take its action out. Returns `None`
    /// if the entry was already claimed.
    pub(crate) fn claim(&mut self) -> Option<Action> {
        if self.started {
            return None;
        }
        self.started = true;
        self.action.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_takes_the_action_exactly_once() {
        let mut entry = QueueEntry::new(WorkItem::new(|| async { Ok(()) }), 7);
        assert!(!entry.is_started());
        assert!(entry.claim().is_some());
        assert!(entry.is_started());
        assert!(entry.claim().is_none());
        assert_eq!(entry.seq(), 7);
    }
}

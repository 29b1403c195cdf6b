//! Admission-boundary types: actions, work items, submissions.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Future produced by an action. The success value is never inspected
/// by the queue; the `Err` arm is how an action signals failure.
pub type ActionFuture = Pin<Box<dyn Future<Output = Result<(), String>> + Send>>;

/// A queued unit of work: invoked exactly once, by the drain loop.
pub type Action = Box<dyn FnOnce() -> ActionFuture + Send>;

/// A work item: an action plus optional per-item overrides.
///
/// Immutable once admitted; the queue only adds its own runtime flag
/// on top (see the internal backlog entry).
pub struct WorkItem {
    pub(crate) action: Action,
    /// Overrides the queue's yield-after-each default for this item.
    /// `None` means "use the config default".
    pub(crate) yield_after: Option<bool>,
}

impl WorkItem {
    /// Wrap an async closure as a work item with no overrides.
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), String>> + Send + 'static,
    {
        Self {
            action: Box::new(move || Box::pin(action()) as ActionFuture),
            yield_after: None,
        }
    }

    /// Set the per-item yield override.
    pub fn yield_after(mut self, yield_after: bool) -> Self {
        self.yield_after = Some(yield_after);
        self
    }
}

impl fmt::Debug for WorkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkItem")
            .field("yield_after", &self.yield_after)
            .finish_non_exhaustive()
    }
}

/// What callers hand to `enqueue`: either a bare action or a full
/// [`WorkItem`].
///
/// Normalization happens exactly once, at admission time; past that
/// boundary the queue only ever sees one internal record shape.
pub enum Submission {
    /// A bare action with no per-item options.
    Action(Action),
    /// An action with per-item overrides.
    Item(WorkItem),
}

impl Submission {
    /// Wrap an async closure as a bare submission.
    pub fn bare<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), String>> + Send + 'static,
    {
        Submission::Action(Box::new(move || Box::pin(action()) as ActionFuture))
    }

    pub(crate) fn into_item(self) -> WorkItem {
        match self {
            Submission::Action(action) => WorkItem {
                action,
                yield_after: None,
            },
            Submission::Item(item) => item,
        }
    }
}

impl From<WorkItem> for Submission {
    fn from(item: WorkItem) -> Self {
        Submission::Item(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bare_submission_normalizes_without_override() {
        let sub = Submission::bare(|| async { Ok(()) });
        let item = sub.into_item();
        assert_eq!(item.yield_after, None);
        (item.action)().await.unwrap();
    }

    #[tokio::test]
    async fn work_item_keeps_its_override_through_normalization() {
        let item = WorkItem::new(|| async { Ok(()) }).yield_after(false);
        let normalized = Submission::from(item).into_item();
        assert_eq!(normalized.yield_after, Some(false));
        (normalized.action)().await.unwrap();
    }

    #[tokio::test]
    async fn action_failure_comes_back_as_err() {
        let item = WorkItem::new(|| async { Err("boom".to_string()) });
        let err = (item.action)().await.unwrap_err();
        assert_eq!(err, "boom");
    }
}

//! strand-core
//!
//! An in-process task sequencer: work items run strictly one after
//! another in insertion order, the backlog is bounded by evicting the
//! oldest not-yet-started items, and the drain loop can hand the
//! scheduler a turn between items.
//!
//! # Module map
//! - **task**: admission-boundary types ([`WorkItem`], [`Submission`],
//!   the boxed [`Action`])
//! - **queue**: configuration and the [`OrderedQueue`] component
//! - **status**: occupancy snapshot for observability
//! - **error**: error type (only surfaced under
//!   [`FailurePolicy::Propagate`])

pub mod error;
pub mod queue;
pub mod status;
pub mod task;

pub use error::QueueError;
pub use queue::{FailurePolicy, OrderedQueue, QueueConfig};
pub use status::QueueStatus;
pub use task::{Action, ActionFuture, Submission, WorkItem};

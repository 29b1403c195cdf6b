//! Queue module: configuration, backlog entries, and the ordered queue.

mod config;
mod entry;
mod ordered;

pub use config::{FailurePolicy, QueueConfig};
pub use ordered::OrderedQueue;

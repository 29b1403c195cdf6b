use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueueError {
    /// An action settled with a failure while the queue was configured
    /// to propagate failures. `seq` is the admission sequence number of
    /// the failed item.
    #[error("task {seq} failed: {message}")]
    TaskFailed { seq: u64, message: String },
}

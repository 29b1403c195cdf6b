use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use strand_core::{FailurePolicy, OrderedQueue, QueueConfig, WorkItem};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // (A) a bounded queue that yields to the scheduler between items
    let queue = Arc::new(OrderedQueue::new(QueueConfig {
        capacity: Some(4),
        yield_after_each: true,
        on_failure: FailurePolicy::Swallow,
    }));

    // (B) enqueue more than fits; the oldest pending items are evicted
    let completed = Arc::new(AtomicU32::new(0));
    for i in 0..6 {
        let completed = Arc::clone(&completed);
        queue.enqueue_fn(move || async move {
            println!("running item {i}");
            completed.fetch_add(1, Ordering::Relaxed);
            Ok(())
        });
    }

    // (C) one item that fails on purpose; Swallow logs it and moves on
    queue.enqueue(
        WorkItem::new(|| async { Err("intentional failure".to_string()) }).yield_after(false),
    );

    println!("before drain: {:?}", queue.status());

    queue.start().await.unwrap();

    println!(
        "after drain: {:?} (completed={})",
        queue.status(),
        completed.load(Ordering::Relaxed)
    );
}

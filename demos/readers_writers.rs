// SPDX-License-Identifier: MIT OR Apache-2.0
//! Readers and writers contending for one [`WriterPriorityLock`].
//!
//! Spawns 6 readers, 3 writers, 6 more readers and 3 more writers. Readers
//! hold shared access for a second, writers hold exclusive access for two.
//! Watch the log: once the first writer is waiting, the second wave of
//! readers does not start reading until every queued writer has finished.
//!
//! ```text
//! cargo run --example readers_writers
//! RUST_LOG=trace cargo run --example readers_writers   # also show lock internals
//! ```

use std::sync::Arc;
use std::thread;
use std::time::Duration;
use writer_priority_lock::WriterPriorityLock;

const READ_HOLD: Duration = Duration::from_secs(1);
const WRITE_HOLD: Duration = Duration::from_secs(2);

fn read_value(lock: &WriterPriorityLock) {
    lock.acquire_shared();
    tracing::info!(thread = ?thread::current().id(), "is reading");
    thread::sleep(READ_HOLD);
    tracing::info!(thread = ?thread::current().id(), "read done");
    lock.release_shared();
}

fn write_value(lock: &WriterPriorityLock) {
    lock.acquire_exclusive();
    tracing::info!(thread = ?thread::current().id(), "is writing");
    thread::sleep(WRITE_HOLD);
    lock.release_exclusive();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_thread_ids(true)
        .init();

    let lock = Arc::new(WriterPriorityLock::new());
    let mut threads = Vec::new();

    for (count, writer) in [(6, false), (3, true), (6, false), (3, true)] {
        for _ in 0..count {
            let lock = Arc::clone(&lock);
            threads.push(thread::spawn(move || {
                if writer {
                    write_value(&lock);
                } else {
                    read_value(&lock);
                }
            }));
        }
    }

    for handle in threads {
        if handle.join().is_err() {
            tracing::error!("worker thread panicked");
        }
    }
    tracing::info!(state = ?lock.state(), "all threads finished");
}

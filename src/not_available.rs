// SPDX-License-Identifier: MIT OR Apache-2.0
/// Error returned when a lock cannot be acquired without waiting.
///
/// Returned by the `try_` methods of [`WriterPriorityLock`](crate::WriterPriorityLock)
/// and [`RwLock`](crate::RwLock). A failed `try_` call leaves the lock exactly
/// as it found it; in particular a failed exclusive attempt does not register
/// as a waiting writer.
///
/// # Examples
///
/// ```
/// use writer_priority_lock::{NotAvailable, WriterPriorityLock};
///
/// let lock = WriterPriorityLock::new();
/// let _writer = lock.write();
///
/// match lock.try_acquire_shared() {
///     Ok(()) => panic!("a writer holds the lock"),
///     Err(NotAvailable) => println!("lock is busy, doing something else"),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotAvailable;

impl std::fmt::Display for NotAvailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lock not available")
    }
}

impl std::error::Error for NotAvailable {}

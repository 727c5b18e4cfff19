// SPDX-License-Identifier: MIT OR Apache-2.0
//! A data-carrying reader/writer lock with writer priority.
//!
//! [`RwLock<T>`] pairs a value with a [`WriterPriorityLock`](crate::WriterPriorityLock)
//! and only hands out the value through guards: [`ReadGuard`](crate::ReadGuard)
//! for shared access and [`WriteGuard`](crate::WriteGuard) for exclusive access.
//! Admission follows the writer-priority rule: while a writer is waiting, new
//! readers wait too.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use writer_priority_lock::RwLock;
//!
//! let rwlock = RwLock::new(42);
//!
//! // Multiple readers can access simultaneously
//! let guard1 = rwlock.read();
//! let guard2 = rwlock.read();
//! assert_eq!(*guard1, 42);
//! assert_eq!(*guard2, 42);
//! drop(guard1);
//! drop(guard2);
//!
//! // Writer gets exclusive access
//! let mut guard = rwlock.write();
//! *guard = 100;
//! drop(guard);
//!
//! assert_eq!(*rwlock.read(), 100);
//! ```
//!
//! ## Try Lock
//!
//! ```
//! use writer_priority_lock::{NotAvailable, RwLock};
//!
//! let rwlock = RwLock::new("data");
//!
//! let guard1 = rwlock.try_read().unwrap();
//! let guard2 = rwlock.try_read().unwrap();
//! assert_eq!(*guard1, "data");
//! assert_eq!(*guard2, "data");
//!
//! // Write lock fails while readers are active
//! assert!(matches!(rwlock.try_write(), Err(NotAvailable)));
//! ```
//!
//! ## Sharing Between Threads
//!
//! ```
//! # // std::thread::spawn panics on wasm32
//! # if cfg!(target_arch = "wasm32") { return; }
//! use writer_priority_lock::RwLock;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let rwlock = Arc::new(RwLock::new(vec![1, 2, 3, 4, 5]));
//! let mut handles = vec![];
//!
//! for _ in 0..3 {
//!     let rwlock = Arc::clone(&rwlock);
//!     handles.push(thread::spawn(move || rwlock.with_sync(|v| v.iter().sum::<i32>())));
//! }
//!
//! let writer = Arc::clone(&rwlock);
//! thread::spawn(move || writer.with_mut_sync(|v| v.push(6)))
//!     .join()
//!     .unwrap();
//!
//! for handle in handles {
//!     let sum = handle.join().unwrap();
//!     assert!(sum == 15 || sum == 21);
//! }
//! ```

mod inner;

#[cfg(test)]
mod tests;

pub use inner::RwLock;

// SPDX-License-Identifier: MIT OR Apache-2.0
//! The writer-priority reader/writer lock.
//!
//! # Writer priority
//!
//! A plain reader/writer lock admits a new reader whenever no writer is
//! *holding* the lock. Under a steady stream of overlapping readers, a writer
//! can then wait forever. [`WriterPriorityLock`] closes that gap: the moment a
//! writer starts waiting it is counted in `writers_waiting`, and a reader may
//! only enter while that count is zero. Readers already inside finish
//! normally; readers arriving later queue up behind every writer that was
//! waiting when they arrived.
//!
//! | Situation                       | New reader     | New writer                      |
//! |---------------------------------|----------------|---------------------------------|
//! | Idle                            | enters         | enters                          |
//! | Readers inside, no writer queued| enters         | queues, blocks further readers  |
//! | Writer queued                   | waits          | queues                          |
//! | Writer inside                   | waits          | queues                          |
//!
//! Priority is all that is promised. Readers are not ordered among
//! themselves, and any queued writer may be the next one in. Under constant
//! write pressure readers can starve.
//!
//! # Two interfaces
//!
//! The four bare operations ([`acquire_shared`](WriterPriorityLock::acquire_shared),
//! [`release_shared`](WriterPriorityLock::release_shared),
//! [`acquire_exclusive`](WriterPriorityLock::acquire_exclusive),
//! [`release_exclusive`](WriterPriorityLock::release_exclusive)) must be paired
//! by the caller. The lock does not know which thread holds what, so an
//! unmatched or doubled release corrupts its counters (debug builds catch the
//! obvious cases with an assertion). [`read`](WriterPriorityLock::read) and
//! [`write`](WriterPriorityLock::write) return guards that do the pairing.
//!
//! # Examples
//!
//! ```
//! # // std::thread::spawn panics on wasm32
//! # if cfg!(target_arch = "wasm32") { return; }
//! use writer_priority_lock::WriterPriorityLock;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let lock = Arc::new(WriterPriorityLock::new());
//! let mut handles = Vec::new();
//!
//! for _ in 0..4 {
//!     let lock = Arc::clone(&lock);
//!     handles.push(thread::spawn(move || {
//!         lock.acquire_shared();
//!         // read the shared resource
//!         lock.release_shared();
//!     }));
//! }
//!
//! let writer = Arc::clone(&lock);
//! handles.push(thread::spawn(move || {
//!     let _guard = writer.write();
//!     // modify the shared resource
//! }));
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(lock.state().reader_count, 0);
//! ```

mod exclusive;
mod inner;
mod shared;


pub use inner::{LockState, WriterPriorityLock};

// SPDX-License-Identifier: MIT OR Apache-2.0
//! A writer-priority reader/writer lock for native and WebAssembly targets.
//!
//! Many threads may hold shared (read) access at once; one thread at a time may
//! hold exclusive (write) access, with no readers. What sets this lock apart
//! is its admission rule: **as soon as a writer starts waiting, no new reader
//! is admitted** until the waiting writers have been through. A steady stream
//! of overlapping readers can therefore never starve a writer.
//!
//! The crate offers two layers:
//!
//! - [`WriterPriorityLock`]: the bare protocol, four operations
//!   ([`acquire_shared`](WriterPriorityLock::acquire_shared),
//!   [`release_shared`](WriterPriorityLock::release_shared),
//!   [`acquire_exclusive`](WriterPriorityLock::acquire_exclusive),
//!   [`release_exclusive`](WriterPriorityLock::release_exclusive)) plus
//!   guard-returning [`read`](WriterPriorityLock::read) and
//!   [`write`](WriterPriorityLock::write).
//! - [`RwLock<T>`]: the same lock bound to a value, accessed through
//!   [`ReadGuard`] and [`WriteGuard`].
//!
//! Behaviour is tuned at construction with a [`Config`]; see [`WakePolicy`]
//! and [`WaitStrategy`].
//!
//! # Not provided
//!
//! Reentrant acquisition, upgrading or downgrading a held lock, timeouts and
//! cancellation of a pending acquisition, and any ordering among readers or
//! among writers beyond writer priority.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events: `trace` for every acquire and release,
//! `debug` when an acquisition has to wait. Install a subscriber to see them.
//!
//! # Examples
//!
//! ```
//! use writer_priority_lock::RwLock;
//!
//! let config = RwLock::new(String::from("v1"));
//!
//! let current = config.with_sync(|s| s.clone());
//! assert_eq!(current, "v1");
//!
//! config.with_mut_sync(|s| *s = String::from("v2"));
//! assert_eq!(&*config.read(), "v2");
//! ```

mod condvar;
pub mod config;
mod gate;
mod guard;
pub mod lock;
mod not_available;
pub mod rwlock;
mod spinlock;
#[cfg(target_arch = "wasm32")]
mod wasm_support;

pub use config::{Config, WaitStrategy, WakePolicy};
pub use guard::{ExclusiveGuard, ReadGuard, SharedGuard, WriteGuard};
pub use lock::{LockState, WriterPriorityLock};
pub use not_available::NotAvailable;
pub use rwlock::RwLock;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

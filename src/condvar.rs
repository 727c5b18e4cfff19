// SPDX-License-Identifier: MIT OR Apache-2.0
//! Wait queues bound to a [`Gate`](crate::gate::Gate).
//!
//! A [`Condvar`] lets a thread holding a gate give it up, sleep until another
//! thread signals that the guarded state changed, and take the gate back. A
//! wake is only a hint: callers re-test their predicate after every wake,
//! which the `wait_*_while` methods do for them.
//!
//! Each waiter owns its notification flag. A waiter leaves the queue only
//! when a notifier pops it and sets that flag, so:
//!
//! - a spurious return from `thread::park` puts the thread straight back to sleep,
//! - a notification is never spent on a thread that already stopped waiting,
//! - a notification sent between "release the gate" and "park" is not lost.

use crate::spinlock::Spinlock;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::thread;

#[cfg(target_arch = "wasm32")]
pub(crate) use crate::wasm_support::atomics_wait_supported;

#[derive(Debug)]
struct Waiter {
    /// `None` for spinning waiters, which poll `notified` instead of parking.
    thread: Option<thread::Thread>,
    notified: Arc<AtomicBool>,
}

#[derive(Debug)]
pub(crate) struct Condvar {
    waiters: Spinlock<VecDeque<Waiter>>,
}

impl Condvar {
    pub(crate) const fn new() -> Self {
        Condvar {
            waiters: Spinlock::new(VecDeque::new()),
        }
    }

    /// Adds a waiter to the back of the queue and returns its flag.
    ///
    /// Must be called while the caller still holds the gate.
    fn enqueue(&self, thread: Option<thread::Thread>) -> Arc<AtomicBool> {
        let notified = Arc::new(AtomicBool::new(false));
        let waiter = Waiter {
            thread,
            notified: Arc::clone(&notified),
        };
        self.waiters.with_mut(|queue| queue.push_back(waiter));
        notified
    }

    /// Number of threads currently queued.
    pub(crate) fn waiting(&self) -> usize {
        self.waiters.with_mut(|queue| queue.len())
    }
}

impl Default for Condvar {
    fn default() -> Self {
        Condvar::new()
    }
}

mod notify;
mod wait;

#[cfg(test)]
mod tests;

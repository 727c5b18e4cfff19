// SPDX-License-Identifier: MIT OR Apache-2.0
use super::{Condvar, Waiter};
use std::sync::atomic::Ordering;

impl Waiter {
    fn wake(self) {
        self.notified.store(true, Ordering::Release);
        if let Some(thread) = self.thread {
            thread.unpark();
        }
    }
}

impl Condvar {
    /// Wakes the longest-queued waiter, if any.
    ///
    /// Returns `true` if a waiter was woken.
    pub(crate) fn notify_one(&self) -> bool {
        let waiter = self.waiters.with_mut(|queue| queue.pop_front());
        match waiter {
            Some(waiter) => {
                waiter.wake();
                true
            }
            None => false,
        }
    }

    /// Wakes every queued waiter and returns how many there were.
    pub(crate) fn notify_all(&self) -> usize {
        let waiters = self.waiters.with_mut(std::mem::take);
        let count = waiters.len();
        for waiter in waiters {
            waiter.wake();
        }
        count
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! The protecting gate: mutual exclusion over a lock's counters.
//!
//! A [`Gate`] is only ever held for the few instructions it takes to inspect
//! or update a [`LockState`](crate::LockState). Threads that find it closed
//! either spin or park, depending on the acquisition method:
//!
//! - **`try_lock`**: one attempt, no waiting
//! - **`lock_spin`**: busy-wait
//! - **`lock_block`**: park until the holder releases (panics on a wasm main thread)
//! - **`lock_sync`**: `lock_block` where parking is allowed, `lock_spin` otherwise

use crate::NotAvailable;
use crate::guard::GateGuard;
use crate::spinlock::Spinlock;
use std::cell::UnsafeCell;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering::{Acquire, Relaxed};
use std::thread;

#[derive(Debug)]
pub(crate) struct Gate<T> {
    pub(crate) data: UnsafeCell<T>,
    pub(crate) closed: AtomicBool,
    pub(crate) parked: Spinlock<Vec<thread::Thread>>,
}

impl<T> Gate<T> {
    pub(crate) const fn new(value: T) -> Self {
        Gate {
            data: UnsafeCell::new(value),
            closed: AtomicBool::new(false),
            parked: Spinlock::new(Vec::new()),
        }
    }

    pub(crate) fn try_lock(&self) -> Result<GateGuard<'_, T>, NotAvailable> {
        if self
            .closed
            .compare_exchange(false, true, Acquire, Relaxed)
            .is_ok()
        {
            // SAFETY: we flipped `closed` from false to true, so we are the
            // only holder until the guard drops.
            let data = unsafe { &mut *self.data.get() };
            Ok(GateGuard { gate: self, data })
        } else {
            Err(NotAvailable)
        }
    }

    pub(crate) fn lock_spin(&self) -> GateGuard<'_, T> {
        loop {
            match self.try_lock() {
                Ok(guard) => return guard,
                Err(NotAvailable) => std::hint::spin_loop(),
            }
        }
    }

    pub(crate) fn lock_block(&self) -> GateGuard<'_, T> {
        loop {
            // Attempt and registration happen under the list lock, so a
            // release cannot slip in between them unnoticed.
            let r = self.parked.with_mut(|threads| match self.try_lock() {
                Ok(guard) => Ok(guard),
                Err(NotAvailable) => {
                    threads.push(thread::current());
                    Err(NotAvailable)
                }
            });
            match r {
                Ok(guard) => return guard,
                Err(NotAvailable) => thread::park(),
            }
        }
    }

    pub(crate) fn lock_sync(&self) -> GateGuard<'_, T> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.lock_block()
        }
        #[cfg(target_arch = "wasm32")]
        {
            if crate::wasm_support::atomics_wait_supported() {
                self.lock_block()
            } else {
                self.lock_spin()
            }
        }
    }

    /// Called by [`GateGuard`]'s `Drop` after the gate has been reopened.
    pub(crate) fn did_unlock(&self) {
        let threads = self.parked.with_mut(std::mem::take);
        for thread in threads {
            thread.unpark();
        }
    }
}

unsafe impl<T: Send> Send for Gate<T> {}
unsafe impl<T: Send> Sync for Gate<T> {}

#[cfg(test)]
mod tests {
    use super::Gate;
    use crate::NotAvailable;
    use std::sync::Arc;
    use std::thread;

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    #[test]
    fn try_lock_excludes_second_holder() {
        let gate = Gate::new(0usize);
        let mut guard = gate.try_lock().unwrap();
        *guard = 7;
        assert!(matches!(gate.try_lock(), Err(NotAvailable)));
        drop(guard);
        assert_eq!(*gate.try_lock().unwrap(), 7);
    }

    #[test]
    fn block_and_spin_serialize_updates() {
        let gate = Arc::new(Gate::new(0usize));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let gate = Arc::clone(&gate);
                thread::spawn(move || {
                    for _ in 0..200 {
                        let mut guard = if t % 2 == 0 {
                            gate.lock_block()
                        } else {
                            gate.lock_spin()
                        };
                        let seen = *guard;
                        thread::yield_now();
                        *guard = seen + 1;
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(*gate.lock_sync(), 1600);
    }
}

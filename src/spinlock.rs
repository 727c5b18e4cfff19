// SPDX-License-Identifier: MIT OR Apache-2.0
//! A tiny spinlock guarding the waiter lists of [`Gate`](crate::gate::Gate) and
//! [`Condvar`](crate::condvar::Condvar).
//!
//! Critical sections under this lock are a push or a drain of a short list, so
//! spinning is cheaper than parking. The data is only reachable through
//! [`Spinlock::with_mut`], which keeps every access scoped.

use std::cell::UnsafeCell;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
pub(crate) struct Spinlock<T> {
    data: UnsafeCell<T>,
    locked: AtomicBool,
}

impl<T> Spinlock<T> {
    pub(crate) const fn new(data: T) -> Self {
        Spinlock {
            data: UnsafeCell::new(data),
            locked: AtomicBool::new(false),
        }
    }

    /// Runs `f` with exclusive access to the protected data.
    ///
    /// The lock is released when `f` returns, including when it unwinds.
    pub(crate) fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        while self.locked.swap(true, Ordering::Acquire) {
            std::hint::spin_loop();
        }
        let _unlock = Unlock(&self.locked);
        // SAFETY: `locked` was false and we swapped it to true, so no other
        // closure can observe `data` until `_unlock` drops.
        unsafe { f(&mut *self.data.get()) }
    }
}

struct Unlock<'a>(&'a AtomicBool);

impl Drop for Unlock<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

unsafe impl<T: Send> Send for Spinlock<T> {}
unsafe impl<T: Send> Sync for Spinlock<T> {}

#[cfg(test)]
mod tests {
    use super::Spinlock;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::thread;

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    #[test]
    fn drains_waiter_list() {
        let list = Spinlock::new(VecDeque::from([1, 2, 3]));
        let drained = list.with_mut(std::mem::take);
        assert_eq!(drained, VecDeque::from([1, 2, 3]));
        assert!(list.with_mut(|l| l.is_empty()));
    }

    #[test]
    fn releases_after_panic() {
        let lock = Spinlock::new(0);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            lock.with_mut(|n| {
                *n += 1;
                if *n > 0 {
                    panic!("inside critical section");
                }
            })
        }));
        assert!(result.is_err());
        // would spin forever if the panic leaked the lock
        assert_eq!(lock.with_mut(|n| *n), 1);
    }

    #[test]
    fn concurrent_pushes() {
        let shared = Arc::new(Spinlock::new(Vec::new()));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for i in 0..50 {
                        shared.with_mut(|v| v.push(t * 100 + i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(shared.with_mut(|v| v.len()), 200);
    }
}

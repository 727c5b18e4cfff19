// SPDX-License-Identifier: MIT OR Apache-2.0
use super::Condvar;
use crate::guard::GateGuard;
use std::sync::atomic::Ordering;
use std::thread;

#[cfg(target_arch = "wasm32")]
use super::atomics_wait_supported;

impl Condvar {
    /// Releases the gate, parks until notified, and reacquires the gate by parking.
    ///
    /// Panics on a wasm main thread, where `Atomics.wait` is forbidden.
    pub(crate) fn wait_block<'a, T>(&self, guard: GateGuard<'a, T>) -> GateGuard<'a, T> {
        let gate = guard.gate;
        let notified = self.enqueue(Some(thread::current()));
        drop(guard);

        while !notified.load(Ordering::Acquire) {
            thread::park();
        }

        gate.lock_block()
    }

    /// Releases the gate, spins until notified, and reacquires the gate by spinning.
    pub(crate) fn wait_spin<'a, T>(&self, guard: GateGuard<'a, T>) -> GateGuard<'a, T> {
        let gate = guard.gate;
        let notified = self.enqueue(None);
        drop(guard);

        while !notified.load(Ordering::Acquire) {
            std::hint::spin_loop();
        }

        gate.lock_spin()
    }

    /// Parks where the platform allows it and spins otherwise.
    pub(crate) fn wait_sync<'a, T>(&self, guard: GateGuard<'a, T>) -> GateGuard<'a, T> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.wait_block(guard)
        }
        #[cfg(target_arch = "wasm32")]
        {
            if atomics_wait_supported() {
                self.wait_block(guard)
            } else {
                self.wait_spin(guard)
            }
        }
    }

    /// Waits with [`wait_block`](Self::wait_block) for as long as `condition` holds.
    ///
    /// `condition` is tested before the first wait and again after every wake;
    /// the returned guard always observes `condition == false`.
    pub(crate) fn wait_block_while<'a, T, F>(
        &self,
        mut guard: GateGuard<'a, T>,
        mut condition: F,
    ) -> GateGuard<'a, T>
    where
        F: FnMut(&T) -> bool,
    {
        while condition(&guard) {
            guard = self.wait_block(guard);
        }
        guard
    }

    /// Waits with [`wait_spin`](Self::wait_spin) for as long as `condition` holds.
    pub(crate) fn wait_spin_while<'a, T, F>(
        &self,
        mut guard: GateGuard<'a, T>,
        mut condition: F,
    ) -> GateGuard<'a, T>
    where
        F: FnMut(&T) -> bool,
    {
        while condition(&guard) {
            guard = self.wait_spin(guard);
        }
        guard
    }

    /// Waits with [`wait_sync`](Self::wait_sync) for as long as `condition` holds.
    pub(crate) fn wait_sync_while<'a, T, F>(
        &self,
        mut guard: GateGuard<'a, T>,
        mut condition: F,
    ) -> GateGuard<'a, T>
    where
        F: FnMut(&T) -> bool,
    {
        while condition(&guard) {
            guard = self.wait_sync(guard);
        }
        guard
    }
}

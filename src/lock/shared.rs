// SPDX-License-Identifier: MIT OR Apache-2.0
use super::inner::WriterPriorityLock;
use crate::NotAvailable;
use crate::config::WakePolicy;
use crate::guard::SharedGuard;

impl WriterPriorityLock {
    /// Acquires shared access, blocking while a writer holds the lock or any
    /// writer is waiting for it.
    ///
    /// Must be paired with exactly one [`release_shared`](Self::release_shared).
    /// Prefer [`read`](Self::read), which pairs it for you.
    ///
    /// # Examples
    ///
    /// ```
    /// use writer_priority_lock::WriterPriorityLock;
    ///
    /// let lock = WriterPriorityLock::new();
    /// lock.acquire_shared();
    /// assert_eq!(lock.state().reader_count, 1);
    /// lock.release_shared();
    /// ```
    pub fn acquire_shared(&self) {
        let state = self.lock_state();
        if state.blocks_shared() {
            tracing::debug!(
                writing = state.writing,
                writers_waiting = state.writers_waiting,
                "shared access waiting behind writers"
            );
        }
        let mut state = self.wait_while(&self.readers, state, |s| s.blocks_shared());
        state.reader_count += 1;
        let reader_count = state.reader_count;
        drop(state);
        tracing::trace!(reader_count, "shared access acquired");
    }

    /// Attempts to acquire shared access without blocking.
    ///
    /// Fails exactly when [`acquire_shared`](Self::acquire_shared) would block,
    /// so a queued writer turns this away even if nobody is writing yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use writer_priority_lock::{NotAvailable, WriterPriorityLock};
    ///
    /// let lock = WriterPriorityLock::new();
    /// assert_eq!(lock.try_acquire_shared(), Ok(()));
    /// lock.release_shared();
    ///
    /// lock.acquire_exclusive();
    /// assert_eq!(lock.try_acquire_shared(), Err(NotAvailable));
    /// lock.release_exclusive();
    /// ```
    pub fn try_acquire_shared(&self) -> Result<(), NotAvailable> {
        let mut state = self.lock_state();
        if state.blocks_shared() {
            return Err(NotAvailable);
        }
        state.reader_count += 1;
        let reader_count = state.reader_count;
        drop(state);
        tracing::trace!(reader_count, "shared access acquired");
        Ok(())
    }

    /// Releases shared access obtained from [`acquire_shared`](Self::acquire_shared)
    /// or [`try_acquire_shared`](Self::try_acquire_shared).
    ///
    /// Never blocks on the lock itself. When the last reader leaves while
    /// writers are queued, one of them is woken.
    ///
    /// Calling this without holding shared access is a contract violation: it
    /// corrupts the reader count, and trips a debug assertion in debug builds.
    pub fn release_shared(&self) {
        let mut state = self.lock_state();
        debug_assert!(
            state.reader_count > 0,
            "release_shared called without shared access held"
        );
        state.reader_count -= 1;
        let reader_count = state.reader_count;

        match self.config.policy() {
            WakePolicy::Targeted => {
                // Only a writer can be unblocked by a reader leaving, and only
                // one writer can get in.
                let wake_writer = reader_count == 0 && state.writers_waiting > 0;
                let woke = wake_writer && self.writers.notify_one();
                drop(state);
                tracing::trace!(reader_count, "shared access released");
                if wake_writer {
                    tracing::trace!(woke, "last reader out, waking one writer");
                }
            }
            WakePolicy::Broadcast => {
                let writers = self.writers.notify_all();
                let readers = self.readers.notify_all();
                drop(state);
                tracing::trace!(reader_count, "shared access released");
                tracing::trace!(writers, readers, "broadcast after shared release");
            }
        }
    }

    /// Acquires shared access and returns a guard that releases it on drop.
    ///
    /// # Examples
    ///
    /// ```
    /// use writer_priority_lock::WriterPriorityLock;
    ///
    /// let lock = WriterPriorityLock::new();
    /// let guard = lock.read();
    /// assert_eq!(lock.state().reader_count, 1);
    /// drop(guard);
    /// assert_eq!(lock.state().reader_count, 0);
    /// ```
    pub fn read(&self) -> SharedGuard<'_> {
        self.acquire_shared();
        SharedGuard { lock: self }
    }

    /// Guard-returning form of [`try_acquire_shared`](Self::try_acquire_shared).
    pub fn try_read(&self) -> Result<SharedGuard<'_>, NotAvailable> {
        self.try_acquire_shared()?;
        Ok(SharedGuard { lock: self })
    }
}

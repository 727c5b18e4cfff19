// SPDX-License-Identifier: MIT OR Apache-2.0
use super::inner::WriterPriorityLock;
use crate::NotAvailable;
use crate::guard::ExclusiveGuard;

impl WriterPriorityLock {
    /// Acquires exclusive access, blocking while any reader or writer holds the lock.
    ///
    /// The caller is counted as a waiting writer from the moment it enters,
    /// before it blocks, so readers arriving after that point wait behind it.
    ///
    /// Must be paired with exactly one [`release_exclusive`](Self::release_exclusive).
    /// Prefer [`write`](Self::write), which pairs it for you.
    ///
    /// # Examples
    ///
    /// ```
    /// use writer_priority_lock::WriterPriorityLock;
    ///
    /// let lock = WriterPriorityLock::new();
    /// lock.acquire_exclusive();
    /// assert!(lock.state().writing);
    /// lock.release_exclusive();
    /// assert!(!lock.state().writing);
    /// ```
    pub fn acquire_exclusive(&self) {
        let mut state = self.lock_state();
        state.writers_waiting += 1;
        if state.blocks_exclusive() {
            tracing::debug!(
                reader_count = state.reader_count,
                writing = state.writing,
                writers_waiting = state.writers_waiting,
                "exclusive access waiting"
            );
        }
        let mut state = self.wait_while(&self.writers, state, |s| s.blocks_exclusive());
        state.writers_waiting -= 1;
        state.writing = true;
        let writers_waiting = state.writers_waiting;
        drop(state);
        tracing::trace!(writers_waiting, "exclusive access acquired");
    }

    /// Attempts to acquire exclusive access without blocking.
    ///
    /// Succeeds exactly when nobody holds the lock. A failed attempt is not
    /// counted as a waiting writer and so does not hold back readers.
    ///
    /// # Examples
    ///
    /// ```
    /// use writer_priority_lock::{NotAvailable, WriterPriorityLock};
    ///
    /// let lock = WriterPriorityLock::new();
    /// let reader = lock.read();
    /// assert_eq!(lock.try_acquire_exclusive(), Err(NotAvailable));
    /// assert_eq!(lock.state().writers_waiting, 0);
    /// drop(reader);
    ///
    /// assert_eq!(lock.try_acquire_exclusive(), Ok(()));
    /// lock.release_exclusive();
    /// ```
    pub fn try_acquire_exclusive(&self) -> Result<(), NotAvailable> {
        let mut state = self.lock_state();
        if state.blocks_exclusive() {
            return Err(NotAvailable);
        }
        state.writing = true;
        let writers_waiting = state.writers_waiting;
        drop(state);
        tracing::trace!(writers_waiting, "exclusive access acquired");
        Ok(())
    }

    /// Releases exclusive access obtained from [`acquire_exclusive`](Self::acquire_exclusive)
    /// or [`try_acquire_exclusive`](Self::try_acquire_exclusive).
    ///
    /// Never blocks on the lock itself. Wakes every blocked reader and writer:
    /// a queued writer goes next if there is one, otherwise the readers go.
    /// Threads whose turn has not come go back to sleep.
    ///
    /// Calling this without holding exclusive access is a contract violation,
    /// and trips a debug assertion in debug builds.
    pub fn release_exclusive(&self) {
        let mut state = self.lock_state();
        debug_assert!(
            state.writing,
            "release_exclusive called without exclusive access held"
        );
        state.writing = false;
        let writers = self.writers.notify_all();
        let readers = self.readers.notify_all();
        let writers_waiting = state.writers_waiting;
        drop(state);
        tracing::trace!(
            writers_waiting,
            woke_writers = writers,
            woke_readers = readers,
            "exclusive access released"
        );
    }

    /// Acquires exclusive access and returns a guard that releases it on drop.
    ///
    /// # Examples
    ///
    /// ```
    /// use writer_priority_lock::WriterPriorityLock;
    ///
    /// let lock = WriterPriorityLock::new();
    /// {
    ///     let _guard = lock.write();
    ///     assert!(lock.try_write().is_err());
    /// }
    /// assert!(lock.try_write().is_ok());
    /// ```
    pub fn write(&self) -> ExclusiveGuard<'_> {
        self.acquire_exclusive();
        ExclusiveGuard { lock: self }
    }

    /// Guard-returning form of [`try_acquire_exclusive`](Self::try_acquire_exclusive).
    pub fn try_write(&self) -> Result<ExclusiveGuard<'_>, NotAvailable> {
        self.try_acquire_exclusive()?;
        Ok(ExclusiveGuard { lock: self })
    }
}

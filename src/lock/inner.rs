// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::condvar::Condvar;
use crate::config::{Config, WaitStrategy};
use crate::gate::Gate;
use crate::guard::GateGuard;

/// A snapshot of a [`WriterPriorityLock`]'s counters.
///
/// Taken atomically under the lock's gate by [`WriterPriorityLock::state`], so
/// the three fields are mutually consistent. Whenever nobody misuses the lock:
///
/// - `writing` implies `reader_count == 0`,
/// - at most one thread is writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LockState {
    /// Threads currently holding shared access.
    pub reader_count: usize,
    /// Threads blocked in [`acquire_exclusive`](WriterPriorityLock::acquire_exclusive).
    pub writers_waiting: usize,
    /// Whether some thread holds exclusive access.
    pub writing: bool,
}

impl LockState {
    /// A reader must wait while someone writes or any writer is queued.
    pub(crate) fn blocks_shared(&self) -> bool {
        self.writing || self.writers_waiting != 0
    }

    /// A writer must wait while anyone else holds the lock in either mode.
    pub(crate) fn blocks_exclusive(&self) -> bool {
        self.reader_count != 0 || self.writing
    }
}

/// A reader/writer lock that serves waiting writers before newly arriving readers.
///
/// Shared access may be held by many threads at once; exclusive access by one
/// thread, with no readers. Once a writer is waiting, no new reader gets in
/// until that writer has been through. See the [module documentation](crate::lock)
/// for the full policy.
///
/// The lock protects no data of its own. Use [`RwLock`](crate::RwLock) to tie
/// it to a value.
///
/// Share it by reference, through an `Arc`, or in a `static`; the type is
/// deliberately not `Clone`, since a copy would split the counters.
///
/// # Examples
///
/// The core protocol, step by step:
///
/// ```
/// use writer_priority_lock::{LockState, WriterPriorityLock};
///
/// let lock = WriterPriorityLock::new();
///
/// lock.acquire_exclusive();
/// assert_eq!(lock.state(), LockState { reader_count: 0, writers_waiting: 0, writing: true });
/// lock.release_exclusive();
///
/// lock.acquire_shared();
/// lock.acquire_shared();
/// assert_eq!(lock.state().reader_count, 2);
/// lock.release_shared();
/// lock.release_shared();
/// assert_eq!(lock.state(), LockState::default());
/// ```
///
/// In a `static`:
///
/// ```
/// use writer_priority_lock::WriterPriorityLock;
///
/// static LOCK: WriterPriorityLock = WriterPriorityLock::new();
///
/// let guard = LOCK.write();
/// assert!(LOCK.state().writing);
/// drop(guard);
/// ```
pub struct WriterPriorityLock {
    pub(crate) gate: Gate<LockState>,
    /// Readers blocked on [`LockState::blocks_shared`].
    pub(crate) readers: Condvar,
    /// Writers blocked on [`LockState::blocks_exclusive`].
    pub(crate) writers: Condvar,
    pub(crate) config: Config,
}

impl WriterPriorityLock {
    /// Creates an unlocked lock with the default [`Config`].
    pub const fn new() -> Self {
        WriterPriorityLock::with_config(Config::new())
    }

    /// Creates an unlocked lock with the given configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use writer_priority_lock::{Config, WakePolicy, WriterPriorityLock};
    ///
    /// let lock = WriterPriorityLock::with_config(Config::new().wake_policy(WakePolicy::Broadcast));
    /// assert_eq!(lock.config().policy(), WakePolicy::Broadcast);
    /// ```
    pub const fn with_config(config: Config) -> Self {
        WriterPriorityLock {
            gate: Gate::new(LockState {
                reader_count: 0,
                writers_waiting: 0,
                writing: false,
            }),
            readers: Condvar::new(),
            writers: Condvar::new(),
            config,
        }
    }

    /// The configuration this lock was created with.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Returns a consistent snapshot of the lock's counters.
    ///
    /// The snapshot may be stale by the time it is inspected; it is meant for
    /// diagnostics and tests, not for deciding whether to acquire.
    pub fn state(&self) -> LockState {
        *self.lock_state()
    }

    pub(crate) fn lock_state(&self) -> GateGuard<'_, LockState> {
        match self.config.strategy() {
            WaitStrategy::Adaptive => self.gate.lock_sync(),
            WaitStrategy::Block => self.gate.lock_block(),
            WaitStrategy::Spin => self.gate.lock_spin(),
        }
    }

    /// Waits on `queue` until `blocked` is false, re-testing after every wake.
    pub(crate) fn wait_while<'a, F>(
        &self,
        queue: &Condvar,
        guard: GateGuard<'a, LockState>,
        blocked: F,
    ) -> GateGuard<'a, LockState>
    where
        F: FnMut(&LockState) -> bool,
    {
        match self.config.strategy() {
            WaitStrategy::Adaptive => queue.wait_sync_while(guard, blocked),
            WaitStrategy::Block => queue.wait_block_while(guard, blocked),
            WaitStrategy::Spin => queue.wait_spin_while(guard, blocked),
        }
    }
}

impl Default for WriterPriorityLock {
    fn default() -> Self {
        WriterPriorityLock::new()
    }
}

impl std::fmt::Debug for WriterPriorityLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("WriterPriorityLock")
            .field("reader_count", &state.reader_count)
            .field("writers_waiting", &state.writers_waiting)
            .field("writing", &state.writing)
            .field("queued_readers", &self.readers.waiting())
            .field("queued_writers", &self.writers.waiting())
            .field("config", &self.config)
            .finish()
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::NotAvailable;
use crate::config::Config;
use crate::guard::{ReadGuard, WriteGuard};
use crate::lock::{LockState, WriterPriorityLock};
use std::cell::UnsafeCell;
use std::fmt::Display;

/// A reader/writer lock around a value, serving waiting writers before new readers.
///
/// Many [`ReadGuard`]s may exist at once; a [`WriteGuard`] excludes every
/// other guard. Once a writer is waiting for [`write`](Self::write), calls to
/// [`read`](Self::read) made after that point wait until the writer is done.
///
/// ## When to Use RwLock vs Mutex
///
/// Use `RwLock` when reads dominate, reads are slow enough to benefit from
/// running in parallel, and writers must not be starved by them. For short
/// critical sections with a mix of reads and writes, `std::sync::Mutex` is
/// simpler.
///
/// # Examples
///
/// ```
/// use writer_priority_lock::RwLock;
///
/// let rwlock = RwLock::new(0i32);
///
/// {
///     let reader1 = rwlock.read();
///     let reader2 = rwlock.read();
///     assert_eq!(*reader1, *reader2);
/// }
///
/// {
///     let mut writer = rwlock.write();
///     *writer += 1;
/// }
///
/// assert_eq!(rwlock.with_sync(|v| *v), 1);
/// ```
pub struct RwLock<T> {
    pub(crate) lock: WriterPriorityLock,
    pub(crate) data: UnsafeCell<T>,
}

unsafe impl<T: Send> Send for RwLock<T> {}
unsafe impl<T: Send + Sync> Sync for RwLock<T> {}

impl<T> RwLock<T> {
    /// Creates a new lock around `value` with the default [`Config`].
    ///
    /// # Examples
    ///
    /// ```
    /// use writer_priority_lock::RwLock;
    ///
    /// static SETTINGS: RwLock<u32> = RwLock::new(8);
    /// assert_eq!(*SETTINGS.read(), 8);
    /// ```
    pub const fn new(value: T) -> RwLock<T> {
        RwLock::with_config(value, Config::new())
    }

    /// Creates a new lock around `value` with the given configuration.
    pub const fn with_config(value: T, config: Config) -> RwLock<T> {
        RwLock {
            lock: WriterPriorityLock::with_config(config),
            data: UnsafeCell::new(value),
        }
    }

    /// Blocks until shared access is granted.
    pub fn read(&self) -> ReadGuard<'_, T> {
        self.lock.acquire_shared();
        ReadGuard { rwlock: self }
    }

    /// Blocks until exclusive access is granted.
    pub fn write(&self) -> WriteGuard<'_, T> {
        self.lock.acquire_exclusive();
        WriteGuard { rwlock: self }
    }

    /// Attempts shared access without blocking.
    ///
    /// Fails while a writer holds the lock or is waiting for it.
    pub fn try_read(&self) -> Result<ReadGuard<'_, T>, NotAvailable> {
        self.lock.try_acquire_shared()?;
        Ok(ReadGuard { rwlock: self })
    }

    /// Attempts exclusive access without blocking.
    ///
    /// Fails while anyone holds the lock. A failed attempt does not hold back readers.
    pub fn try_write(&self) -> Result<WriteGuard<'_, T>, NotAvailable> {
        self.lock.try_acquire_exclusive()?;
        Ok(WriteGuard { rwlock: self })
    }

    /// Runs `f` under shared access.
    ///
    /// # Examples
    ///
    /// ```
    /// use writer_priority_lock::RwLock;
    ///
    /// let rwlock = RwLock::new(vec![1, 2, 3]);
    /// assert_eq!(rwlock.with_sync(|v| v.len()), 3);
    /// ```
    pub fn with_sync<R, F: FnOnce(&T) -> R>(&self, f: F) -> R {
        let guard = self.read();
        f(&guard)
    }

    /// Runs `f` under exclusive access.
    ///
    /// # Examples
    ///
    /// ```
    /// use writer_priority_lock::RwLock;
    ///
    /// let rwlock = RwLock::new(vec![1, 2, 3]);
    /// let len = rwlock.with_mut_sync(|v| {
    ///     v.push(4);
    ///     v.len()
    /// });
    /// assert_eq!(len, 4);
    /// ```
    pub fn with_mut_sync<R, F: FnOnce(&mut T) -> R>(&self, f: F) -> R {
        let mut guard = self.write();
        f(&mut guard)
    }

    /// Returns a mutable reference to the value. No locking is needed, since
    /// `&mut self` proves there are no guards.
    pub fn get_mut(&mut self) -> &mut T {
        self.data.get_mut()
    }

    /// Consumes the lock and returns the value.
    pub fn into_inner(self) -> T {
        self.data.into_inner()
    }

    /// A snapshot of the underlying lock's counters.
    pub fn state(&self) -> LockState {
        self.lock.state()
    }
}

// ================================================================================================
// Boilerplate trait implementations
// ================================================================================================

impl<T: Default> Default for RwLock<T> {
    fn default() -> Self {
        RwLock::new(T::default())
    }
}

impl<T> From<T> for RwLock<T> {
    fn from(value: T) -> Self {
        RwLock::new(value)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for RwLock<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut d = f.debug_struct("RwLock");
        match self.try_read() {
            Ok(guard) => d.field("data", &&*guard),
            Err(NotAvailable) => d.field("data", &format_args!("<locked>")),
        };
        d.finish_non_exhaustive()
    }
}

impl<T: Display> Display for RwLock<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.try_read() {
            Ok(guard) => Display::fmt(&*guard, f),
            Err(NotAvailable) => write!(f, "RwLock {{ <locked> }}"),
        }
    }
}

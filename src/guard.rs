// SPDX-License-Identifier: MIT OR Apache-2.0
//! Guard types for the gate, the bare lock and the data-carrying lock.
//!
//! Every guard releases what it holds in `Drop`, so an acquisition made
//! through a guard is paired with its release on every exit path, including
//! early returns and unwinding.

use crate::gate::Gate;
use crate::lock::WriterPriorityLock;
use crate::rwlock::RwLock;

// ================================================================================================
// Gate guard
// ================================================================================================

/// Scoped access to the state behind a [`Gate`].
pub(crate) struct GateGuard<'a, T> {
    pub(crate) gate: &'a Gate<T>,
    pub(crate) data: &'a mut T,
}

impl<T> std::ops::Deref for GateGuard<'_, T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        self.data
    }
}

impl<T> std::ops::DerefMut for GateGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.data
    }
}

impl<T> Drop for GateGuard<'_, T> {
    fn drop(&mut self) {
        self.gate
            .closed
            .store(false, std::sync::atomic::Ordering::Release);
        self.gate.did_unlock();
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for GateGuard<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateGuard")
            .field("data", &**self)
            .finish_non_exhaustive()
    }
}

// ================================================================================================
// WriterPriorityLock guards
// ================================================================================================

/// Shared access to a [`WriterPriorityLock`], released on drop.
///
/// Created by [`WriterPriorityLock::read`] and [`WriterPriorityLock::try_read`].
///
/// # Examples
///
/// ```
/// use writer_priority_lock::WriterPriorityLock;
///
/// let lock = WriterPriorityLock::new();
/// {
///     let _a = lock.read();
///     let _b = lock.read();
///     assert_eq!(lock.state().reader_count, 2);
/// }
/// assert_eq!(lock.state().reader_count, 0);
/// ```
#[derive(Debug)]
#[must_use = "shared access is released as soon as the guard is dropped"]
pub struct SharedGuard<'a> {
    pub(crate) lock: &'a WriterPriorityLock,
}

impl Drop for SharedGuard<'_> {
    fn drop(&mut self) {
        self.lock.release_shared();
    }
}

/// Exclusive access to a [`WriterPriorityLock`], released on drop.
///
/// Created by [`WriterPriorityLock::write`] and [`WriterPriorityLock::try_write`].
///
/// # Examples
///
/// ```
/// use writer_priority_lock::WriterPriorityLock;
///
/// let lock = WriterPriorityLock::new();
/// {
///     let _w = lock.write();
///     assert!(lock.state().writing);
///     assert!(lock.try_read().is_err());
/// }
/// assert!(!lock.state().writing);
/// ```
#[derive(Debug)]
#[must_use = "exclusive access is released as soon as the guard is dropped"]
pub struct ExclusiveGuard<'a> {
    pub(crate) lock: &'a WriterPriorityLock,
}

impl Drop for ExclusiveGuard<'_> {
    fn drop(&mut self) {
        self.lock.release_exclusive();
    }
}

// ================================================================================================
// RwLock guards
// ================================================================================================

/// Read-only access to the data protected by an [`RwLock`].
///
/// Any number of `ReadGuard`s may coexist, as long as no writer holds or is
/// waiting for the lock.
///
/// # Examples
///
/// ```
/// use writer_priority_lock::RwLock;
///
/// let rwlock = RwLock::new(vec![1, 2, 3]);
/// let guard1 = rwlock.read();
/// let guard2 = rwlock.read();
/// assert_eq!(guard1.len(), 3);
/// assert_eq!(guard2[0], 1);
/// ```
#[must_use = "the read lock is released as soon as the guard is dropped"]
pub struct ReadGuard<'a, T> {
    pub(crate) rwlock: &'a RwLock<T>,
}

/// Exclusive read-write access to the data protected by an [`RwLock`].
///
/// # Examples
///
/// ```
/// use writer_priority_lock::RwLock;
///
/// let rwlock = RwLock::new(String::from("hello"));
/// {
///     let mut guard = rwlock.write();
///     guard.push_str(", world!");
/// }
/// assert_eq!(&*rwlock.read(), "hello, world!");
/// ```
#[must_use = "the write lock is released as soon as the guard is dropped"]
pub struct WriteGuard<'a, T> {
    pub(crate) rwlock: &'a RwLock<T>,
}

impl<T> std::ops::Deref for ReadGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: shared access excludes every writer while this guard lives.
        unsafe { &*self.rwlock.data.get() }
    }
}

impl<T> std::ops::Deref for WriteGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: exclusive access excludes every other guard.
        unsafe { &*self.rwlock.data.get() }
    }
}

impl<T> std::ops::DerefMut for WriteGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        // SAFETY: exclusive access excludes every other guard.
        unsafe { &mut *self.rwlock.data.get() }
    }
}

impl<T> Drop for ReadGuard<'_, T> {
    fn drop(&mut self) {
        self.rwlock.lock.release_shared();
    }
}

impl<T> Drop for WriteGuard<'_, T> {
    fn drop(&mut self) {
        self.rwlock.lock.release_exclusive();
    }
}

// ================================================================================================
// Boilerplate trait implementations
// ================================================================================================

impl<T> AsRef<T> for ReadGuard<'_, T> {
    fn as_ref(&self) -> &T {
        self
    }
}

impl<T> AsRef<T> for WriteGuard<'_, T> {
    fn as_ref(&self) -> &T {
        self
    }
}

impl<T> AsMut<T> for WriteGuard<'_, T> {
    fn as_mut(&mut self) -> &mut T {
        self
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ReadGuard<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadGuard")
            .field("data", &**self)
            .finish_non_exhaustive()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for WriteGuard<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteGuard")
            .field("data", &**self)
            .finish_non_exhaustive()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for ReadGuard<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&**self, f)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for WriteGuard<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&**self, f)
    }
}

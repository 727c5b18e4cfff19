// SPDX-License-Identifier: MIT OR Apache-2.0
//! Construction-time configuration for [`WriterPriorityLock`](crate::WriterPriorityLock)
//! and [`RwLock`](crate::RwLock).
//!
//! Two independent choices are available:
//!
//! - [`WakePolicy`] decides whom a release wakes.
//! - [`WaitStrategy`] decides how a thread waits, both for the internal gate
//!   and for its turn at the lock.
//!
//! Every combination keeps writer priority and mutual exclusion intact; they
//! differ only in how much work a release does and whether waiting threads
//! sleep or burn CPU.
//!
//! # Examples
//!
//! ```
//! use writer_priority_lock::{Config, WaitStrategy, WakePolicy, WriterPriorityLock};
//!
//! static LOCK: WriterPriorityLock = WriterPriorityLock::with_config(
//!     Config::new()
//!         .wake_policy(WakePolicy::Broadcast)
//!         .wait_strategy(WaitStrategy::Spin),
//! );
//!
//! LOCK.acquire_shared();
//! LOCK.release_shared();
//! assert_eq!(LOCK.config().policy(), WakePolicy::Broadcast);
//! ```

/// Which blocked threads a release wakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WakePolicy {
    /// Releasing shared access wakes a single waiting writer, and only once the
    /// last reader is gone; releasing exclusive access wakes everyone.
    #[default]
    Targeted,
    /// Every release wakes every blocked thread. Threads whose turn has not
    /// come simply go back to sleep.
    Broadcast,
}

/// How a thread waits for the gate and for its turn at the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WaitStrategy {
    /// Park the thread where the platform allows it, spin otherwise.
    ///
    /// - **Native**: parks
    /// - **WASM with `Atomics.wait`**: parks
    /// - **WASM without `Atomics.wait`**: spins (e.g. browser main thread)
    #[default]
    Adaptive,
    /// Always park. Panics on a WebAssembly main thread.
    Block,
    /// Always busy-wait. Suitable only for very short hold times.
    Spin,
}

/// Configuration for a [`WriterPriorityLock`](crate::WriterPriorityLock).
///
/// `Config::new()` and `Config::default()` are identical:
/// [`WakePolicy::Targeted`] and [`WaitStrategy::Adaptive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    wake_policy: WakePolicy,
    wait_strategy: WaitStrategy,
}

impl Config {
    /// Creates the default configuration.
    pub const fn new() -> Self {
        Config {
            wake_policy: WakePolicy::Targeted,
            wait_strategy: WaitStrategy::Adaptive,
        }
    }

    /// Sets the wake policy.
    #[must_use]
    pub const fn wake_policy(mut self, policy: WakePolicy) -> Self {
        self.wake_policy = policy;
        self
    }

    /// Sets the wait strategy.
    #[must_use]
    pub const fn wait_strategy(mut self, strategy: WaitStrategy) -> Self {
        self.wait_strategy = strategy;
        self
    }

    /// The configured wake policy.
    pub const fn policy(&self) -> WakePolicy {
        self.wake_policy
    }

    /// The configured wait strategy.
    pub const fn strategy(&self) -> WaitStrategy {
        self.wait_strategy
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

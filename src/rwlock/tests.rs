// SPDX-License-Identifier: MIT OR Apache-2.0
use super::RwLock;
use crate::config::{Config, WaitStrategy};
use crate::{LockState, NotAvailable};
#[cfg(not(target_arch = "wasm32"))]
use r#continue::continuation;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn test_lock_try() {
    let rwlock = RwLock::new(0);
    let lock = rwlock.try_read();
    assert!(lock.is_ok());
    assert_eq!(lock.as_ref().unwrap().deref(), &0);
    let lock2 = rwlock.try_read();
    assert!(lock2.is_ok());
    assert_eq!(lock2.as_ref().unwrap().deref(), &0);

    drop(lock2);
    //fail to acquire write lock
    let lock2 = rwlock.try_write();
    assert!(matches!(lock2, Err(NotAvailable)));

    drop(lock);
    let mut write_lock = rwlock.try_write();
    assert!(write_lock.is_ok());
    *write_lock.as_mut().unwrap().deref_mut() = 2;
    assert_eq!(write_lock.as_ref().unwrap().deref(), &2);

    //fail to acquire a new read lock
    assert!(rwlock.try_read().is_err());

    drop(write_lock);
    let read_lock = rwlock.try_read();
    assert_eq!(read_lock.as_ref().unwrap().deref(), &2);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn test_get_mut_and_into_inner() {
    let mut rwlock = RwLock::new(vec![1]);
    rwlock.get_mut().push(2);
    assert_eq!(rwlock.state(), LockState::default());
    assert_eq!(rwlock.into_inner(), vec![1, 2]);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn test_formatting() {
    let rwlock = RwLock::new(5);
    assert_eq!(format!("{rwlock}"), "5");
    assert!(format!("{rwlock:?}").contains("data: 5"));

    let guard = rwlock.write();
    assert_eq!(format!("{rwlock}"), "RwLock { <locked> }");
    assert!(format!("{rwlock:?}").contains("<locked>"));
    assert_eq!(format!("{guard}"), "5");
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn test_default_and_from() {
    let rwlock: RwLock<String> = RwLock::default();
    assert!(rwlock.read().is_empty());
    let rwlock = RwLock::from(3u8);
    assert_eq!(*rwlock.read(), 3);
}

#[test]
fn test_write_blocks_until_readers_leave() {
    let rwlock = Arc::new(RwLock::new(0));
    let reader = rwlock.read();

    let (tx, rx) = std::sync::mpsc::channel();
    let writer = Arc::clone(&rwlock);
    let handle = thread::spawn(move || {
        tx.send(()).unwrap();
        let mut guard = writer.write();
        *guard = 1;
        tx.send(()).unwrap();
    });
    rx.recv().unwrap();
    assert!(rx.recv_timeout(Duration::from_millis(10)).is_err());
    assert_eq!(*reader, 0);
    drop(reader);
    rx.recv().unwrap();
    handle.join().unwrap();
    assert_eq!(*rwlock.read(), 1);
}

#[cfg(not(target_arch = "wasm32"))]
#[test_executors::async_test]
async fn test_concurrent_increments() {
    let rwlock = Arc::new(RwLock::with_config(
        0u32,
        Config::new().wait_strategy(WaitStrategy::Block),
    ));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let rwlock = Arc::clone(&rwlock);
            let (c, r) = continuation();
            thread::spawn(move || {
                for _ in 0..100 {
                    rwlock.with_mut_sync(|n| *n += 1);
                    let seen = rwlock.with_sync(|n| *n);
                    assert!(seen >= 1);
                }
                c.send(());
            });
            r
        })
        .collect();
    for handle in handles {
        handle.await;
    }
    assert_eq!(rwlock.with_sync(|n| *n), 800);
}

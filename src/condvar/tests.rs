// SPDX-License-Identifier: MIT OR Apache-2.0
use super::*;
use crate::gate::Gate;
#[cfg(not(target_arch = "wasm32"))]
use r#continue::continuation;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn wait_until_queued(condvar: &Condvar, count: usize) {
    while condvar.waiting() < count {
        thread::yield_now();
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn notify_without_waiters_is_a_no_op() {
    let condvar = Condvar::new();
    assert!(!condvar.notify_one());
    assert_eq!(condvar.notify_all(), 0);
    assert_eq!(condvar.waiting(), 0);
}

#[cfg(not(target_arch = "wasm32"))]
#[test_executors::async_test]
async fn wait_block_while_rechecks_predicate() {
    let pair = Arc::new((Gate::new(0u32), Condvar::new()));
    let waiter_pair = Arc::clone(&pair);

    let (c, r) = continuation();
    thread::spawn(move || {
        let (gate, condvar) = &*waiter_pair;
        let value = condvar.wait_block_while(gate.lock_block(), |v| *v < 3);
        c.send(*value);
    });

    let (gate, condvar) = &*pair;
    for _ in 0..3 {
        wait_until_queued(condvar, 1);
        *gate.lock_block() += 1;
        // every wake before the third is spurious from the waiter's point of view
        assert!(condvar.notify_one());
    }
    assert_eq!(r.await, 3);
}

#[cfg(not(target_arch = "wasm32"))]
#[test_executors::async_test]
async fn wait_spin_while_wakes_on_notify() {
    let pair = Arc::new((Gate::new(false), Condvar::new()));
    let waiter_pair = Arc::clone(&pair);

    let (c, r) = continuation();
    thread::spawn(move || {
        let (gate, condvar) = &*waiter_pair;
        let ready = condvar.wait_spin_while(gate.lock_spin(), |ready| !*ready);
        c.send(*ready);
    });

    let (gate, condvar) = &*pair;
    wait_until_queued(condvar, 1);
    *gate.lock_spin() = true;
    condvar.notify_all();
    assert!(r.await);
}

#[test]
fn notify_before_park_is_not_lost() {
    let pair = Arc::new((Gate::new(false), Condvar::new()));
    let waiter_pair = Arc::clone(&pair);
    let (tx, rx) = std::sync::mpsc::channel();

    let handle = thread::spawn(move || {
        let (gate, condvar) = &*waiter_pair;
        let guard = gate.lock_sync();
        let ready = condvar.wait_sync_while(guard, |ready| !*ready);
        tx.send(*ready).unwrap();
    });

    // The waiter is enqueued before it releases the gate, so this notify may
    // land before it parks.
    let (gate, condvar) = &*pair;
    wait_until_queued(condvar, 1);
    *gate.lock_sync() = true;
    assert_eq!(condvar.notify_all(), 1);

    assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(true));
    handle.join().unwrap();
}

#[test]
fn spurious_unpark_does_not_consume_queue_entry() {
    let pair = Arc::new((Gate::new(false), Condvar::new()));
    let waiter_pair = Arc::clone(&pair);
    let (tx, rx) = std::sync::mpsc::channel();

    let handle = thread::spawn(move || {
        let (gate, condvar) = &*waiter_pair;
        let ready = condvar.wait_block_while(gate.lock_block(), |ready| !*ready);
        tx.send(*ready).unwrap();
    });

    let (gate, condvar) = &*pair;
    wait_until_queued(condvar, 1);
    // an unpark that is not a notification
    handle.thread().unpark();
    assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    assert_eq!(condvar.waiting(), 1);

    *gate.lock_block() = true;
    assert!(condvar.notify_one());
    assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(true));
    handle.join().unwrap();
}

#[test]
fn notify_one_wakes_in_queue_order() {
    let shared = Arc::new((Gate::new(Vec::<usize>::new()), Condvar::new()));
    let (gate, condvar) = &*shared;
    let mut handles = Vec::new();

    for id in 0..3 {
        let worker = Arc::clone(&shared);
        handles.push(thread::spawn(move || {
            let (gate, condvar) = &*worker;
            let mut guard = condvar.wait_block(gate.lock_block());
            guard.push(id);
        }));
        wait_until_queued(condvar, id + 1);
    }

    for woken in 1..=3 {
        assert!(condvar.notify_one());
        while gate.lock_block().len() < woken {
            thread::yield_now();
        }
    }
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(*gate.lock_block(), vec![0, 1, 2]);
}

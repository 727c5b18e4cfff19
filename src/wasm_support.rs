// SPDX-License-Identifier: MIT OR Apache-2.0
//! Detects whether the current wasm thread may block with `Atomics.wait`.
//!
//! Browser main threads forbid it; workers allow it. Parking a thread where it
//! is forbidden throws, so [`WaitStrategy::Adaptive`](crate::WaitStrategy::Adaptive)
//! asks here first and spins instead.

use std::cell::Cell;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function _wpl_supportsAtomicsWait() {
    if (typeof SharedArrayBuffer === 'undefined') return false;
    if (typeof Atomics === 'undefined' || typeof Atomics.wait !== 'function') return false;

    try {
        const sab = new SharedArrayBuffer(4);
        const ia = new Int32Array(sab);
        const result = Atomics.wait(ia, 0, 0, 0);
        return result === 'timed-out' || result === 'not-equal';
    } catch (_) {
        return false;
    }
}
")]
extern "C" {
    fn _wpl_supportsAtomicsWait() -> bool;
}

thread_local! {
    // The answer differs between threads (main vs worker) but never changes for one.
    static ATOMICS_WAIT: Cell<Option<bool>> = const { Cell::new(None) };
}

pub(crate) fn atomics_wait_supported() -> bool {
    ATOMICS_WAIT.with(|cached| match cached.get() {
        Some(supported) => supported,
        None => {
            let supported = _wpl_supportsAtomicsWait();
            cached.set(Some(supported));
            supported
        }
    })
}

/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_ordering::atomic::{
    acquire_fence,
    release_fence,
    seq_cst_fence,
    AtomicBool,
    AtomicU32,
};
use std::sync::Arc;
use std::thread;

// Fences have no failure mode and no side effect beyond ordering.
#[test]
fn test_fences_are_callable() {
    acquire_fence();
    release_fence();
    seq_cst_fence();
}

// Fence-based publication: relaxed accesses ordered purely by the
// barriers. The writer's release fence pairs with the reader's acquire
// fence once the reader has observed the flag.
#[test]
fn test_fence_publication_is_visible() {
    const ROUNDS: usize = 200;

    for _ in 0..ROUNDS {
        let data = Arc::new(AtomicU32::new(0));
        let flag = Arc::new(AtomicBool::new(false));

        let writer = {
            let data = data.clone();
            let flag = flag.clone();
            thread::spawn(move || {
                data.store_relaxed(42);
                release_fence();
                flag.store_relaxed(true);
            })
        };

        while !flag.load_relaxed() {
            std::hint::spin_loop();
        }
        acquire_fence();
        assert_eq!(data.load_relaxed(), 42);

        writer.join().unwrap();
    }
}

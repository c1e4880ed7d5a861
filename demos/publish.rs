/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Publish/Subscribe Example
//!
//! Demonstrates release/acquire publication through a boolean flag.

use prism3_ordering::{AtomicBool, AtomicI64};
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Publish/Subscribe Example ===\n");

    let payload = Arc::new(AtomicI64::new(0));
    let ready = Arc::new(AtomicBool::new(false));

    let publisher = {
        let payload = payload.clone();
        let ready = ready.clone();
        thread::spawn(move || {
            payload.store_relaxed(0x1234_5678_9abc_def0);
            // The release store orders the payload write before the flag.
            ready.store_release(true);
            println!("   Publisher: payload published");
        })
    };

    while !ready.load_acquire() {
        std::hint::spin_loop();
    }
    println!("   Subscriber: observed {:#x}", payload.load_acquire());

    publisher.join().unwrap();
}

/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Counter Example
//!
//! Demonstrates relaxed counting and the compare-exchange retry pattern.

use prism3_ordering::AtomicI32;
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Atomic Counter Example ===\n");

    // Example 1: Relaxed counting across threads
    println!("1. Relaxed Counting:");
    let counter = Arc::new(AtomicI32::new(0));
    let mut handles = vec![];

    for _ in 0..10 {
        let counter = counter.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..1000 {
                counter.fetch_add_relaxed(1);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
    println!("   Final value: {}", counter.load_acquire());

    // Example 2: Compare-exchange retry loop
    println!("\n2. Compare-Exchange Retry:");
    let cell = AtomicI32::new(100);
    let mut current = cell.load_acquire();
    loop {
        let prev = cell.compare_exchange_seq_cst(current, current * 2);
        if prev == current {
            break;
        }
        current = prev;
    }
    println!("   Doubled: {}", cell.load_acquire());

    // Example 3: Exchange returns the previous value
    println!("\n3. Exchange:");
    let cell = AtomicI32::new(7);
    let old = cell.swap_seq_cst(8);
    println!("   Previous: {}, current: {}", old, cell.load_acquire());
}

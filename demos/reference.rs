/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Reference Example
//!
//! Demonstrates lock-free configuration hand-off with identity
//! compare-exchange.

use prism3_ordering::AtomicRef;
use std::sync::Arc;

#[derive(Debug)]
struct Config {
    timeout_ms: u64,
    max_retries: u32,
}

fn main() {
    println!("=== Atomic Reference Example ===\n");

    let current = Arc::new(Config {
        timeout_ms: 1000,
        max_retries: 3,
    });
    let cell = AtomicRef::new(current.clone());

    // Example 1: Swap in a replacement, reclaiming the old one
    println!("1. Swap:");
    let old = cell.swap_seq_cst(Arc::new(Config {
        timeout_ms: 2000,
        max_retries: 5,
    }));
    println!("   Replaced {:?}", old);
    println!("   Active   {:?}", cell.load_acquire());

    // Example 2: Identity compare-exchange
    println!("\n2. Identity Compare-Exchange:");
    let prev = cell.compare_exchange_seq_cst(
        &current,
        Arc::new(Config {
            timeout_ms: 1,
            max_retries: 0,
        }),
    );
    println!(
        "   Stale expectation rejected; occupant unchanged: {:?}",
        prev
    );

    let active = cell.load_acquire();
    let prev = cell.compare_exchange_seq_cst(
        &active,
        Arc::new(Config {
            timeout_ms: 500,
            max_retries: 10,
        }),
    );
    println!("   Fresh expectation accepted; previous: {:?}", prev);
    println!("   Active now {:?}", cell.load_acquire());
}

/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_ordering::atomic::{
    Atomic,
    AtomicBool,
    AtomicExchange,
    AtomicF64,
    AtomicI32,
    AtomicNumber,
    AtomicRef,
    AtomicU64,
    AtomicU8,
};
use std::sync::Arc;

// Generic publication through the base trait.
fn publish_and_read<A: Atomic>(cell: &A, value: A::Value) -> A::Value {
    cell.store_release(value);
    cell.load_acquire()
}

// Generic replacement through the exchange trait.
fn replace<A: AtomicExchange>(cell: &A, value: A::Value) -> A::Value {
    cell.swap_acquire(value)
}

// Generic counting through the numeric trait.
fn bump<A: AtomicNumber>(cell: &A, delta: A::Value) -> A::Value {
    cell.fetch_add_seq_cst(delta)
}

#[test]
fn test_atomic_trait_is_object_shaped_per_type() {
    let flag = AtomicBool::new(false);
    assert!(publish_and_read(&flag, true));

    let byte = AtomicU8::new(0);
    assert_eq!(publish_and_read(&byte, 9), 9);

    let word = AtomicI32::new(0);
    assert_eq!(publish_and_read(&word, -5), -5);

    let double = AtomicF64::new(0.0);
    assert_eq!(publish_and_read(&double, 2.5), 2.5);
}

#[test]
fn test_exchange_trait_across_categories() {
    let word = AtomicI32::new(1);
    assert_eq!(replace(&word, 2), 1);
    assert_eq!(word.load_acquire(), 2);

    let double = AtomicU64::new(10);
    assert_eq!(replace(&double, 20), 10);

    let float = AtomicF64::new(1.5);
    assert_eq!(replace(&float, 2.5), 1.5);
}

#[test]
fn test_exchange_trait_on_reference_cell() {
    let first = Arc::new(1);
    let cell = AtomicRef::new(first.clone());

    let prev = replace(&cell, Arc::new(2));
    assert!(Arc::ptr_eq(&prev, &first));

    // Trait-level compare-exchange takes the expected handle by value.
    let current = cell.load_acquire();
    let prev = AtomicExchange::compare_exchange_seq_cst(
        &cell,
        current.clone(),
        Arc::new(3),
    );
    assert!(Arc::ptr_eq(&prev, &current));
    assert_eq!(*cell.load_acquire(), 3);
}

#[test]
fn test_numeric_trait_across_widths() {
    let word = AtomicI32::new(10);
    assert_eq!(bump(&word, 5), 10);
    assert_eq!(word.load_acquire(), 15);

    let double = AtomicU64::new(100);
    assert_eq!(bump(&double, 1), 100);
    assert_eq!(double.load_acquire(), 101);
}

#[test]
fn test_lock_freedom_through_trait() {
    assert!(<AtomicU8 as Atomic>::is_lock_free());
    assert!(<AtomicI32 as Atomic>::is_lock_free());
    assert_eq!(
        <AtomicU64 as Atomic>::is_lock_free(),
        cfg!(target_pointer_width = "64"),
    );
}

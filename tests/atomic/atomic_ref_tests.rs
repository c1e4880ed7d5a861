/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_ordering::atomic::AtomicRef;
use std::sync::Arc;

#[test]
fn test_new_and_load() {
    let cell = AtomicRef::new(Arc::new(42));
    assert_eq!(*cell.load_acquire(), 42);
}

#[test]
fn test_is_lock_free() {
    assert!(AtomicRef::<i32>::is_lock_free());
}

#[test]
fn test_load_all_orderings_return_same_occupant() {
    let first = Arc::new(42);
    let cell = AtomicRef::new(first.clone());
    assert!(Arc::ptr_eq(&cell.load_relaxed(), &first));
    assert!(Arc::ptr_eq(&cell.load_acquire(), &first));
    assert!(Arc::ptr_eq(&cell.load_seq_cst(), &first));
}

#[test]
fn test_store_installs_new_occupant() {
    let cell = AtomicRef::new(Arc::new(1));
    cell.store_release(Arc::new(2));
    assert_eq!(*cell.load_acquire(), 2);
    cell.store_relaxed(Arc::new(3));
    assert_eq!(*cell.load_acquire(), 3);
    cell.store_seq_cst(Arc::new(4));
    assert_eq!(*cell.load_acquire(), 4);
}

// The cell owns exactly one handle per occupant: storing over it must
// release that handle, and dropping the cell must release the last one.
#[test]
fn test_store_releases_previous_handle() {
    let first = Arc::new(1);
    let weak = Arc::downgrade(&first);
    let cell = AtomicRef::new(first);
    assert!(weak.upgrade().is_some());

    cell.store_seq_cst(Arc::new(2));
    assert!(weak.upgrade().is_none());
}

#[test]
fn test_drop_releases_occupant() {
    let first = Arc::new(1);
    let weak = Arc::downgrade(&first);
    {
        let _cell = AtomicRef::new(first);
    }
    assert!(weak.upgrade().is_none());
}

#[test]
fn test_swap_returns_previous_occupant() {
    let first = Arc::new(10);
    let second = Arc::new(20);
    let cell = AtomicRef::new(first.clone());

    let prev = cell.swap_seq_cst(second.clone());
    assert!(Arc::ptr_eq(&prev, &first));
    assert!(Arc::ptr_eq(&cell.load_acquire(), &second));
}

#[test]
fn test_swap_all_orderings() {
    let cell = AtomicRef::new(Arc::new(0));
    assert_eq!(*cell.swap_relaxed(Arc::new(1)), 0);
    assert_eq!(*cell.swap_acquire(Arc::new(2)), 1);
    assert_eq!(*cell.swap_release(Arc::new(3)), 2);
    assert_eq!(*cell.swap_seq_cst(Arc::new(4)), 3);
    assert_eq!(*cell.load_acquire(), 4);
}

// Identity hand-off: the first exchange succeeds, an immediate second
// exchange with the same expectation must fail and leave the cell alone.
#[test]
fn test_compare_exchange_identity_success_then_failure() {
    let a = Arc::new("a");
    let b = Arc::new("b");
    let cell = AtomicRef::new(a.clone());

    let prev = cell.compare_exchange_seq_cst(&a, b.clone());
    assert!(Arc::ptr_eq(&prev, &a));
    assert!(Arc::ptr_eq(&cell.load_acquire(), &b));

    let prev = cell.compare_exchange_seq_cst(&a, Arc::new("c"));
    assert!(Arc::ptr_eq(&prev, &b));
    assert!(Arc::ptr_eq(&cell.load_acquire(), &b));
}

// Comparison is on handle identity, never on the referenced value.
#[test]
fn test_compare_exchange_rejects_equal_but_distinct_object() {
    let first = Arc::new(7);
    let lookalike = Arc::new(7);
    let cell = AtomicRef::new(first.clone());

    let prev = cell.compare_exchange_seq_cst(&lookalike, Arc::new(8));
    assert!(Arc::ptr_eq(&prev, &first));
    assert_eq!(*cell.load_acquire(), 7);
}

#[test]
fn test_compare_exchange_all_orderings() {
    let cas: [fn(&AtomicRef<i32>, &Arc<i32>, Arc<i32>) -> Arc<i32>; 4] = [
        AtomicRef::compare_exchange_relaxed,
        AtomicRef::compare_exchange_acquire,
        AtomicRef::compare_exchange_release,
        AtomicRef::compare_exchange_seq_cst,
    ];
    for cx in cas {
        let first = Arc::new(10);
        let cell = AtomicRef::new(first.clone());
        let prev = cx(&cell, &first, Arc::new(20));
        assert!(Arc::ptr_eq(&prev, &first));
        assert_eq!(*cell.load_acquire(), 20);
    }
}

// A failed exchange must not leak the unused replacement handle.
#[test]
fn test_compare_exchange_failure_reclaims_new_handle() {
    let first = Arc::new(1);
    let stale = Arc::new(0);
    let replacement = Arc::new(2);
    let weak = Arc::downgrade(&replacement);
    let cell = AtomicRef::new(first);

    let _ = cell.compare_exchange_seq_cst(&stale, replacement);
    assert!(weak.upgrade().is_none());
}

#[test]
fn test_clone_is_independent() {
    let cell = AtomicRef::new(Arc::new(1));
    let copied = cell.clone();
    assert!(Arc::ptr_eq(&cell.load_acquire(), &copied.load_acquire()));

    copied.store_seq_cst(Arc::new(2));
    assert_eq!(*cell.load_acquire(), 1);
    assert_eq!(*copied.load_acquire(), 2);
}

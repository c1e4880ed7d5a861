/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_ordering::atomic::AtomicChar;

#[test]
fn test_new() {
    let cell = AtomicChar::new('a');
    assert_eq!(cell.load_acquire(), 'a');
}

#[test]
fn test_default() {
    let cell = AtomicChar::default();
    assert_eq!(cell.load_acquire(), '\0');
}

#[test]
fn test_from() {
    let cell = AtomicChar::from('x');
    assert_eq!(cell.load_acquire(), 'x');
}

#[test]
fn test_is_lock_free() {
    assert!(AtomicChar::is_lock_free());
}

#[test]
fn test_round_trip_all_orderings() {
    let stores: [fn(&AtomicChar, char); 3] = [
        AtomicChar::store_relaxed,
        AtomicChar::store_release,
        AtomicChar::store_seq_cst,
    ];
    let loads: [fn(&AtomicChar) -> char; 3] = [
        AtomicChar::load_relaxed,
        AtomicChar::load_acquire,
        AtomicChar::load_seq_cst,
    ];
    for store in stores {
        for load in loads {
            let cell = AtomicChar::new('a');
            assert_eq!(load(&cell), 'a');
            store(&cell, 'z');
            assert_eq!(load(&cell), 'z');
        }
    }
}

// Characters outside the basic multilingual plane must survive unchanged.
#[test]
fn test_round_trip_wide_scalar_values() {
    let cell = AtomicChar::new('\0');
    for value in ['é', 'α', '中', '🦀'] {
        cell.store_release(value);
        assert_eq!(cell.load_acquire(), value);
    }
}

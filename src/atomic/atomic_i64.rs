/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 64-bit Signed Integer
//!
//! Provides a double-word atomic cell for `i64` with explicit memory
//! orderings and the full read-modify-write surface.
//!
//! On platforms whose native word is narrower than 64 bits, a plain 64-bit
//! access risks a torn read mixing old and new halves. Every operation here
//! therefore goes through the platform's guaranteed-atomic 64-bit
//! primitive; the host may back that primitive with an internal lock, which
//! `is_lock_free()` reports truthfully.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;

impl_atomic_integer!(
    AtomicI64,
    std::sync::atomic::AtomicI64,
    i64,
    "64-bit signed integer",
    cfg!(target_pointer_width = "64"),
    "`true` iff the native word width is 64 bits; on narrower platforms the host primitive may fall back to an internal lock to guarantee tear-free access."
);

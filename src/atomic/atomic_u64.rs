/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 64-bit Unsigned Integer
//!
//! Provides a double-word atomic cell for `u64` with explicit memory
//! orderings and the full read-modify-write surface. Unsigned arithmetic is
//! a bit-pattern pass-through: fetch-add/sub wrap in two's complement with
//! no sign semantics attached.
//!
//! Every operation goes through the platform's guaranteed-atomic 64-bit
//! primitive, so torn reads cannot occur even where the native word is 32
//! bits.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;

impl_atomic_integer!(
    AtomicU64,
    std::sync::atomic::AtomicU64,
    u64,
    "64-bit unsigned integer",
    cfg!(target_pointer_width = "64"),
    "`true` iff the native word width is 64 bits; on narrower platforms the host primitive may fall back to an internal lock to guarantee tear-free access."
);

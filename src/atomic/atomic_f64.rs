/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 64-bit Floating Point
//!
//! Provides a double-word atomic cell for `f64` with explicit memory
//! orderings. Routed through `AtomicU64` via checked bit casts, so torn
//! reads cannot occur even where the native word is 32 bits; see the float
//! macro module for the comparison semantics.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::atomic_float_macro::impl_atomic_float;

impl_atomic_float!(
    AtomicF64,
    std::sync::atomic::AtomicU64,
    f64,
    u64,
    "64-bit floating point",
    cfg!(target_pointer_width = "64"),
    "`true` iff the native word width is 64 bits; on narrower platforms the host primitive may fall back to an internal lock to guarantee tear-free access."
);

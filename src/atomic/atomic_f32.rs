/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 32-bit Floating Point
//!
//! Provides a word-width atomic cell for `f32` with explicit memory
//! orderings. Routed through `AtomicU32` via checked bit casts; see the
//! float macro module for the comparison semantics.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::atomic_float_macro::impl_atomic_float;

impl_atomic_float!(
    AtomicF32,
    std::sync::atomic::AtomicU32,
    f32,
    u32,
    "32-bit floating point",
    true,
    "Always `true`: every supported platform provides uninterruptible word-width instructions."
);

/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 32-bit Unsigned Integer
//!
//! Provides a word-width atomic cell for `u32` with explicit memory
//! orderings and the full read-modify-write surface. Unsigned arithmetic is
//! a bit-pattern pass-through: fetch-add/sub wrap in two's complement with
//! no sign semantics attached.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;

impl_atomic_integer!(
    AtomicU32,
    std::sync::atomic::AtomicU32,
    u32,
    "32-bit unsigned integer",
    true,
    "Always `true`: every supported platform provides uninterruptible word-width instructions."
);

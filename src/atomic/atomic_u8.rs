/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 8-bit Unsigned Integer
//!
//! Provides a narrow atomic cell for `u8` with explicit memory orderings.
//! Unsigned support is a bit-pattern pass-through with no sign semantics
//! attached; the platform primitive covers the width directly.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::atomic_narrow_macro::impl_atomic_narrow;

impl_atomic_narrow!(
    AtomicU8,
    std::sync::atomic::AtomicU8,
    u8,
    0,
    7,
    "8-bit unsigned integer"
);

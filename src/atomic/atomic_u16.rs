/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 16-bit Unsigned Integer
//!
//! Provides a narrow atomic cell for `u16` with explicit memory orderings.
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
    AtomicU16,
    std::sync::atomic::AtomicU16,
    u16,
    0,
    7,
    "16-bit unsigned integer"
);

/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 16-bit Signed Integer
//!
//! Provides a narrow atomic cell for `i16` with explicit memory orderings.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::atomic_narrow_macro::impl_atomic_narrow;

impl_atomic_narrow!(
    AtomicI16,
    std::sync::atomic::AtomicI16,
    i16,
    0,
    7,
    "16-bit signed integer"
);

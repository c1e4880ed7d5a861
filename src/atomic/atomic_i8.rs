/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 8-bit Signed Integer
//!
//! Provides a narrow atomic cell for `i8` with explicit memory orderings.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::atomic_narrow_macro::impl_atomic_narrow;

impl_atomic_narrow!(
    AtomicI8,
    std::sync::atomic::AtomicI8,
    i8,
    0,
    7,
    "8-bit signed integer"
);

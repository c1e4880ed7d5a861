/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Boolean
//!
//! Provides an atomic boolean cell with explicit memory orderings. A
//! one-byte pattern, so it carries the narrow load/store-only surface.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::atomic_narrow_macro::impl_atomic_narrow;

impl_atomic_narrow!(
    AtomicBool,
    std::sync::atomic::AtomicBool,
    bool,
    false,
    true,
    "boolean"
);

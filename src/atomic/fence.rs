/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Memory Fences
//!
//! Standalone barrier primitives. These are the building blocks the narrow
//! cells compose into their sequentially consistent load/store forms.
//!
//! All three fences insert a barrier no weaker than a full bidirectional
//! one. The crate offers no true one-directional fence distinct from a full
//! fence: the conservative mapping keeps the guarantee identical on every
//! platform, at the cost of extra ordering where the hardware could do with
//! less. Callers that only need the directional guarantee still get at
//! least that guarantee.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::fence;
use std::sync::atomic::Ordering;

/// Inserts an acquire barrier.
///
/// Later operations in program order cannot be reordered before the fence.
/// Conservatively implemented as a full bidirectional barrier, which is no
/// weaker than the acquire guarantee.
///
/// No side effects beyond the fence; cannot fail.
#[inline]
pub fn acquire_fence() {
    fence(Ordering::SeqCst);
}

/// Inserts a release barrier.
///
/// Earlier operations in program order cannot be reordered after the fence.
/// Conservatively implemented as a full bidirectional barrier, which is no
/// weaker than the release guarantee.
///
/// No side effects beyond the fence; cannot fail.
#[inline]
pub fn release_fence() {
    fence(Ordering::SeqCst);
}

/// Inserts a sequentially consistent barrier.
///
/// A full bidirectional barrier that also participates in the single global
/// order of sequentially consistent operations observed identically by all
/// threads.
///
/// No side effects beyond the fence; cannot fail.
#[inline]
pub fn seq_cst_fence() {
    fence(Ordering::SeqCst);
}

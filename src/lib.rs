/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-ordering
//!
//! Atomic operations with explicit C++11-style memory orderings.
//!
//! This crate provides caller-owned atomic cells whose every operation names
//! its memory ordering at the call site, in the acquire/release/relaxed/
//! sequentially-consistent taxonomy of the C++11 memory model. It is aimed at
//! implementers of lock-free data structures and synchronization primitives
//! who need predictable cross-thread visibility without coarse-grained locks.
//!
//! ## Design Goals
//!
//! - **Explicitness**: Every load, store, and read-modify-write names its
//!   ordering level; nothing is chosen behind the caller's back
//! - **Uniformity**: The same surface shape for every scalar width (1-8
//!   bytes), 32/64-bit floating point, and reference handles
//! - **Truthfulness**: Each category reports whether it is lock-free on the
//!   current platform via `is_lock_free()`
//! - **Performance**: Zero-cost wrappers over the platform's atomic
//!   primitives with no additional overhead
//!
//! ## Operation Surface
//!
//! - Fences: `acquire_fence`, `release_fence`, `seq_cst_fence`
//! - Narrow cells (load/store only): `AtomicBool`, `AtomicChar`, `AtomicI8`,
//!   `AtomicU8`, `AtomicI16`, `AtomicU16`
//! - Word cells (adds swap/compare-exchange, and fetch-add/sub on integers):
//!   `AtomicI32`, `AtomicU32`, `AtomicF32`
//! - Double-word cells: `AtomicI64`, `AtomicU64`, `AtomicF64`
//! - Reference cell: `AtomicRef<T>`
//!
//! Narrow cells deliberately stop at load/store: no read-modify-write
//! instruction at 1-2 byte widths is assumed portable, so exchange and
//! compare-exchange are not offered there.
//!
//! ## Example
//!
//! ```rust
//! use prism3_ordering::{AtomicBool, AtomicI32};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let data = Arc::new(AtomicI32::new(0));
//! let ready = Arc::new(AtomicBool::new(false));
//!
//! let publisher = {
//!     let data = data.clone();
//!     let ready = ready.clone();
//!     thread::spawn(move || {
//!         data.store_relaxed(42);
//!         // Publishes the relaxed store above to any acquire observer.
//!         ready.store_release(true);
//!     })
//! };
//!
//! while !ready.load_acquire() {
//!     std::hint::spin_loop();
//! }
//! assert_eq!(data.load_acquire(), 42);
//! publisher.join().unwrap();
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;

// Re-export all atomic types, traits, and fences
pub use atomic::{
    acquire_fence,
    release_fence,
    seq_cst_fence,
    Atomic,
    AtomicBool,
    AtomicChar,
    AtomicExchange,
    AtomicF32,
    AtomicF64,
    AtomicI16,
    AtomicI32,
    AtomicI64,
    AtomicI8,
    AtomicNumber,
    AtomicRef,
    AtomicU16,
    AtomicU32,
    AtomicU64,
    AtomicU8,
};

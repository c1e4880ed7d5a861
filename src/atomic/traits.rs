/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines common traits for the ordering-explicit atomic cells, providing a
//! unified interface per operation category.
//!
//! # Author
//!
//! Haixing Hu

/// Common trait for all atomic cells: lock-freedom plus ordered load/store.
///
/// Loads offer relaxed, acquire, and sequentially consistent variants;
/// stores offer relaxed, release, and sequentially consistent variants. The
/// remaining combinations (acquire stores, release loads) do not exist in
/// the C++11 taxonomy and are not part of the surface.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic {
    /// The value type stored in the cell.
    type Value;

    /// Reports whether operations on this cell complete via uninterruptible
    /// hardware instructions, with no fallback lock, on the current
    /// platform. A static platform fact, identical for every cell of the
    /// same type.
    fn is_lock_free() -> bool;

    /// Loads the current value with relaxed ordering.
    ///
    /// Guarantees atomicity and per-location modification order only; no
    /// cross-thread visibility ordering of other memory.
    fn load_relaxed(&self) -> Self::Value;

    /// Loads the current value with acquire ordering.
    ///
    /// Synchronizes-with a matching release store: all writes before that
    /// store become visible after this load observes its value.
    fn load_acquire(&self) -> Self::Value;

    /// Loads the current value with sequentially consistent ordering.
    ///
    /// Acquire semantics plus participation in the single global order of
    /// sequentially consistent operations.
    fn load_seq_cst(&self) -> Self::Value;

    /// Stores a new value with relaxed ordering.
    fn store_relaxed(&self, value: Self::Value);

    /// Stores a new value with release ordering.
    ///
    /// All writes before this store become visible to a thread whose
    /// acquire load observes the stored value.
    fn store_release(&self, value: Self::Value);

    /// Stores a new value with sequentially consistent ordering.
    fn store_seq_cst(&self, value: Self::Value);
}

/// Trait for cells whose width supports hardware read-modify-write:
/// unconditional exchange and compare-exchange at every ordering level.
///
/// Narrow cells (1-2 byte scalars) intentionally do not implement this
/// trait: no read-modify-write instruction at those widths is assumed
/// portable.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicExchange: Atomic {
    /// Atomically replaces the value, returning the previous one, with
    /// relaxed ordering.
    fn swap_relaxed(&self, value: Self::Value) -> Self::Value;

    /// Atomically replaces the value, returning the previous one, with
    /// acquire ordering.
    fn swap_acquire(&self, value: Self::Value) -> Self::Value;

    /// Atomically replaces the value, returning the previous one, with
    /// release ordering.
    fn swap_release(&self, value: Self::Value) -> Self::Value;

    /// Atomically replaces the value, returning the previous one, with
    /// sequentially consistent ordering.
    fn swap_seq_cst(&self, value: Self::Value) -> Self::Value;

    /// Atomically replaces the value with `new` iff it currently equals
    /// `current`, with relaxed ordering.
    ///
    /// Returns the value found before the operation regardless of the
    /// outcome; the operation took effect iff the returned value equals
    /// `current`. A non-matching return is a normal outcome, not an error.
    fn compare_exchange_relaxed(
        &self,
        current: Self::Value,
        new: Self::Value,
    ) -> Self::Value;

    /// Atomically replaces the value with `new` iff it currently equals
    /// `current`, with acquire ordering. Returns the prior value.
    fn compare_exchange_acquire(
        &self,
        current: Self::Value,
        new: Self::Value,
    ) -> Self::Value;

    /// Atomically replaces the value with `new` iff it currently equals
    /// `current`, with release ordering. Returns the prior value.
    fn compare_exchange_release(
        &self,
        current: Self::Value,
        new: Self::Value,
    ) -> Self::Value;

    /// Atomically replaces the value with `new` iff it currently equals
    /// `current`, with sequentially consistent ordering. Returns the prior
    /// value.
    fn compare_exchange_seq_cst(
        &self,
        current: Self::Value,
        new: Self::Value,
    ) -> Self::Value;
}

/// Trait for numeric cells supporting hardware fetch-add/fetch-sub.
///
/// Subtraction is addition of the negated operand; both wrap on overflow.
/// Floating point cells do not implement this trait: the word-width float
/// accessor offers exchange and compare-exchange only.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicNumber: AtomicExchange {
    /// Atomically adds `delta`, returning the pre-addition value, with
    /// relaxed ordering. Wraps on overflow.
    fn fetch_add_relaxed(&self, delta: Self::Value) -> Self::Value;

    /// Atomically adds `delta`, returning the pre-addition value, with
    /// acquire ordering. Wraps on overflow.
    fn fetch_add_acquire(&self, delta: Self::Value) -> Self::Value;

    /// Atomically adds `delta`, returning the pre-addition value, with
    /// release ordering. Wraps on overflow.
    fn fetch_add_release(&self, delta: Self::Value) -> Self::Value;

    /// Atomically adds `delta`, returning the pre-addition value, with
    /// sequentially consistent ordering. Wraps on overflow.
    fn fetch_add_seq_cst(&self, delta: Self::Value) -> Self::Value;

    /// Atomically subtracts `delta`, returning the pre-subtraction value,
    /// with relaxed ordering. Wraps on overflow.
    fn fetch_sub_relaxed(&self, delta: Self::Value) -> Self::Value;

    /// Atomically subtracts `delta`, returning the pre-subtraction value,
    /// with acquire ordering. Wraps on overflow.
    fn fetch_sub_acquire(&self, delta: Self::Value) -> Self::Value;

    /// Atomically subtracts `delta`, returning the pre-subtraction value,
    /// with release ordering. Wraps on overflow.
    fn fetch_sub_release(&self, delta: Self::Value) -> Self::Value;

    /// Atomically subtracts `delta`, returning the pre-subtraction value,
    /// with sequentially consistent ordering. Wraps on overflow.
    fn fetch_sub_seq_cst(&self, delta: Self::Value) -> Self::Value;
}

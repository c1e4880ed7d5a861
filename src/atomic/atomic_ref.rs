/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Reference
//!
//! Provides an atomic cell for object handles with explicit memory
//! orderings. Handles are `Arc<T>` stored as a raw pointer in an
//! `AtomicPtr<T>`.
//!
//! The cell never clones or drops the referenced object itself, only
//! handles to it: exchange and compare-exchange hand the previous occupant
//! back to the caller, who performs any cleanup or reference-count
//! adjustment explicitly by holding or dropping that handle.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::AtomicPtr;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Atomic reference cell with explicit memory orderings.
///
/// Generic over any referenced type `T`. Operations mirror the word-width
/// scalar surface minus arithmetic: ordered loads and stores, exchange, and
/// compare-exchange.
///
/// # Comparison Semantics
///
/// `compare_exchange_*` succeeds iff the current occupant is *identical* to
/// the expected handle (`Arc::as_ptr` equality), never value equality. Two
/// handles to equal but distinct objects do not match. This is what makes
/// lock-free hand-off structures sound.
///
/// # Example
///
/// ```rust
/// use prism3_ordering::atomic::AtomicRef;
/// use std::sync::Arc;
///
/// #[derive(Debug)]
/// struct Config {
///     timeout: u64,
/// }
///
/// let cell = AtomicRef::new(Arc::new(Config { timeout: 1000 }));
///
/// // Swap in a replacement; the previous occupant comes back to us.
/// let old = cell.swap_seq_cst(Arc::new(Config { timeout: 2000 }));
/// assert_eq!(old.timeout, 1000);
/// assert_eq!(cell.load_acquire().timeout, 2000);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicRef<T> {
    inner: AtomicPtr<T>,
}

impl<T> AtomicRef<T> {
    /// Creates a new cell occupied by `value`.
    #[inline]
    pub fn new(value: Arc<T>) -> Self {
        let ptr = Arc::into_raw(value) as *mut T;
        Self {
            inner: AtomicPtr::new(ptr),
        }
    }

    /// Reports whether operations on this cell are lock-free on the
    /// current platform.
    ///
    /// Always `true`: handles are pointer-sized and every platform
    /// provides uninterruptible pointer-width instructions.
    #[inline]
    pub const fn is_lock_free() -> bool {
        true
    }

    /// Returns a handle to the current occupant at the given ordering.
    #[inline]
    fn load_with(&self, order: Ordering) -> Arc<T> {
        let ptr = self.inner.load(order);
        unsafe {
            // Clone a new handle without releasing the cell's own.
            let arc = Arc::from_raw(ptr);
            let cloned = arc.clone();
            let _ = Arc::into_raw(arc);
            cloned
        }
    }

    /// Installs a new occupant, releasing the cell's previous handle, at
    /// the given ordering.
    #[inline]
    fn store_with(&self, value: Arc<T>, order: Ordering) {
        let new_ptr = Arc::into_raw(value) as *mut T;
        let old_ptr = self.inner.swap(new_ptr, order);
        unsafe {
            if !old_ptr.is_null() {
                drop(Arc::from_raw(old_ptr));
            }
        }
    }

    /// Replaces the occupant, returning the previous one, at the given
    /// ordering.
    #[inline]
    fn swap_with(&self, value: Arc<T>, order: Ordering) -> Arc<T> {
        let new_ptr = Arc::into_raw(value) as *mut T;
        let old_ptr = self.inner.swap(new_ptr, order);
        unsafe { Arc::from_raw(old_ptr) }
    }

    /// Replaces the occupant with `new` iff it is identical to `current`,
    /// returning the occupant found before the operation.
    #[inline]
    fn compare_exchange_with(
        &self,
        current: &Arc<T>,
        new: Arc<T>,
        success: Ordering,
        failure: Ordering,
    ) -> Arc<T> {
        let current_ptr = Arc::as_ptr(current) as *mut T;
        let new_ptr = Arc::into_raw(new) as *mut T;

        match self
            .inner
            .compare_exchange(current_ptr, new_ptr, success, failure)
        {
            Ok(prev_ptr) => unsafe { Arc::from_raw(prev_ptr) },
            Err(actual_ptr) => unsafe {
                // Mismatch: reclaim the unused new handle and hand back a
                // handle to the actual occupant.
                let _ = Arc::from_raw(new_ptr);
                let actual = Arc::from_raw(actual_ptr);
                let cloned = actual.clone();
                let _ = Arc::into_raw(actual);
                cloned
            },
        }
    }

    /// Returns a handle to the current occupant with relaxed ordering.
    #[inline]
    pub fn load_relaxed(&self) -> Arc<T> {
        self.load_with(Ordering::Relaxed)
    }

    /// Returns a handle to the current occupant with acquire ordering.
    ///
    /// If another thread installed the occupant with a release store,
    /// every write before that store is visible after this load.
    #[inline]
    pub fn load_acquire(&self) -> Arc<T> {
        self.load_with(Ordering::Acquire)
    }

    /// Returns a handle to the current occupant with sequentially
    /// consistent ordering.
    #[inline]
    pub fn load_seq_cst(&self) -> Arc<T> {
        self.load_with(Ordering::SeqCst)
    }

    /// Installs a new occupant with relaxed ordering, releasing the cell's
    /// previous handle.
    ///
    /// Use `swap_*` instead to take ownership of the previous occupant.
    #[inline]
    pub fn store_relaxed(&self, value: Arc<T>) {
        self.store_with(value, Ordering::Relaxed);
    }

    /// Installs a new occupant with release ordering, releasing the cell's
    /// previous handle.
    #[inline]
    pub fn store_release(&self, value: Arc<T>) {
        self.store_with(value, Ordering::Release);
    }

    /// Installs a new occupant with sequentially consistent ordering,
    /// releasing the cell's previous handle.
    #[inline]
    pub fn store_seq_cst(&self, value: Arc<T>) {
        self.store_with(value, Ordering::SeqCst);
    }

    /// Replaces the occupant, returning the previous one, with relaxed
    /// ordering.
    #[inline]
    pub fn swap_relaxed(&self, value: Arc<T>) -> Arc<T> {
        self.swap_with(value, Ordering::Relaxed)
    }

    /// Replaces the occupant, returning the previous one, with acquire
    /// ordering.
    #[inline]
    pub fn swap_acquire(&self, value: Arc<T>) -> Arc<T> {
        self.swap_with(value, Ordering::Acquire)
    }

    /// Replaces the occupant, returning the previous one, with release
    /// ordering.
    #[inline]
    pub fn swap_release(&self, value: Arc<T>) -> Arc<T> {
        self.swap_with(value, Ordering::Release)
    }

    /// Replaces the occupant, returning the previous one, with
    /// sequentially consistent ordering.
    #[inline]
    pub fn swap_seq_cst(&self, value: Arc<T>) -> Arc<T> {
        self.swap_with(value, Ordering::SeqCst)
    }

    /// Replaces the occupant with `new` iff it is identical to `current`,
    /// with relaxed ordering.
    ///
    /// Returns the occupant found before the operation regardless of the
    /// outcome: the replacement took effect iff the returned handle is
    /// identical to `current`. A non-matching return is a normal outcome,
    /// not an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_ordering::atomic::AtomicRef;
    /// use std::sync::Arc;
    ///
    /// let first = Arc::new(1);
    /// let cell = AtomicRef::new(first.clone());
    ///
    /// let prev = cell.compare_exchange_relaxed(&first, Arc::new(2));
    /// assert!(Arc::ptr_eq(&prev, &first));
    /// assert_eq!(*cell.load_acquire(), 2);
    ///
    /// // The same expectation no longer matches.
    /// let prev = cell.compare_exchange_relaxed(&first, Arc::new(3));
    /// assert!(!Arc::ptr_eq(&prev, &first));
    /// assert_eq!(*cell.load_acquire(), 2);
    /// ```
    #[inline]
    pub fn compare_exchange_relaxed(
        &self,
        current: &Arc<T>,
        new: Arc<T>,
    ) -> Arc<T> {
        self.compare_exchange_with(
            current,
            new,
            Ordering::Relaxed,
            Ordering::Relaxed,
        )
    }

    /// Replaces the occupant with `new` iff it is identical to `current`,
    /// with acquire ordering. Returns the prior occupant.
    #[inline]
    pub fn compare_exchange_acquire(
        &self,
        current: &Arc<T>,
        new: Arc<T>,
    ) -> Arc<T> {
        self.compare_exchange_with(
            current,
            new,
            Ordering::Acquire,
            Ordering::Acquire,
        )
    }

    /// Replaces the occupant with `new` iff it is identical to `current`,
    /// with release ordering. Returns the prior occupant.
    #[inline]
    pub fn compare_exchange_release(
        &self,
        current: &Arc<T>,
        new: Arc<T>,
    ) -> Arc<T> {
        self.compare_exchange_with(
            current,
            new,
            Ordering::Release,
            Ordering::Relaxed,
        )
    }

    /// Replaces the occupant with `new` iff it is identical to `current`,
    /// with sequentially consistent ordering. Returns the prior occupant.
    #[inline]
    pub fn compare_exchange_seq_cst(
        &self,
        current: &Arc<T>,
        new: Arc<T>,
    ) -> Arc<T> {
        self.compare_exchange_with(
            current,
            new,
            Ordering::SeqCst,
            Ordering::SeqCst,
        )
    }

    /// Gets a reference to the underlying standard library atomic pointer,
    /// for operations outside this surface.
    ///
    /// # Warning
    ///
    /// Direct manipulation of the pointer requires careful management of
    /// the handle the cell owns; leaking or double-releasing it is easy.
    #[inline]
    pub fn inner(&self) -> &AtomicPtr<T> {
        &self.inner
    }
}

// Trait implementations forward to the inherent methods so callers can use
// both direct calls and generic trait-based programming. The trait surface
// takes expected handles by value.

impl<T> crate::atomic::traits::Atomic for AtomicRef<T> {
    type Value = Arc<T>;

    #[inline]
    fn is_lock_free() -> bool {
        Self::is_lock_free()
    }

    #[inline]
    fn load_relaxed(&self) -> Arc<T> {
        self.load_relaxed()
    }

    #[inline]
    fn load_acquire(&self) -> Arc<T> {
        self.load_acquire()
    }

    #[inline]
    fn load_seq_cst(&self) -> Arc<T> {
        self.load_seq_cst()
    }

    #[inline]
    fn store_relaxed(&self, value: Arc<T>) {
        self.store_relaxed(value);
    }

    #[inline]
    fn store_release(&self, value: Arc<T>) {
        self.store_release(value);
    }

    #[inline]
    fn store_seq_cst(&self, value: Arc<T>) {
        self.store_seq_cst(value);
    }
}

impl<T> crate::atomic::traits::AtomicExchange for AtomicRef<T> {
    #[inline]
    fn swap_relaxed(&self, value: Arc<T>) -> Arc<T> {
        self.swap_relaxed(value)
    }

    #[inline]
    fn swap_acquire(&self, value: Arc<T>) -> Arc<T> {
        self.swap_acquire(value)
    }

    #[inline]
    fn swap_release(&self, value: Arc<T>) -> Arc<T> {
        self.swap_release(value)
    }

    #[inline]
    fn swap_seq_cst(&self, value: Arc<T>) -> Arc<T> {
        self.swap_seq_cst(value)
    }

    #[inline]
    fn compare_exchange_relaxed(&self, current: Arc<T>, new: Arc<T>) -> Arc<T> {
        self.compare_exchange_relaxed(&current, new)
    }

    #[inline]
    fn compare_exchange_acquire(&self, current: Arc<T>, new: Arc<T>) -> Arc<T> {
        self.compare_exchange_acquire(&current, new)
    }

    #[inline]
    fn compare_exchange_release(&self, current: Arc<T>, new: Arc<T>) -> Arc<T> {
        self.compare_exchange_release(&current, new)
    }

    #[inline]
    fn compare_exchange_seq_cst(&self, current: Arc<T>, new: Arc<T>) -> Arc<T> {
        self.compare_exchange_seq_cst(&current, new)
    }
}

impl<T> Clone for AtomicRef<T> {
    /// Creates a new cell that initially holds a handle to the same
    /// occupant; subsequent operations on the two cells are independent.
    fn clone(&self) -> Self {
        Self::new(self.load_acquire())
    }
}

impl<T> Drop for AtomicRef<T> {
    fn drop(&mut self) {
        let ptr = self.inner.load(Ordering::Acquire);
        unsafe {
            if !ptr.is_null() {
                drop(Arc::from_raw(ptr));
            }
        }
    }
}

unsafe impl<T: Send + Sync> Send for AtomicRef<T> {}
unsafe impl<T: Send + Sync> Sync for AtomicRef<T> {}

impl<T: fmt::Debug> fmt::Debug for AtomicRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicRef")
            .field("value", &self.load_acquire())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for AtomicRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.load_acquire())
    }
}

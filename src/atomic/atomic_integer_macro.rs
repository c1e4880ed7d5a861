/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Integer Atomic Macro
//!
//! Generates the word and double-word integer cells: ordered loads and
//! stores plus the hardware read-modify-write surface (exchange,
//! compare-exchange, fetch-add, fetch-subtract) at all four ordering
//! levels.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to generate a word-width or double-word-width atomic integer cell.
///
/// # Parameters
///
/// * `$name` - The name of the generated type (e.g., `AtomicI32`)
/// * `$inner_type` - The underlying std atomic type (e.g.,
///   `std::sync::atomic::AtomicI32`)
/// * `$value_type` - The value type (e.g., `i32`)
/// * `$doc_type` - The type description for documentation (e.g., "32-bit
///   signed integer")
/// * `$lock_free` - Expression for the platform lock-freedom fact
/// * `$lock_free_doc` - Documentation line for the lock-freedom rule
macro_rules! impl_atomic_integer {
    ($name:ident, $inner_type:ty, $value_type:ty, $doc_type:expr, $lock_free:expr, $lock_free_doc:expr) => {
        #[doc = concat!("Atomic ", $doc_type, " cell with explicit memory orderings.")]
        ///
        /// A caller-owned storage cell. The crate never allocates; it wraps
        /// the cell the caller placed and operates on it through `&self`.
        ///
        /// # Operation Surface
        ///
        /// Ordered loads and stores, plus unconditional exchange,
        /// compare-exchange, and wrapping fetch-add/fetch-subtract. Every
        /// read-modify-write operation names one of the four ordering
        /// levels; each level maps to the matching ordering of the
        /// underlying hardware instruction, so a relaxed caller gets at
        /// least relaxed semantics and a sequentially consistent caller
        /// participates in the global total order.
        ///
        /// # Example
        ///
        /// ```rust
        #[doc = concat!("use prism3_ordering::atomic::", stringify!($name), ";")]
        /// use std::sync::Arc;
        /// use std::thread;
        ///
        #[doc = concat!("let counter = Arc::new(", stringify!($name), "::new(0));")]
        /// let mut handles = vec![];
        ///
        /// for _ in 0..10 {
        ///     let counter = counter.clone();
        ///     handles.push(thread::spawn(move || {
        ///         for _ in 0..100 {
        ///             counter.fetch_add_relaxed(1);
        ///         }
        ///     }));
        /// }
        ///
        /// for handle in handles {
        ///     handle.join().unwrap();
        /// }
        ///
        /// assert_eq!(counter.load_acquire(), 1000);
        /// ```
        ///
        /// # Author
        ///
        /// Haixing Hu
        #[repr(transparent)]
        pub struct $name {
            inner: $inner_type,
        }

        impl $name {
            /// Creates a new cell holding `value`.
            #[inline]
            pub const fn new(value: $value_type) -> Self {
                Self {
                    inner: <$inner_type>::new(value),
                }
            }

            /// Reports whether operations on this cell are lock-free on the
            /// current platform.
            ///
            #[doc = $lock_free_doc]
            #[inline]
            pub const fn is_lock_free() -> bool {
                $lock_free
            }

            /// Loads the current value with relaxed ordering.
            ///
            /// Guarantees atomicity and per-location modification order
            /// only; establishes no visibility ordering for other memory.
            /// The access goes through the platform's atomic primitive, so
            /// a torn value can never be observed, even where the native
            /// word is narrower than this cell.
            #[inline]
            pub fn load_relaxed(&self) -> $value_type {
                self.inner.load(Ordering::Relaxed)
            }

            /// Loads the current value with acquire ordering.
            ///
            /// If another thread performed a release store to this cell,
            /// every write before that store is visible after this load
            /// observes its value.
            #[inline]
            pub fn load_acquire(&self) -> $value_type {
                self.inner.load(Ordering::Acquire)
            }

            /// Loads the current value with sequentially consistent
            /// ordering.
            #[inline]
            pub fn load_seq_cst(&self) -> $value_type {
                self.inner.load(Ordering::SeqCst)
            }

            /// Stores a new value with relaxed ordering.
            #[inline]
            pub fn store_relaxed(&self, value: $value_type) {
                self.inner.store(value, Ordering::Relaxed);
            }

            /// Stores a new value with release ordering.
            ///
            /// Every write before this store becomes visible to a thread
            /// whose acquire load observes the stored value. The standard
            /// choice for publishing data.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_ordering::atomic::", stringify!($name), ";")]
            ///
            #[doc = concat!("let cell = ", stringify!($name), "::new(0);")]
            /// cell.store_release(42);
            /// assert_eq!(cell.load_acquire(), 42);
            /// ```
            #[inline]
            pub fn store_release(&self, value: $value_type) {
                self.inner.store(value, Ordering::Release);
            }

            /// Stores a new value with sequentially consistent ordering.
            #[inline]
            pub fn store_seq_cst(&self, value: $value_type) {
                self.inner.store(value, Ordering::SeqCst);
            }

            /// Atomically replaces the value, returning the previous one,
            /// with relaxed ordering.
            #[inline]
            pub fn swap_relaxed(&self, value: $value_type) -> $value_type {
                self.inner.swap(value, Ordering::Relaxed)
            }

            /// Atomically replaces the value, returning the previous one,
            /// with acquire ordering.
            #[inline]
            pub fn swap_acquire(&self, value: $value_type) -> $value_type {
                self.inner.swap(value, Ordering::Acquire)
            }

            /// Atomically replaces the value, returning the previous one,
            /// with release ordering.
            #[inline]
            pub fn swap_release(&self, value: $value_type) -> $value_type {
                self.inner.swap(value, Ordering::Release)
            }

            /// Atomically replaces the value, returning the previous one,
            /// with sequentially consistent ordering.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_ordering::atomic::", stringify!($name), ";")]
            ///
            #[doc = concat!("let cell = ", stringify!($name), "::new(10);")]
            /// let old = cell.swap_seq_cst(20);
            /// assert_eq!(old, 10);
            /// assert_eq!(cell.load_acquire(), 20);
            /// ```
            #[inline]
            pub fn swap_seq_cst(&self, value: $value_type) -> $value_type {
                self.inner.swap(value, Ordering::SeqCst)
            }

            /// Atomically replaces the value with `new` iff it currently
            /// equals `current`, with relaxed ordering.
            ///
            /// Returns the value found before the operation regardless of
            /// the outcome: the replacement took effect iff the returned
            /// value equals `current`. A non-matching return is a normal
            /// outcome, not an error; callers loop on it in the standard
            /// retry pattern.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_ordering::atomic::", stringify!($name), ";")]
            ///
            #[doc = concat!("let cell = ", stringify!($name), "::new(10);")]
            /// let prev = cell.compare_exchange_relaxed(10, 20);
            /// assert_eq!(prev, 10);
            /// assert_eq!(cell.load_acquire(), 20);
            ///
            /// // Mismatch: the cell is left unchanged.
            /// let prev = cell.compare_exchange_relaxed(10, 30);
            /// assert_eq!(prev, 20);
            /// assert_eq!(cell.load_acquire(), 20);
            /// ```
            #[inline]
            pub fn compare_exchange_relaxed(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> $value_type {
                match self.inner.compare_exchange(
                    current,
                    new,
                    Ordering::Relaxed,
                    Ordering::Relaxed,
                ) {
                    Ok(prev) => prev,
                    Err(actual) => actual,
                }
            }

            /// Atomically replaces the value with `new` iff it currently
            /// equals `current`, with acquire ordering. Returns the prior
            /// value.
            #[inline]
            pub fn compare_exchange_acquire(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> $value_type {
                match self.inner.compare_exchange(
                    current,
                    new,
                    Ordering::Acquire,
                    Ordering::Acquire,
                ) {
                    Ok(prev) => prev,
                    Err(actual) => actual,
                }
            }

            /// Atomically replaces the value with `new` iff it currently
            /// equals `current`, with release ordering. Returns the prior
            /// value.
            #[inline]
            pub fn compare_exchange_release(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> $value_type {
                match self.inner.compare_exchange(
                    current,
                    new,
                    Ordering::Release,
                    Ordering::Relaxed,
                ) {
                    Ok(prev) => prev,
                    Err(actual) => actual,
                }
            }

            /// Atomically replaces the value with `new` iff it currently
            /// equals `current`, with sequentially consistent ordering.
            /// Returns the prior value.
            #[inline]
            pub fn compare_exchange_seq_cst(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> $value_type {
                match self.inner.compare_exchange(
                    current,
                    new,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                ) {
                    Ok(prev) => prev,
                    Err(actual) => actual,
                }
            }

            /// Atomically adds `delta`, returning the pre-addition value,
            /// with relaxed ordering. Wraps on overflow.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_ordering::atomic::", stringify!($name), ";")]
            ///
            #[doc = concat!("let cell = ", stringify!($name), "::new(10);")]
            /// let old = cell.fetch_add_relaxed(5);
            /// assert_eq!(old, 10);
            /// assert_eq!(cell.load_acquire(), 15);
            /// ```
            #[inline]
            pub fn fetch_add_relaxed(&self, delta: $value_type) -> $value_type {
                self.inner.fetch_add(delta, Ordering::Relaxed)
            }

            /// Atomically adds `delta`, returning the pre-addition value,
            /// with acquire ordering. Wraps on overflow.
            #[inline]
            pub fn fetch_add_acquire(&self, delta: $value_type) -> $value_type {
                self.inner.fetch_add(delta, Ordering::Acquire)
            }

            /// Atomically adds `delta`, returning the pre-addition value,
            /// with release ordering. Wraps on overflow.
            #[inline]
            pub fn fetch_add_release(&self, delta: $value_type) -> $value_type {
                self.inner.fetch_add(delta, Ordering::Release)
            }

            /// Atomically adds `delta`, returning the pre-addition value,
            /// with sequentially consistent ordering. Wraps on overflow.
            #[inline]
            pub fn fetch_add_seq_cst(&self, delta: $value_type) -> $value_type {
                self.inner.fetch_add(delta, Ordering::SeqCst)
            }

            /// Atomically subtracts `delta`, returning the pre-subtraction
            /// value, with relaxed ordering.
            ///
            /// Subtraction is addition of the negated operand; it wraps on
            /// overflow bit-for-bit with `fetch_add_relaxed` of the two's
            /// complement.
            #[inline]
            pub fn fetch_sub_relaxed(&self, delta: $value_type) -> $value_type {
                self.inner.fetch_sub(delta, Ordering::Relaxed)
            }

            /// Atomically subtracts `delta`, returning the pre-subtraction
            /// value, with acquire ordering. Wraps on overflow.
            #[inline]
            pub fn fetch_sub_acquire(&self, delta: $value_type) -> $value_type {
                self.inner.fetch_sub(delta, Ordering::Acquire)
            }

            /// Atomically subtracts `delta`, returning the pre-subtraction
            /// value, with release ordering. Wraps on overflow.
            #[inline]
            pub fn fetch_sub_release(&self, delta: $value_type) -> $value_type {
                self.inner.fetch_sub(delta, Ordering::Release)
            }

            /// Atomically subtracts `delta`, returning the pre-subtraction
            /// value, with sequentially consistent ordering. Wraps on
            /// overflow.
            #[inline]
            pub fn fetch_sub_seq_cst(&self, delta: $value_type) -> $value_type {
                self.inner.fetch_sub(delta, Ordering::SeqCst)
            }

            /// Gets a reference to the underlying standard library atomic
            /// type, for operations outside this surface.
            #[inline]
            pub fn inner(&self) -> &$inner_type {
                &self.inner
            }
        }

        // Trait implementations forward to the inherent methods so callers
        // can use both direct calls and generic trait-based programming.

        impl crate::atomic::traits::Atomic for $name {
            type Value = $value_type;

            #[inline]
            fn is_lock_free() -> bool {
                Self::is_lock_free()
            }

            #[inline]
            fn load_relaxed(&self) -> $value_type {
                self.load_relaxed()
            }

            #[inline]
            fn load_acquire(&self) -> $value_type {
                self.load_acquire()
            }

            #[inline]
            fn load_seq_cst(&self) -> $value_type {
                self.load_seq_cst()
            }

            #[inline]
            fn store_relaxed(&self, value: $value_type) {
                self.store_relaxed(value);
            }

            #[inline]
            fn store_release(&self, value: $value_type) {
                self.store_release(value);
            }

            #[inline]
            fn store_seq_cst(&self, value: $value_type) {
                self.store_seq_cst(value);
            }
        }

        impl crate::atomic::traits::AtomicExchange for $name {
            #[inline]
            fn swap_relaxed(&self, value: $value_type) -> $value_type {
                self.swap_relaxed(value)
            }

            #[inline]
            fn swap_acquire(&self, value: $value_type) -> $value_type {
                self.swap_acquire(value)
            }

            #[inline]
            fn swap_release(&self, value: $value_type) -> $value_type {
                self.swap_release(value)
            }

            #[inline]
            fn swap_seq_cst(&self, value: $value_type) -> $value_type {
                self.swap_seq_cst(value)
            }

            #[inline]
            fn compare_exchange_relaxed(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> $value_type {
                self.compare_exchange_relaxed(current, new)
            }

            #[inline]
            fn compare_exchange_acquire(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> $value_type {
                self.compare_exchange_acquire(current, new)
            }

            #[inline]
            fn compare_exchange_release(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> $value_type {
                self.compare_exchange_release(current, new)
            }

            #[inline]
            fn compare_exchange_seq_cst(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> $value_type {
                self.compare_exchange_seq_cst(current, new)
            }
        }

        impl crate::atomic::traits::AtomicNumber for $name {
            #[inline]
            fn fetch_add_relaxed(&self, delta: $value_type) -> $value_type {
                self.fetch_add_relaxed(delta)
            }

            #[inline]
            fn fetch_add_acquire(&self, delta: $value_type) -> $value_type {
                self.fetch_add_acquire(delta)
            }

            #[inline]
            fn fetch_add_release(&self, delta: $value_type) -> $value_type {
                self.fetch_add_release(delta)
            }

            #[inline]
            fn fetch_add_seq_cst(&self, delta: $value_type) -> $value_type {
                self.fetch_add_seq_cst(delta)
            }

            #[inline]
            fn fetch_sub_relaxed(&self, delta: $value_type) -> $value_type {
                self.fetch_sub_relaxed(delta)
            }

            #[inline]
            fn fetch_sub_acquire(&self, delta: $value_type) -> $value_type {
                self.fetch_sub_acquire(delta)
            }

            #[inline]
            fn fetch_sub_release(&self, delta: $value_type) -> $value_type {
                self.fetch_sub_release(delta)
            }

            #[inline]
            fn fetch_sub_seq_cst(&self, delta: $value_type) -> $value_type {
                self.fetch_sub_seq_cst(delta)
            }
        }

        unsafe impl Send for $name {}
        unsafe impl Sync for $name {}

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(0)
            }
        }

        impl From<$value_type> for $name {
            #[inline]
            fn from(value: $value_type) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("value", &self.load_acquire())
                    .finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.load_acquire())
            }
        }
    };
}

pub(crate) use impl_atomic_integer;

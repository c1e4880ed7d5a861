/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Float Atomic Macro
//!
//! Generates the floating point cells. Hardware provides no native atomic
//! floating point access, so every operation routes through the same-width
//! integer primitive; the value crosses that boundary via an explicit,
//! checked same-size bit cast (`bytemuck::cast`), never an implicit
//! conversion. Comparison in compare-exchange is therefore bit-pattern
//! comparison, not numeric equality.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to generate an atomic floating point cell.
///
/// # Parameters
///
/// * `$name` - The name of the generated type (e.g., `AtomicF32`)
/// * `$inner_type` - The same-width std integer atomic (e.g.,
///   `std::sync::atomic::AtomicU32`)
/// * `$value_type` - The float type (e.g., `f32`)
/// * `$bits_type` - The integer type carrying the bit pattern (e.g., `u32`)
/// * `$doc_type` - The type description for documentation
/// * `$lock_free` - Expression for the platform lock-freedom fact
/// * `$lock_free_doc` - Documentation line for the lock-freedom rule
macro_rules! impl_atomic_float {
    ($name:ident, $inner_type:ty, $value_type:ty, $bits_type:ty, $doc_type:expr, $lock_free:expr, $lock_free_doc:expr) => {
        #[doc = concat!("Atomic ", $doc_type, " cell with explicit memory orderings.")]
        ///
        /// Stored as its bit pattern in the same-width integer primitive; a
        /// checked same-size cast converts at the boundary of every
        /// operation. Bit patterns survive exactly, including NaN payloads
        /// and signed zeros.
        ///
        /// # Operation Surface
        ///
        /// Ordered loads and stores, plus exchange and compare-exchange.
        /// No fetch arithmetic: the hardware read-modify-write instruction
        /// set is integral only.
        ///
        /// # Comparison Semantics
        ///
        /// `compare_exchange_*` compares bit patterns. Two NaN values with
        /// distinct encodings are never considered equal even when they are
        /// numerically "the same NaN", and `-0.0` does not match `+0.0`.
        /// This is what makes CAS loops on floats well-defined.
        ///
        /// # Example
        ///
        /// ```rust
        #[doc = concat!("use prism3_ordering::atomic::", stringify!($name), ";")]
        ///
        #[doc = concat!("let cell = ", stringify!($name), "::new(1.5);")]
        /// let old = cell.swap_seq_cst(2.5);
        /// assert_eq!(old, 1.5);
        /// assert_eq!(cell.load_acquire(), 2.5);
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
            pub fn new(value: $value_type) -> Self {
                Self {
                    inner: <$inner_type>::new(bytemuck::cast::<
                        $value_type,
                        $bits_type,
                    >(value)),
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
            /// The access goes through the platform's atomic integer
            /// primitive, so a torn value can never be observed.
            #[inline]
            pub fn load_relaxed(&self) -> $value_type {
                bytemuck::cast::<$bits_type, $value_type>(
                    self.inner.load(Ordering::Relaxed),
                )
            }

            /// Loads the current value with acquire ordering.
            #[inline]
            pub fn load_acquire(&self) -> $value_type {
                bytemuck::cast::<$bits_type, $value_type>(
                    self.inner.load(Ordering::Acquire),
                )
            }

            /// Loads the current value with sequentially consistent
            /// ordering.
            #[inline]
            pub fn load_seq_cst(&self) -> $value_type {
                bytemuck::cast::<$bits_type, $value_type>(
                    self.inner.load(Ordering::SeqCst),
                )
            }

            /// Stores a new value with relaxed ordering.
            #[inline]
            pub fn store_relaxed(&self, value: $value_type) {
                self.inner.store(
                    bytemuck::cast::<$value_type, $bits_type>(value),
                    Ordering::Relaxed,
                );
            }

            /// Stores a new value with release ordering.
            #[inline]
            pub fn store_release(&self, value: $value_type) {
                self.inner.store(
                    bytemuck::cast::<$value_type, $bits_type>(value),
                    Ordering::Release,
                );
            }

            /// Stores a new value with sequentially consistent ordering.
            #[inline]
            pub fn store_seq_cst(&self, value: $value_type) {
                self.inner.store(
                    bytemuck::cast::<$value_type, $bits_type>(value),
                    Ordering::SeqCst,
                );
            }

            /// Atomically replaces the value, returning the previous one,
            /// with relaxed ordering.
            #[inline]
            pub fn swap_relaxed(&self, value: $value_type) -> $value_type {
                bytemuck::cast::<$bits_type, $value_type>(self.inner.swap(
                    bytemuck::cast::<$value_type, $bits_type>(value),
                    Ordering::Relaxed,
                ))
            }

            /// Atomically replaces the value, returning the previous one,
            /// with acquire ordering.
            #[inline]
            pub fn swap_acquire(&self, value: $value_type) -> $value_type {
                bytemuck::cast::<$bits_type, $value_type>(self.inner.swap(
                    bytemuck::cast::<$value_type, $bits_type>(value),
                    Ordering::Acquire,
                ))
            }

            /// Atomically replaces the value, returning the previous one,
            /// with release ordering.
            #[inline]
            pub fn swap_release(&self, value: $value_type) -> $value_type {
                bytemuck::cast::<$bits_type, $value_type>(self.inner.swap(
                    bytemuck::cast::<$value_type, $bits_type>(value),
                    Ordering::Release,
                ))
            }

            /// Atomically replaces the value, returning the previous one,
            /// with sequentially consistent ordering.
            #[inline]
            pub fn swap_seq_cst(&self, value: $value_type) -> $value_type {
                bytemuck::cast::<$bits_type, $value_type>(self.inner.swap(
                    bytemuck::cast::<$value_type, $bits_type>(value),
                    Ordering::SeqCst,
                ))
            }

            /// Atomically replaces the value with `new` iff its bit pattern
            /// currently equals that of `current`, with relaxed ordering.
            ///
            /// Returns the value found before the operation regardless of
            /// the outcome: the replacement took effect iff the returned
            /// value's bit pattern equals that of `current`. A non-matching
            /// return is a normal outcome, not an error.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_ordering::atomic::", stringify!($name), ";")]
            ///
            #[doc = concat!("let cell = ", stringify!($name), "::new(1.0);")]
            /// let prev = cell.compare_exchange_relaxed(1.0, 2.0);
            /// assert_eq!(prev, 1.0);
            /// assert_eq!(cell.load_acquire(), 2.0);
            /// ```
            #[inline]
            pub fn compare_exchange_relaxed(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> $value_type {
                self.compare_exchange_bits(
                    current,
                    new,
                    Ordering::Relaxed,
                    Ordering::Relaxed,
                )
            }

            /// Atomically replaces the value with `new` iff its bit pattern
            /// currently equals that of `current`, with acquire ordering.
            /// Returns the prior value.
            #[inline]
            pub fn compare_exchange_acquire(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> $value_type {
                self.compare_exchange_bits(
                    current,
                    new,
                    Ordering::Acquire,
                    Ordering::Acquire,
                )
            }

            /// Atomically replaces the value with `new` iff its bit pattern
            /// currently equals that of `current`, with release ordering.
            /// Returns the prior value.
            #[inline]
            pub fn compare_exchange_release(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> $value_type {
                self.compare_exchange_bits(
                    current,
                    new,
                    Ordering::Release,
                    Ordering::Relaxed,
                )
            }

            /// Atomically replaces the value with `new` iff its bit pattern
            /// currently equals that of `current`, with sequentially
            /// consistent ordering. Returns the prior value.
            #[inline]
            pub fn compare_exchange_seq_cst(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> $value_type {
                self.compare_exchange_bits(
                    current,
                    new,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                )
            }

            #[inline]
            fn compare_exchange_bits(
                &self,
                current: $value_type,
                new: $value_type,
                success: Ordering,
                failure: Ordering,
            ) -> $value_type {
                let prev = match self.inner.compare_exchange(
                    bytemuck::cast::<$value_type, $bits_type>(current),
                    bytemuck::cast::<$value_type, $bits_type>(new),
                    success,
                    failure,
                ) {
                    Ok(prev_bits) => prev_bits,
                    Err(actual_bits) => actual_bits,
                };
                bytemuck::cast::<$bits_type, $value_type>(prev)
            }

            /// Gets a reference to the underlying standard library atomic
            /// integer, for operations outside this surface. Remember that
            /// it holds the bit pattern, not the numeric value.
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

        unsafe impl Send for $name {}
        unsafe impl Sync for $name {}

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(0.0)
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

pub(crate) use impl_atomic_float;

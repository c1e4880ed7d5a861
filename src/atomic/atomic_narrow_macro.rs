/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Narrow Atomic Macro
//!
//! Generates the load/store-only cells for 1-2 byte scalar types. Narrow
//! widths expose no exchange, compare-exchange, or arithmetic: no hardware
//! read-modify-write instruction at these widths is assumed portable, so
//! the surface stops at ordered loads and stores by design.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to generate a narrow (load/store-only) atomic cell.
///
/// # Parameters
///
/// * `$name` - The name of the generated type (e.g., `AtomicI8`)
/// * `$inner_type` - The underlying std atomic type (e.g.,
///   `std::sync::atomic::AtomicI8`)
/// * `$value_type` - The value type (e.g., `i8`)
/// * `$default` - The value used by the `Default` implementation
/// * `$sample` - A sample value used in documentation examples
/// * `$doc_type` - The type description for documentation (e.g., "8-bit
///   signed integer")
macro_rules! impl_atomic_narrow {
    ($name:ident, $inner_type:ty, $value_type:ty, $default:expr, $sample:expr, $doc_type:expr) => {
        #[doc = concat!("Atomic ", $doc_type, " cell with explicit memory orderings.")]
        ///
        /// A caller-owned storage cell. The crate never allocates; it wraps
        /// the cell the caller placed and operates on it through `&self`.
        ///
        /// # Operation Surface
        ///
        /// Narrow (1-2 byte) cells support ordered loads and stores only.
        /// Exchange, compare-exchange, and fetch arithmetic are intentionally
        /// unsupported at this width: no read-modify-write instruction here
        /// is assumed portable across targets.
        ///
        /// The sequentially consistent forms compose a full barrier, a
        /// relaxed access, and another full barrier instead of relying on a
        /// fused fence-plus-access instruction, so the guarantee holds even
        /// on architectures that lack one.
        ///
        /// # Example
        ///
        /// ```rust
        #[doc = concat!("use prism3_ordering::atomic::", stringify!($name), ";")]
        ///
        #[doc = concat!("let cell = ", stringify!($name), "::new(", stringify!($default), ");")]
        #[doc = concat!("cell.store_release(", stringify!($sample), ");")]
        #[doc = concat!("assert_eq!(cell.load_acquire(), ", stringify!($sample), ");")]
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
            /// Always `true`: every platform provides uninterruptible
            /// loads and stores at 1-2 byte widths.
            #[inline]
            pub const fn is_lock_free() -> bool {
                true
            }

            /// Loads the current value with relaxed ordering.
            ///
            /// Guarantees atomicity and per-location modification order
            /// only; establishes no visibility ordering for other memory.
            #[inline]
            pub fn load_relaxed(&self) -> $value_type {
                self.inner.load(Ordering::Relaxed)
            }

            /// Loads the current value with acquire ordering.
            ///
            /// If another thread performed a release store to this cell,
            /// every write before that store is visible after this load
            /// observes its value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_ordering::atomic::", stringify!($name), ";")]
            ///
            #[doc = concat!("let cell = ", stringify!($name), "::new(", stringify!($sample), ");")]
            #[doc = concat!("assert_eq!(cell.load_acquire(), ", stringify!($sample), ");")]
            /// ```
            #[inline]
            pub fn load_acquire(&self) -> $value_type {
                self.inner.load(Ordering::Acquire)
            }

            /// Loads the current value with sequentially consistent
            /// ordering.
            ///
            /// Composed as full barrier, relaxed load, full barrier.
            #[inline]
            pub fn load_seq_cst(&self) -> $value_type {
                crate::atomic::fence::seq_cst_fence();
                let value = self.inner.load(Ordering::Relaxed);
                crate::atomic::fence::seq_cst_fence();
                value
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
            #[doc = concat!("let cell = ", stringify!($name), "::new(", stringify!($default), ");")]
            #[doc = concat!("cell.store_release(", stringify!($sample), ");")]
            #[doc = concat!("assert_eq!(cell.load_acquire(), ", stringify!($sample), ");")]
            /// ```
            #[inline]
            pub fn store_release(&self, value: $value_type) {
                self.inner.store(value, Ordering::Release);
            }

            /// Stores a new value with sequentially consistent ordering.
            ///
            /// Composed as full barrier, relaxed store, full barrier.
            #[inline]
            pub fn store_seq_cst(&self, value: $value_type) {
                crate::atomic::fence::seq_cst_fence();
                self.inner.store(value, Ordering::Relaxed);
                crate::atomic::fence::seq_cst_fence();
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

        unsafe impl Send for $name {}
        unsafe impl Sync for $name {}

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new($default)
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

pub(crate) use impl_atomic_narrow;

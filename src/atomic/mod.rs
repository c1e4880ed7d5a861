/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Types
//!
//! Provides atomic cells with explicit memory orderings. Every operation
//! names its ordering level at the call site; the crate maps each level onto
//! the primitives the platform actually exposes (plain atomic access, full
//! fences, and hardware read-modify-write instructions) per scalar width.
//!
//! # Categories
//!
//! - Fences: full-barrier building blocks the narrow cells compose into
//!   their sequentially consistent forms
//! - Narrow cells (1-2 byte scalars and `char`): load/store only
//! - Word cells (32-bit integers and `f32`): load/store plus exchange,
//!   compare-exchange, and (integers only) fetch-add/fetch-sub
//! - Double-word cells (64-bit integers and `f64`): the word surface, with
//!   lock-freedom conditional on the native word width
//! - Reference cell: load/store/exchange/compare-exchange on `Arc` handles
//!   with identity comparison
//!
//! # Author
//!
//! Haixing Hu

#[macro_use]
mod atomic_narrow_macro;
#[macro_use]
mod atomic_integer_macro;
#[macro_use]
mod atomic_float_macro;

mod atomic_bool;
mod atomic_char;
mod atomic_f32;
mod atomic_f64;
mod atomic_i16;
mod atomic_i32;
mod atomic_i64;
mod atomic_i8;
mod atomic_ref;
mod atomic_u16;
mod atomic_u32;
mod atomic_u64;
mod atomic_u8;
pub mod fence;
mod traits;

pub use atomic_bool::AtomicBool;
pub use atomic_char::AtomicChar;
pub use atomic_f32::AtomicF32;
pub use atomic_f64::AtomicF64;
pub use atomic_i16::AtomicI16;
pub use atomic_i32::AtomicI32;
pub use atomic_i64::AtomicI64;
pub use atomic_i8::AtomicI8;
pub use atomic_ref::AtomicRef;
pub use atomic_u16::AtomicU16;
pub use atomic_u32::AtomicU32;
pub use atomic_u64::AtomicU64;
pub use atomic_u8::AtomicU8;
pub use fence::{
    acquire_fence,
    release_fence,
    seq_cst_fence,
};
pub use traits::{
    Atomic,
    AtomicExchange,
    AtomicNumber,
};

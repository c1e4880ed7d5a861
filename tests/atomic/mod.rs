/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/


mod atomic_bool_tests;
mod atomic_char_tests;
mod atomic_f32_tests;
mod atomic_f64_tests;
mod atomic_i16_tests;
mod atomic_i64_tests;
mod atomic_i8_tests;
mod atomic_ref_tests;
mod atomic_u16_tests;
mod atomic_u32_tests;
mod atomic_u64_tests;
mod atomic_u8_tests;
mod fence_tests;
mod trait_tests;

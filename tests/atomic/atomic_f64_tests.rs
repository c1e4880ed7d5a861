/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

test_atomic_float!(
    AtomicF64,
    f64,
    cfg!(target_pointer_width = "64"),
    f64_tests
);

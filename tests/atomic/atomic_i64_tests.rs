/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

test_atomic_integer!(
    AtomicI64,
    i64,
    cfg!(target_pointer_width = "64"),
    i64_tests
);

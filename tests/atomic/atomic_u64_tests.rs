/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

test_atomic_integer!(
    AtomicU64,
    u64,
    cfg!(target_pointer_width = "64"),
    u64_tests
);

#![no_main]

use hdlkit::{bit_width, log2_ceil};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|n: u32| {
    let k = log2_ceil(n);
    if n == 0 {
        assert_eq!(k, 0);
        return;
    }
    assert!(1u64 << k >= u64::from(n));
    if k > 0 {
        assert!(1u64 << (k - 1) < u64::from(n));
    }
    assert_eq!(k, 32 - (n - 1).leading_zeros());
    if n < u32::MAX {
        assert_eq!(bit_width(n), log2_ceil(n + 1));
    }
});

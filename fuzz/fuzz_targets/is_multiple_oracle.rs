#![no_main]

use hdlkit::is_multiple;
use libfuzzer_sys::fuzz_target;
mod common;
use common::*;

fuzz_target!(|data: FuzzInput| {
    let n = data.divisor();

    let raw = data.vector();
    assert_eq!(is_multiple(&raw, n), is_multiple(&raw.as_unsigned(), n));

    // Compare against arithmetic on the low 128 bits, which covers every divisor.
    let binary = data.binary_vector();
    let low: Vec<_> = binary.as_bits().iter().take(128).copied().collect();
    let value = hdlkit::Unsigned::from_bits(low).to_u128().unwrap();
    assert_eq!(
        is_multiple(&binary, n),
        value % u128::from(n) == 0,
        "{binary} multiple of {n}"
    );
});

#![no_main]

use hdlkit::{resize_msb, LogicVector, Unsigned};
use libfuzzer_sys::fuzz_target;
mod common;
use common::*;

fuzz_target!(|data: FuzzInput| {
    let raw = data.vector();
    let width = raw.width();
    let target = usize::from(data.target_width);

    let from_raw = resize_msb(&raw, target);
    let from_numeric = resize_msb(&Unsigned::from(raw.clone()), target);
    assert_eq!(from_raw, LogicVector::from(from_numeric));
    assert_eq!(from_raw.width(), target);

    if target >= width {
        let pad = target - width;
        assert_eq!(&from_raw.as_bits()[pad..], raw.as_bits());
        assert!(from_raw.as_bits()[..pad]
            .iter()
            .all(|&b| b == hdlkit::Logic::Zero));
    } else {
        assert_eq!(from_raw.as_bits(), &raw.as_bits()[width - target..]);
    }
});

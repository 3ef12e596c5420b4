//! The raw and numeric vector forms must agree bit for bit.

mod common;

use hdlkit::{is_multiple, resize_msb, LogicVector, Unsigned};
use rand::Rng as _;

use crate::common::{random_binary, random_logic, rng};

const ROUNDS: usize = 500;

#[test]
fn resize_msb_agrees_across_representations() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let width = rng.random_range(0..48);
        let target = rng.random_range(0..48);
        let raw = random_logic(&mut rng, width);
        let numeric = Unsigned::from(raw.clone());

        let from_raw = resize_msb(&raw, target);
        let from_numeric = resize_msb(&numeric, target);
        assert_eq!(
            from_raw,
            LogicVector::from(from_numeric),
            "resize {raw} to {target}"
        );
    }
}

#[test]
fn is_multiple_agrees_across_representations() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let width = rng.random_range(0..24);
        let n = 1u32 << rng.random_range(0..20u32);
        let raw = if rng.random_bool(0.5) {
            LogicVector::from(random_binary(&mut rng, width))
        } else {
            random_logic(&mut rng, width)
        };
        assert_eq!(
            is_multiple(&raw, n),
            is_multiple(&raw.as_unsigned(), n),
            "{raw} multiple of {n}"
        );
    }
}

#[test]
fn is_multiple_matches_arithmetic() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let width = rng.random_range(1..40);
        let value = random_binary(&mut rng, width);
        let n = 1u32 << rng.random_range(0..32u32);
        let expected = value.to_u128().unwrap() % u128::from(n) == 0;
        assert_eq!(is_multiple(&value, n), expected, "{value} multiple of {n}");
    }
}

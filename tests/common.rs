use hdlkit::{Logic, LogicVector, Unsigned};
use rand::rngs::StdRng;
use rand::Rng as _;
use rand::SeedableRng as _;

pub const SEED: u64 = 14;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Random vector of forcing 0/1 bits.
pub fn random_binary(rng: &mut StdRng, width: usize) -> Unsigned {
    Unsigned::from_bits((0..width).map(|_| Logic::from(rng.random::<bool>())).collect())
}

/// Random vector over all nine logic levels.
pub fn random_logic(rng: &mut StdRng, width: usize) -> LogicVector {
    LogicVector::from_bits(
        (0..width)
            .map(|_| Logic::ALL[rng.random_range(0..Logic::ALL.len())])
            .collect(),
    )
}

/// Vectors exercising the usual edge patterns for a given width.
pub fn get_test_cases(rng: &mut StdRng, width: usize) -> Vec<Unsigned> {
    let mut msb_only = vec![Logic::Zero; width];
    let mut lsb_only = vec![Logic::Zero; width];
    if width > 0 {
        msb_only[width - 1] = Logic::One;
        lsb_only[0] = Logic::One;
    }
    vec![
        // Zeroes
        Unsigned::zeros(width),
        // Ones
        Unsigned::from_bits(vec![Logic::One; width]),
        // Only the top bit
        Unsigned::from_bits(msb_only),
        // Only the bottom bit
        Unsigned::from_bits(lsb_only),
        // Alternating
        Unsigned::from_bits((0..width).map(|i| Logic::from(i % 2 == 0)).collect()),
        // Random binary
        random_binary(rng, width),
        // Random metavalues
        random_logic(rng, width).into(),
    ]
}

use crate::Logic;

/// Folds `bits` with `op`, starting from `identity`.
fn reduce<B: AsRef<[Logic]> + ?Sized>(
    bits: &B,
    identity: Logic,
    op: fn(Logic, Logic) -> Logic,
) -> Logic {
    bits.as_ref().iter().fold(identity, |acc, &bit| op(acc, bit))
}

/// OR of every bit. An empty vector reduces to `0`.
pub fn or_reduce<B: AsRef<[Logic]> + ?Sized>(bits: &B) -> Logic {
    reduce(bits, Logic::Zero, |a, b| a | b)
}

/// AND of every bit. An empty vector reduces to `1`.
pub fn and_reduce<B: AsRef<[Logic]> + ?Sized>(bits: &B) -> Logic {
    reduce(bits, Logic::One, |a, b| a & b)
}

/// XOR of every bit (odd parity). An empty vector reduces to `0`.
pub fn xor_reduce<B: AsRef<[Logic]> + ?Sized>(bits: &B) -> Logic {
    reduce(bits, Logic::Zero, |a, b| a ^ b)
}

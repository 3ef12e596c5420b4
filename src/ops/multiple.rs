use log::warn;

use crate::{or_reduce, Logic, LogicVector, Unsigned};

/// Returns the smallest `k` such that `2^k >= n`, with `log2_ceil(0) == 0`.
///
/// Halves `n` rounding up until it reaches 1 and counts the steps, so the result
/// is exact at every power-of-two boundary.
pub const fn log2_ceil(n: u32) -> u32 {
    let mut value = n;
    let mut steps = 0;
    while value > 1 {
        value = (value >> 1) + (value & 1);
        steps += 1;
    }
    steps
}

/// Returns the number of bits needed to represent `n`.
/// Returns 0 for input 0.
pub const fn bit_width(n: u32) -> u32 {
    u32::BITS - n.leading_zeros()
}

/// Tests whether a vector holds an exact multiple of a power of two.
///
/// A value is a multiple of `n = 2^k` when its low `k` bits are all zero, with
/// `k = log2_ceil(n)`. Consequences at the edges:
///
/// - `n` of 0 or 1 tests no bits, so every vector qualifies.
/// - A vector narrower than `k` bits qualifies only when it is all zeros.
/// - Weak zeros count as zeros; any other metavalue in the tested bits makes
///   the answer `false`.
/// - A divisor that is not a power of two is tested against the next power of
///   two up, and a warning is logged.
pub trait MultipleOf {
    fn is_multiple(&self, n: u32) -> bool;
}

impl MultipleOf for Unsigned {
    fn is_multiple(&self, n: u32) -> bool {
        if n > 1 && !n.is_power_of_two() {
            warn!(
                "is_multiple divisor {n} is not a power of two, testing against {}",
                1u64 << log2_ceil(n)
            );
        }
        let low_bits = (log2_ceil(n) as usize).min(self.width());
        or_reduce(&self.bits[..low_bits]) == Logic::Zero
    }
}

impl MultipleOf for LogicVector {
    fn is_multiple(&self, n: u32) -> bool {
        self.as_unsigned().is_multiple(n)
    }
}

/// Free-function form of [`MultipleOf::is_multiple`].
pub fn is_multiple<V: MultipleOf>(value: &V, n: u32) -> bool {
    value.is_multiple(n)
}

use crate::{Logic, LogicVector, Unsigned};

/// Width change anchored at the most significant bit.
///
/// Growing keeps the input in the top bits and zero-fills below it; shrinking
/// keeps the top `width` bits and drops the low ones. This is the opposite of a
/// numeric zero-extend, which anchors at the LSB. Every combination of widths is
/// valid, and metavalue bits are carried through unchanged.
pub trait MsbResize {
    #[must_use]
    fn resize_msb(&self, width: usize) -> Self;
}

impl MsbResize for Unsigned {
    fn resize_msb(&self, width: usize) -> Unsigned {
        let current = self.width();
        let bits = if current >= width {
            self.bits[current - width..].to_vec()
        } else {
            let mut bits = vec![Logic::Zero; width - current];
            bits.extend_from_slice(&self.bits);
            bits
        };
        Unsigned { bits }
    }
}

impl MsbResize for LogicVector {
    fn resize_msb(&self, width: usize) -> LogicVector {
        self.as_unsigned().resize_msb(width).into()
    }
}

/// Free-function form of [`MsbResize::resize_msb`].
pub fn resize_msb<V: MsbResize>(value: &V, width: usize) -> V {
    value.resize_msb(width)
}

use crate::{HdlKitResult, Logic, Unsigned};

/// A raw bit vector with no numeric interpretation.
///
/// Numeric operations convert to [`Unsigned`], run there and convert back; the
/// conversion moves the bit storage and never copies or reinterprets bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LogicVector {
    pub(crate) bits: Vec<Logic>,
}

impl_bit_vector!(LogicVector);

impl LogicVector {
    /// Encodes `value` in exactly `width` bits, LSB at index 0.
    pub fn from_u128(value: u128, width: usize) -> HdlKitResult<LogicVector> {
        Unsigned::from_u128(value, width).map(LogicVector::from)
    }

    /// See [`Unsigned::to_u128`].
    pub fn to_u128(&self) -> Option<u128> {
        self.as_unsigned().to_u128()
    }

    /// Reinterprets a copy of this vector as an unsigned number.
    pub fn as_unsigned(&self) -> Unsigned {
        Unsigned::from(self.clone())
    }
}

impl From<Unsigned> for LogicVector {
    fn from(value: Unsigned) -> Self {
        LogicVector { bits: value.bits }
    }
}

impl From<Vec<bool>> for LogicVector {
    /// Bits are taken least significant first.
    fn from(bits: Vec<bool>) -> Self {
        LogicVector {
            bits: bits.into_iter().map(Logic::from).collect(),
        }
    }
}

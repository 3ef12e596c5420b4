use crate::{HdlKitError, HdlKitResult, Logic, LogicVector};

/// A bit vector interpreted as an unsigned binary number.
///
/// This is the canonical representation: width-changing and arithmetic tests are
/// implemented here, and [`LogicVector`] reuses them through a zero-copy
/// conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Unsigned {
    pub(crate) bits: Vec<Logic>,
}

impl_bit_vector!(Unsigned);

impl Unsigned {
    /// Encodes `value` in exactly `width` bits.
    pub fn from_u128(value: u128, width: usize) -> HdlKitResult<Unsigned> {
        if width < 128 && value >> width != 0 {
            return Err(HdlKitError::ValueOutOfRange { value, width });
        }
        let bits = (0..width)
            .map(|i| Logic::from(i < 128 && (value >> i) & 1 == 1))
            .collect();
        Ok(Unsigned { bits })
    }

    /// Returns the numeric value, or `None` if a bit is a metavalue or the value
    /// needs more than 128 bits. Weak levels count as their binary value.
    pub fn to_u128(&self) -> Option<u128> {
        let mut value = 0u128;
        for (i, bit) in self.bits.iter().enumerate() {
            if bit.to_bool()? {
                if i >= 128 {
                    return None;
                }
                value |= 1 << i;
            }
        }
        Some(value)
    }
}

impl From<LogicVector> for Unsigned {
    fn from(vector: LogicVector) -> Self {
        Unsigned { bits: vector.bits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u128_places_lsb_at_index_zero() {
        let value = Unsigned::from_u128(0b1101, 6).unwrap();
        assert_eq!(value.width(), 6);
        assert_eq!(value.bit(0), Some(Logic::One));
        assert_eq!(value.bit(1), Some(Logic::Zero));
        assert_eq!(value.msb(), Some(Logic::Zero));
        assert_eq!(value.to_string(), "001101");
        assert_eq!(value.to_u128(), Some(13));
    }

    #[test]
    fn from_u128_rejects_values_wider_than_width() {
        assert_eq!(
            Unsigned::from_u128(16, 4),
            Err(HdlKitError::ValueOutOfRange {
                value: 16,
                width: 4
            })
        );
        assert!(Unsigned::from_u128(15, 4).is_ok());
        assert_eq!(Unsigned::from_u128(0, 0).unwrap().width(), 0);
        assert!(Unsigned::from_u128(1, 0).is_err());
    }

    #[test]
    fn wide_vectors() {
        let max = Unsigned::from_u128(u128::MAX, 128).unwrap();
        assert_eq!(max.to_u128(), Some(u128::MAX));

        let padded = Unsigned::from_u128(u128::MAX, 200).unwrap();
        assert_eq!(padded.width(), 200);
        assert_eq!(padded.to_u128(), Some(u128::MAX));

        let mut bits = vec![Logic::Zero; 130];
        bits[129] = Logic::One;
        assert_eq!(Unsigned::from_bits(bits).to_u128(), None);
    }

    #[test]
    fn parse_and_metavalues() {
        let value: Unsigned = "1_0H0L".parse().unwrap();
        assert_eq!(value.width(), 5);
        assert_eq!(value.to_u128(), Some(0b10100));
        assert_eq!(value.to_string(), "10H0L");

        let unknown: Unsigned = "1X".parse().unwrap();
        assert_eq!(unknown.to_u128(), None);

        assert_eq!(
            "10?".parse::<Unsigned>(),
            Err(HdlKitError::InvalidLogicChar('?'))
        );
    }

    #[test]
    fn empty_vector() {
        let empty: Unsigned = "".parse().unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.msb(), None);
        assert_eq!(empty.to_u128(), Some(0));
        assert_eq!(empty, Unsigned::zeros(0));
    }
}

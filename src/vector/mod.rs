//! Fixed-width vectors of [`Logic`](crate::Logic) levels.
//!
//! Both representations store their bits least significant first: `bit(0)` is
//! the LSB, and text renders most significant first.

/// Accessors, parsing and formatting shared by every vector representation.
macro_rules! impl_bit_vector {
    ($ty:ident) => {
        impl $ty {
            /// Creates a vector of `width` forcing zeros.
            pub fn zeros(width: usize) -> Self {
                $ty {
                    bits: vec![$crate::Logic::Zero; width],
                }
            }

            /// Wraps bits given least significant first.
            pub fn from_bits(bits: Vec<$crate::Logic>) -> Self {
                $ty { bits }
            }

            pub fn width(&self) -> usize {
                self.bits.len()
            }

            pub fn is_empty(&self) -> bool {
                self.bits.is_empty()
            }

            /// Returns bit `index`, counting from the LSB.
            pub fn bit(&self, index: usize) -> Option<$crate::Logic> {
                self.bits.get(index).copied()
            }

            pub fn msb(&self) -> Option<$crate::Logic> {
                self.bits.last().copied()
            }

            /// Bits least significant first.
            pub fn as_bits(&self) -> &[$crate::Logic] {
                &self.bits
            }

            pub fn into_bits(self) -> Vec<$crate::Logic> {
                self.bits
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $crate::Logic> {
                self.bits.iter()
            }
        }

        impl AsRef<[$crate::Logic]> for $ty {
            fn as_ref(&self) -> &[$crate::Logic] {
                &self.bits
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                use std::fmt::Write as _;
                for bit in self.bits.iter().rev() {
                    f.write_char(bit.to_char())?;
                }
                Ok(())
            }
        }

        /// Parses most-significant-first text such as `"10XZ_0011"`.
        impl std::str::FromStr for $ty {
            type Err = $crate::HdlKitError;

            fn from_str(s: &str) -> $crate::HdlKitResult<Self> {
                let bits = s
                    .chars()
                    .rev()
                    .filter(|&c| c != '_')
                    .map($crate::Logic::from_char)
                    .collect::<$crate::HdlKitResult<Vec<_>>>()?;
                Ok($ty { bits })
            }
        }
    };
}

mod logic_vector;
mod unsigned;

pub use logic_vector::LogicVector;
pub use unsigned::Unsigned;

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::{HdlKitError, HdlKitResult};

/// A single nine-valued logic level, as carried by each element of a bit vector.
///
/// | char | variant        | meaning                 |
/// |------|----------------|-------------------------|
/// | `U`  | `Uninitialized`| never assigned          |
/// | `X`  | `Unknown`      | forcing unknown         |
/// | `0`  | `Zero`         | forcing 0               |
/// | `1`  | `One`          | forcing 1               |
/// | `Z`  | `HighZ`        | high impedance          |
/// | `W`  | `WeakUnknown`  | weak unknown            |
/// | `L`  | `WeakZero`     | weak 0                  |
/// | `H`  | `WeakOne`      | weak 1                  |
/// | `-`  | `DontCare`     | don't care              |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Logic {
    #[default]
    Uninitialized,
    Unknown,
    Zero,
    One,
    HighZ,
    WeakUnknown,
    WeakZero,
    WeakOne,
    DontCare,
}

impl Logic {
    /// Every logic level in declaration order.
    pub const ALL: [Logic; 9] = [
        Logic::Uninitialized,
        Logic::Unknown,
        Logic::Zero,
        Logic::One,
        Logic::HighZ,
        Logic::WeakUnknown,
        Logic::WeakZero,
        Logic::WeakOne,
        Logic::DontCare,
    ];

    /// Parses one character. Letters are accepted in either case.
    pub fn from_char(c: char) -> HdlKitResult<Logic> {
        Ok(match c.to_ascii_uppercase() {
            'U' => Logic::Uninitialized,
            'X' => Logic::Unknown,
            '0' => Logic::Zero,
            '1' => Logic::One,
            'Z' => Logic::HighZ,
            'W' => Logic::WeakUnknown,
            'L' => Logic::WeakZero,
            'H' => Logic::WeakOne,
            '-' => Logic::DontCare,
            _ => return Err(HdlKitError::InvalidLogicChar(c)),
        })
    }

    pub const fn to_char(self) -> char {
        match self {
            Logic::Uninitialized => 'U',
            Logic::Unknown => 'X',
            Logic::Zero => '0',
            Logic::One => '1',
            Logic::HighZ => 'Z',
            Logic::WeakUnknown => 'W',
            Logic::WeakZero => 'L',
            Logic::WeakOne => 'H',
            Logic::DontCare => '-',
        }
    }

    /// Strips drive strength: weak levels become forcing ones, every other
    /// non-binary level except `U` collapses to `X`.
    pub const fn to_x01(self) -> Logic {
        match self {
            Logic::Zero | Logic::WeakZero => Logic::Zero,
            Logic::One | Logic::WeakOne => Logic::One,
            Logic::Uninitialized => Logic::Uninitialized,
            _ => Logic::Unknown,
        }
    }

    /// Returns the boolean value of a forcing or weak 0/1, `None` otherwise.
    pub const fn to_bool(self) -> Option<bool> {
        match self.to_x01() {
            Logic::Zero => Some(false),
            Logic::One => Some(true),
            _ => None,
        }
    }

    /// Returns `true` if the level carries no binary value.
    pub const fn is_metavalue(self) -> bool {
        self.to_bool().is_none()
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Logic {
    type Error = HdlKitError;

    fn try_from(c: char) -> HdlKitResult<Self> {
        Logic::from_char(c)
    }
}

impl From<bool> for Logic {
    fn from(b: bool) -> Self {
        if b {
            Logic::One
        } else {
            Logic::Zero
        }
    }
}

impl BitAnd for Logic {
    type Output = Logic;

    fn bitand(self, rhs: Logic) -> Logic {
        match (self.to_x01(), rhs.to_x01()) {
            (Logic::Zero, _) | (_, Logic::Zero) => Logic::Zero,
            (Logic::Uninitialized, _) | (_, Logic::Uninitialized) => Logic::Uninitialized,
            (Logic::One, Logic::One) => Logic::One,
            _ => Logic::Unknown,
        }
    }
}

impl BitOr for Logic {
    type Output = Logic;

    fn bitor(self, rhs: Logic) -> Logic {
        match (self.to_x01(), rhs.to_x01()) {
            (Logic::One, _) | (_, Logic::One) => Logic::One,
            (Logic::Uninitialized, _) | (_, Logic::Uninitialized) => Logic::Uninitialized,
            (Logic::Zero, Logic::Zero) => Logic::Zero,
            _ => Logic::Unknown,
        }
    }
}

impl BitXor for Logic {
    type Output = Logic;

    fn bitxor(self, rhs: Logic) -> Logic {
        match (self.to_x01(), rhs.to_x01()) {
            (Logic::Uninitialized, _) | (_, Logic::Uninitialized) => Logic::Uninitialized,
            (a, b) => match (a.to_bool(), b.to_bool()) {
                (Some(a), Some(b)) => Logic::from(a ^ b),
                _ => Logic::Unknown,
            },
        }
    }
}

impl Not for Logic {
    type Output = Logic;

    fn not(self) -> Logic {
        match self.to_x01() {
            Logic::Zero => Logic::One,
            Logic::One => Logic::Zero,
            other => other,
        }
    }
}

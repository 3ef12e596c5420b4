use hdlkit::{Logic, LogicVector};

#[derive(arbitrary::Arbitrary)]
pub struct FuzzInput {
    /// Each byte selects one logic level, LSB first
    pub levels: Vec<u8>,
    pub target_width: u8,
    pub divisor_log2: u8,
}

impl FuzzInput {
    pub fn vector(&self) -> LogicVector {
        LogicVector::from_bits(
            self.levels
                .iter()
                .map(|&b| Logic::ALL[usize::from(b) % Logic::ALL.len()])
                .collect(),
        )
    }

    /// Same bits with every metavalue forced to a binary level.
    pub fn binary_vector(&self) -> LogicVector {
        LogicVector::from(self.levels.iter().map(|&b| b & 1 == 1).collect::<Vec<_>>())
    }

    pub fn divisor(&self) -> u32 {
        1 << (self.divisor_log2 % 32)
    }
}

impl std::fmt::Debug for FuzzInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzInput")
            .field("vector", &format_args!("{}", self.vector()))
            .field("target_width", &self.target_width)
            .field("divisor", &self.divisor())
            .finish()
    }
}

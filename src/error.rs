use thiserror::Error;

/// Alias for the result type of fallible `hdlkit` operations.
pub type HdlKitResult<T> = Result<T, HdlKitError>;

/// Errors that can occur when building vectors or parsing configuration.
///
/// The bit-vector primitives themselves are total and never fail.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HdlKitError {
    /// Character is not one of `U X 0 1 Z W L H -`
    #[error("Invalid logic character {0:?}")]
    InvalidLogicChar(char),

    /// Value needs more bits than the requested width
    #[error("Value {value} does not fit in {width} bits")]
    ValueOutOfRange { value: u128, width: usize },

    /// Unrecognized environment name
    #[error("Unknown environment {0:?}")]
    UnknownEnvironment(String),
}

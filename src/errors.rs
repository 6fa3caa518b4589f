use thiserror::Error;

/// Fatal precondition violations on trusted inputs or caller misuse.
///
/// An invalid proof against well-formed inputs is not an error: the pairing
/// verifiers return `Ok(false)` for it, since rejection is an expected
/// outcome of verification.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum KzgError {
    #[error("SRS depth {0} is outside [1, 65536] or beyond the loaded table")]
    InvalidDepth(usize),
    #[error("SRS table does not start at the group generator")]
    CorruptSrs,
    #[error("value is not a canonical field element")]
    ValueOutOfField,
    #[error("polynomial has {needed} coefficients but only {available} SRS points")]
    InsufficientSrs { needed: usize, available: usize },
    #[error("coefficient is negative")]
    NegativeCoefficient,
    #[error("polynomial division left a non-zero remainder")]
    InexactDivision,
    #[error("interpolation needs matching, non-empty point and value sequences")]
    InvalidInterpolationInput,
    #[error("pairing check requires at least one term")]
    EmptyPairingInput,
}

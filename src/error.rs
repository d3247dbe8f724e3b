use thiserror::Error;

/// Why a slice was rejected as a permutation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermutationError {
    #[error("invalid permutation: {permutation} entries for {values} values")]
    LengthMismatch { values: usize, permutation: usize },

    #[error("invalid permutation: entry {index} is {value}, not below {len}")]
    OutOfRange { index: usize, value: usize, len: usize },

    #[error("invalid permutation: {value} appears more than once")]
    Duplicate { value: usize },
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("input is empty")]
    Empty,

    #[error("digit {digit} at position {index} is not a decimal digit")]
    InvalidDigit { index: usize, digit: i16 },

    #[error("pivot index {pivot} is outside a slice of length {len}")]
    PivotOutOfRange { pivot: usize, len: usize },

    #[error("cannot sample {k} items out of {len}")]
    SampleTooLarge { k: usize, len: usize },

    #[error("arithmetic overflow")]
    Overflow,
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Permutation(#[from] PermutationError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("cannot parse {0:?}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

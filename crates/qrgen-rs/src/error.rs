use thiserror::Error;

/// The error type for QR symbol generation.
///
/// All failures are deterministic given the inputs; retrying never helps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QrError {
    #[error("content needs {needed_bits} data bits, selected version holds {capacity_bits}")]
    CapacityExceeded {
        needed_bits: usize,
        capacity_bits: usize,
    },

    #[error("character at index {index} is not representable in the selected interpretation")]
    UnsupportedCharacter { index: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("bit writer ran past the end of its buffer")]
    BufferOverflow,
}

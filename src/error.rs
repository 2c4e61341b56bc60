//! Error taxonomy for split and combine

use thiserror::Error;

/// Result type used throughout the sharing core
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the field arithmetic and the sharing engine
///
/// Every failure is a deterministic function of the input, so none of these
/// are worth retrying. Messages never include share payloads or secret bytes.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("secret does not fit in the field: {len} bytes exceeds the modulus")]
    SecretTooLarge { len: usize },

    #[error("no shares provided")]
    NoShares,

    #[error("share #{position} is malformed: {source}")]
    MalformedShare {
        position: usize,
        #[source]
        source: ParseShareError,
    },

    #[error("share #{position} has invalid index '{index}' (must be 1..={max})", max = u32::MAX)]
    InvalidShareIndex { position: usize, index: String },

    #[error("share #{position} holds a value outside the field")]
    ValueOutOfRange { position: usize },

    #[error("duplicate share index {0}")]
    DuplicateIndex(u32),

    #[error("modular inverse does not exist")]
    NoInverse,
}

/// Reasons a single encoded share fails to parse
#[derive(Debug, Error, PartialEq)]
pub enum ParseShareError {
    #[error("missing '-' separator between index and value")]
    MissingSeparator,

    #[error("index is not a decimal number")]
    InvalidIndex,

    #[error("value is empty")]
    EmptyValue,

    #[error("value is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

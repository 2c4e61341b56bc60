//! Text encoding of a single share
//!
//! A share is written as `"<index>-<hex>"`: the decimal index, a dash, and
//! the share value as big-endian lowercase hex. The value is always padded to
//! [`ELEMENT_BYTES`] bytes (320 hex digits), the byte length of the modulus,
//! so every share of a split has the same width and decodes to the exact
//! integer regardless of leading zero bytes.
//!
//! Joining several encoded shares for transport (commas, lines, files) is the
//! caller's business; this module only handles one share at a time.
//!
//! # Examples
//!
//! ```rust
//! use primeshare::codec::{encode_share, parse_share};
//! use primeshare::domain::{Share, ShareIndex};
//! use primeshare::field::FieldElement;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let share = Share::new(ShareIndex::new(3)?, FieldElement::from(0xbeefu32));
//! let encoded = encode_share(&share);
//!
//! assert!(encoded.as_str().starts_with("3-0000"));
//! assert!(encoded.as_str().ends_with("beef"));
//!
//! assert_eq!(parse_share(encoded.as_str())?, share);
//! # Ok(())
//! # }
//! ```

use zeroize::Zeroizing;

use crate::domain::{Share, ShareIndex};
use crate::error::{Error, ParseShareError, Result};
use crate::field::{ELEMENT_BYTES, FieldElement};

/// Separator between index and value
pub const SEPARATOR: char = '-';

/// Number of hex digits in an encoded share value
pub const VALUE_HEX_LEN: usize = ELEMENT_BYTES * 2;

/// An encoded share string
///
/// Wraps the text in `Zeroizing` to ensure secure memory cleanup.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedShare(Zeroizing<String>);

impl EncodedShare {
    /// Gets the encoded share as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EncodedShare {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for EncodedShare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &*self.0)
    }
}

/// Encodes a share as `"<index>-<fixed-width hex>"`
#[must_use]
pub fn encode_share(share: &Share) -> EncodedShare {
    let value = share.value.to_fixed_bytes();
    EncodedShare(Zeroizing::new(format!(
        "{}{SEPARATOR}{}",
        share.index,
        hex::encode(&*value)
    )))
}

/// Parses one encoded share
///
/// Errors report the share at position 1; [`crate::sharing::combine`] reports
/// the real position within its input.
///
/// # Errors
/// - [`Error::MalformedShare`] on a missing separator, a non-decimal index, or
///   an empty or invalid hex value
/// - [`Error::InvalidShareIndex`] if the index is 0 or exceeds `u32::MAX`
/// - [`Error::ValueOutOfRange`] if the value is not below the field modulus
pub fn parse_share(encoded: &str) -> Result<Share> {
    parse_share_at(1, encoded)
}

/// Parses the share found at `position` (1-based) of a combine input
pub(crate) fn parse_share_at(position: usize, encoded: &str) -> Result<Share> {
    let malformed = |source: ParseShareError| Error::MalformedShare { position, source };

    let (index_text, value_text) = encoded
        .split_once(SEPARATOR)
        .ok_or_else(|| malformed(ParseShareError::MissingSeparator))?;

    let index = parse_index(position, index_text)?;

    if value_text.is_empty() {
        return Err(malformed(ParseShareError::EmptyValue));
    }
    let bytes = Zeroizing::new(
        hex::decode(value_text).map_err(|e| malformed(ParseShareError::InvalidHex(e)))?,
    );
    let value =
        FieldElement::from_canonical_bytes(&bytes).ok_or(Error::ValueOutOfRange { position })?;

    Ok(Share::new(index, value))
}

/// Decimal digits only; signs and whitespace are malformed, overflow and zero
/// are out of range
fn parse_index(position: usize, text: &str) -> Result<ShareIndex> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::MalformedShare {
            position,
            source: ParseShareError::InvalidIndex,
        });
    }

    let out_of_range = || Error::InvalidShareIndex {
        position,
        index: text.to_string(),
    };
    let value: u32 = text.parse().map_err(|_| out_of_range())?;
    ShareIndex::new(value).map_err(|_| out_of_range())
}

//! Property tests for the share wire format

use primeshare::codec::{VALUE_HEX_LEN, encode_share, parse_share};
use primeshare::domain::{Share, ShareIndex};
use primeshare::field::{ELEMENT_BYTES, FieldElement};
use primeshare::{Error, ParseShareError};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Wrapper for arbitrary field elements built from up to 159 random bytes
#[derive(Clone, Debug)]
struct AnyElement(FieldElement);

impl Arbitrary for AnyElement {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % ELEMENT_BYTES;
        let bytes: Vec<u8> = (0..len).map(|_| u8::arbitrary(g)).collect();
        let element = FieldElement::from_canonical_bytes(&bytes)
            .unwrap_or_else(|| unreachable!("fewer than 160 bytes is below the modulus"));
        AnyElement(element)
    }
}

/// Test that every encoded share parses back to the same point
#[quickcheck]
fn prop_encode_parse_identity(index: u32, value: AnyElement) -> bool {
    let Ok(index) = ShareIndex::new(index.max(1)) else {
        return false;
    };
    let share = Share::new(index, value.0);
    let encoded = encode_share(&share);

    parse_share(encoded.as_str()) == Ok(share)
}

/// Test that encoded values always have the fixed width
#[quickcheck]
fn prop_encoded_width_is_fixed(index: u8, value: AnyElement) -> bool {
    let Ok(index) = ShareIndex::new(u32::from(index) + 1) else {
        return false;
    };
    let encoded = encode_share(&Share::new(index, value.0));

    encoded
        .as_str()
        .split_once('-')
        .is_some_and(|(_, hex)| hex.len() == VALUE_HEX_LEN)
}

/// Test that strings without a separator are always rejected as malformed
#[quickcheck]
fn prop_missing_separator_rejected(text: String) -> bool {
    if text.contains('-') {
        return true;
    }
    parse_share(&text)
        == Err(Error::MalformedShare {
            position: 1,
            source: ParseShareError::MissingSeparator,
        })
}

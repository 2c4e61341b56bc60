//! Decoded share point

use crate::field::FieldElement;

use super::ShareIndex;

/// One evaluation point `(x, f(x) mod p)` of a secret polynomial
///
/// A share on its own says nothing about the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub index: ShareIndex,
    pub value: FieldElement,
}

impl Share {
    #[must_use]
    pub fn new(index: ShareIndex, value: FieldElement) -> Self {
        Self { index, value }
    }
}

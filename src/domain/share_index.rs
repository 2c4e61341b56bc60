//! `ShareIndex` newtype for Shamir Secret Sharing

use std::num::NonZeroU8;

use crate::error::{Error, Result};
use crate::field::FieldElement;

/// Share index, the x-coordinate of a share (1..=`u32::MAX`)
///
/// Index 0 is the evaluation point of the secret itself and is never issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u32);

impl ShareIndex {
    /// Creates a new share index
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameters`] if index is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeshare::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(1).unwrap();
    /// assert_eq!(*index, 1);
    ///
    /// assert!(ShareIndex::new(0).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(Error::InvalidParameters(
                "share index must be at least 1".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// The index as a field element
    #[must_use]
    pub fn to_field(self) -> FieldElement {
        FieldElement::from(self.0)
    }
}

impl From<NonZeroU8> for ShareIndex {
    fn from(value: NonZeroU8) -> Self {
        Self(u32::from(value.get()))
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ShareIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

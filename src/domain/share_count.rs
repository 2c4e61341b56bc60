//! `ShareCount` newtype for Shamir Secret Sharing

use std::num::NonZeroU8;

use crate::error::{Error, Result};

use super::ShareIndex;

/// Number of shares to create (1..=255)
///
/// Share indices run from 1 to the share count, so every index of a split
/// fits in a `u8` and stays far below the field modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u8);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u8 = 1;

    /// Maximum valid share count
    pub const MAX: u8 = u8::MAX;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameters`] if count is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeshare::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// let max_count = ShareCount::new(ShareCount::MAX).unwrap();
    /// assert_eq!(*max_count, 255);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN {
            return Err(Error::InvalidParameters(
                "share count must be at least 1".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Indices `1..=count` handed out by a split
    pub fn indices(self) -> impl Iterator<Item = ShareIndex> {
        (1..=self.0).filter_map(NonZeroU8::new).map(ShareIndex::from)
    }
}

impl TryFrom<usize> for ShareCount {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        let value = u8::try_from(value).map_err(|_| {
            Error::InvalidParameters(format!(
                "share count must be at most {} (got {value})",
                Self::MAX
            ))
        })?;
        Self::new(value)
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

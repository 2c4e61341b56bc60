//! Threshold newtype for Shamir Secret Sharing

use crate::error::{Error, Result};

/// Threshold for Shamir Secret Sharing (1..=255)
///
/// Invariant: threshold >= 1 (enforced at construction).
/// A threshold of 1 is accepted: every share then carries the secret itself,
/// which is legitimate for plain replication but offers no secrecy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Smallest valid threshold
    pub const MIN: u8 = 1;

    /// Largest valid threshold
    pub const MAX: u8 = u8::MAX;

    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameters`] if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeshare::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(1).is_ok());
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN {
            return Err(Error::InvalidParameters(format!(
                "threshold must be at least {} (got {value})",
                Self::MIN
            )));
        }
        Ok(Self(value))
    }

    /// Polynomial degree implied by this threshold
    #[must_use]
    pub fn degree(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl TryFrom<usize> for Threshold {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        let value = u8::try_from(value).map_err(|_| {
            Error::InvalidParameters(format!(
                "threshold must be at most {} (got {value})",
                Self::MAX
            ))
        })?;
        Self::new(value)
    }
}

impl std::ops::Deref for Threshold {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

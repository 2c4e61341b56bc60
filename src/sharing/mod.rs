//! Splitting secrets into shares and combining them back
//!
//! [`split`] turns a secret into `n` encoded shares, any `t` of which
//! reconstruct it through [`combine`].
//!
//! # Fewer shares than the threshold
//!
//! `combine` cannot know the threshold a set of shares was made with. Given
//! fewer shares than that threshold it interpolates a different polynomial and
//! returns its constant term: a wrong secret, with no error. Supplying enough
//! shares from the same split is the caller's responsibility. A single share is
//! accepted and yields its own value, which is only the secret when the split
//! used threshold 1.
//!
//! # Leading zero bytes
//!
//! The secret travels as one integer, so leading zero bytes of the original
//! secret are not recovered and the empty secret comes back empty. Callers that
//! need the exact length must carry it alongside the shares.
//!
//! # Examples
//!
//! ```rust
//! use primeshare::sharing::{combine, split};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let shares = split(b"my_secret", 3, 2)?;
//! assert_eq!(shares.len(), 3);
//!
//! let recovered = combine(&[&shares[0], &shares[2]])?;
//! assert_eq!(recovered.as_slice(), b"my_secret");
//! # Ok(())
//! # }
//! ```

mod interpolate;
mod polynomial;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::codec::{self, EncodedShare};
use crate::domain::{Share, SplitConfig};
use crate::error::Result;
use crate::field::FieldElement;

pub use interpolate::interpolate_at_zero;
use polynomial::Polynomial;

/// Splits a secret into `total_shares` encoded shares, `threshold` of which
/// recover it
///
/// Coefficients are drawn from the operating system's secure generator.
///
/// # Errors
/// - [`crate::Error::InvalidParameters`] unless `1 <= threshold <= total_shares <= 255`
/// - [`crate::Error::SecretTooLarge`] if the secret does not fit in the field
pub fn split(secret: &[u8], total_shares: usize, threshold: usize) -> Result<Vec<EncodedShare>> {
    let config = SplitConfig::from_counts(total_shares, threshold)?;
    split_with_rng(secret, config, &mut OsRng)
}

/// Splits a secret using the supplied cryptographically secure generator
///
/// # Errors
/// Returns [`crate::Error::SecretTooLarge`] if the secret does not fit in the field
pub fn split_with_rng<R>(
    secret: &[u8],
    config: SplitConfig,
    rng: &mut R,
) -> Result<Vec<EncodedShare>>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let secret = FieldElement::from_secret_bytes(secret)?;
    let shares = deal(secret, config, rng);
    Ok(shares.iter().map(codec::encode_share).collect())
}

/// Evaluates a fresh random polynomial with `secret` as constant term at
/// `x = 1..=share_count`
pub fn deal<R>(secret: FieldElement, config: SplitConfig, rng: &mut R) -> Vec<Share>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let threshold = config.threshold();
    let share_count = config.share_count();
    debug!(threshold = *threshold, share_count = *share_count, "dealing shares");

    let polynomial = Polynomial::random(secret, threshold, rng);

    share_count
        .indices()
        .map(|index| Share::new(index, polynomial.evaluate(&index.to_field())))
        .collect()
}

/// Recovers a secret from encoded shares by Lagrange interpolation at zero
///
/// Shares may come in any order. See the module documentation for what
/// happens with fewer shares than the split threshold.
///
/// # Errors
/// - [`crate::Error::NoShares`] if `shares` is empty
/// - [`crate::Error::MalformedShare`], [`crate::Error::InvalidShareIndex`] or
///   [`crate::Error::ValueOutOfRange`] if a share fails to parse
/// - [`crate::Error::DuplicateIndex`] if two shares have the same index
pub fn combine<S>(shares: &[S]) -> Result<Zeroizing<Vec<u8>>>
where
    S: AsRef<str>,
{
    debug!(share_count = shares.len(), "combining shares");

    let parsed = shares
        .iter()
        .enumerate()
        .map(|(idx, share)| codec::parse_share_at(idx + 1, share.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let secret = interpolate_at_zero(&parsed)?;
    Ok(secret.to_minimal_bytes())
}

//! Lagrange interpolation at x = 0

use std::collections::HashSet;

use crate::domain::Share;
use crate::error::{Error, Result};
use crate::field::FieldElement;

/// Recovers the constant term of the unique polynomial of degree
/// `< shares.len()` passing through every share
///
/// With fewer points than the original threshold this still returns a value,
/// the constant term of a different polynomial, and nothing in the points can
/// tell the two cases apart.
///
/// # Errors
/// - [`Error::NoShares`] if `shares` is empty
/// - [`Error::DuplicateIndex`] if two shares have the same index
/// - [`Error::NoInverse`] if a basis denominator vanishes
pub fn interpolate_at_zero(shares: &[Share]) -> Result<FieldElement> {
    if shares.is_empty() {
        return Err(Error::NoShares);
    }

    let mut seen = HashSet::with_capacity(shares.len());
    for share in shares {
        if !seen.insert(share.index) {
            return Err(Error::DuplicateIndex(*share.index));
        }
    }

    let xs: Vec<FieldElement> = shares.iter().map(|s| s.index.to_field()).collect();

    let mut secret = FieldElement::zero();
    for (i, share) in shares.iter().enumerate() {
        let basis = basis_at_zero(&xs, i)?;
        secret = &secret + &(&share.value * &basis);
    }
    Ok(secret)
}

/// `L_i(0) = prod_{j != i} (-x_j) / (x_i - x_j)`
fn basis_at_zero(xs: &[FieldElement], i: usize) -> Result<FieldElement> {
    let x_i = &xs[i];
    let mut numerator = FieldElement::one();
    let mut denominator = FieldElement::one();

    for (j, x_j) in xs.iter().enumerate() {
        if i == j {
            continue;
        }
        numerator = &numerator * &(-x_j);
        denominator = &denominator * &(x_i - x_j);
    }

    Ok(&numerator * &denominator.inverse()?)
}

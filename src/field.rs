//! Arithmetic in the prime field GF(p)
//!
//! The modulus is the Mersenne prime `2^1279 - 1`. It is large enough to hold
//! any secret of up to 159 bytes (and 160-byte secrets whose top bit is clear)
//! as a single field element, so a secret never has to be chunked.
//!
//! # Examples
//!
//! ```rust
//! use primeshare::field::FieldElement;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let a = FieldElement::from(7u32);
//! let b = FieldElement::from(5u32);
//!
//! assert_eq!(&a + &b, FieldElement::from(12u32));
//! assert_eq!(&(&a * &a.inverse()?), &FieldElement::one());
//! assert!(FieldElement::zero().inverse().is_err());
//! # Ok(())
//! # }
//! ```

use std::ops::{Add, Mul, Neg, Sub};
use std::sync::LazyLock;

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Exponent of the Mersenne prime used as modulus
pub const MODULUS_BITS: u32 = 1279;

/// Byte length of the modulus, and the fixed width of every encoded share value
pub const ELEMENT_BYTES: usize = (MODULUS_BITS as usize).div_ceil(8);

/// The prime modulus `p = 2^1279 - 1`
static MODULUS: LazyLock<BigUint> =
    LazyLock::new(|| (BigUint::one() << MODULUS_BITS) - BigUint::one());

/// Signed copy of the modulus for the extended Euclidean algorithm
static SIGNED_MODULUS: LazyLock<BigInt> =
    LazyLock::new(|| BigInt::from_biguint(Sign::Plus, MODULUS.clone()));

/// Returns the field modulus
#[must_use]
pub fn modulus() -> &'static BigUint {
    &MODULUS
}

/// An element of GF(p), always held in canonical form `[0, p)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldElement(BigUint);

impl FieldElement {
    #[must_use]
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    #[must_use]
    pub fn one() -> Self {
        Self(BigUint::one())
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Interprets secret bytes as a big-endian unsigned integer
    ///
    /// The empty slice is the integer 0.
    ///
    /// # Errors
    /// Returns [`Error::SecretTooLarge`] if the integer is not below the modulus
    pub fn from_secret_bytes(secret: &[u8]) -> Result<Self> {
        let significant = secret
            .iter()
            .position(|&b| b != 0)
            .map_or(0, |start| secret.len() - start);
        if significant > ELEMENT_BYTES {
            return Err(Error::SecretTooLarge { len: secret.len() });
        }

        Self::from_canonical_bytes(secret).ok_or(Error::SecretTooLarge { len: secret.len() })
    }

    /// Builds an element from big-endian bytes, or `None` if the value is `>= p`
    #[must_use]
    pub fn from_canonical_bytes(bytes: &[u8]) -> Option<Self> {
        let value = BigUint::from_bytes_be(bytes);
        (value < *MODULUS).then_some(Self(value))
    }

    /// Draws an element uniformly from `[0, p)`
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        Self(rng.gen_biguint_below(&MODULUS))
    }

    /// Minimal big-endian encoding; zero encodes as the empty byte string
    #[must_use]
    pub fn to_minimal_bytes(&self) -> Zeroizing<Vec<u8>> {
        if self.is_zero() {
            return Zeroizing::new(Vec::new());
        }
        Zeroizing::new(self.0.to_bytes_be())
    }

    /// Big-endian encoding left-padded with zeros to [`ELEMENT_BYTES`]
    #[must_use]
    pub fn to_fixed_bytes(&self) -> Zeroizing<Vec<u8>> {
        let raw = Zeroizing::new(self.0.to_bytes_be());
        let mut padded = Zeroizing::new(vec![0u8; ELEMENT_BYTES]);
        padded[ELEMENT_BYTES - raw.len()..].copy_from_slice(&raw);
        padded
    }

    /// Multiplicative inverse via the extended Euclidean algorithm
    ///
    /// # Errors
    /// Returns [`Error::NoInverse`] when the element is zero
    pub fn inverse(&self) -> Result<Self> {
        let mut old_r = BigInt::from_biguint(Sign::Plus, self.0.clone());
        let mut r = SIGNED_MODULUS.clone();
        let mut old_s = BigInt::one();
        let mut s = BigInt::zero();

        while !r.is_zero() {
            let quotient = &old_r / &r;

            let next_r = &old_r - &quotient * &r;
            old_r = std::mem::replace(&mut r, next_r);

            let next_s = &old_s - &quotient * &s;
            old_s = std::mem::replace(&mut s, next_s);
        }

        if !old_r.is_one() {
            return Err(Error::NoInverse);
        }

        Ok(Self(normalize(old_s)))
    }
}

/// Reduces a signed integer into `[0, p)`
///
/// `BigInt` remainder truncates toward zero, so a negative input leaves a
/// negative remainder that has to be lifted by `p`.
fn normalize(value: BigInt) -> BigUint {
    let mut reduced = value % &*SIGNED_MODULUS;
    if reduced.sign() == Sign::Minus {
        reduced += &*SIGNED_MODULUS;
    }
    reduced.into_parts().1
}

impl From<u32> for FieldElement {
    fn from(value: u32) -> Self {
        // every u32 is far below p
        Self(BigUint::from(value))
    }
}

impl Add for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: Self) -> FieldElement {
        FieldElement((&self.0 + &rhs.0) % &*MODULUS)
    }
}

impl Sub for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: Self) -> FieldElement {
        self + &(-rhs)
    }
}

impl Mul for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: Self) -> FieldElement {
        FieldElement((&self.0 * &rhs.0) % &*MODULUS)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement((&*MODULUS - &self.0) % &*MODULUS)
    }
}

//! Random secret polynomials and their evaluation

use rand::{CryptoRng, RngCore};

use crate::domain::Threshold;
use crate::field::FieldElement;

/// Coefficients `[c0, c1, ..., c_{t-1}]` of `f(x) = c0 + c1*x + ...`, with `c0`
/// the secret
pub(crate) struct Polynomial {
    coefficients: Vec<FieldElement>,
}

impl Polynomial {
    /// Builds a polynomial of degree `threshold - 1` whose constant term is
    /// the secret and whose other coefficients are drawn uniformly from the
    /// field
    pub(crate) fn random<R>(secret: FieldElement, threshold: Threshold, rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut coefficients = Vec::with_capacity(usize::from(*threshold));
        coefficients.push(secret);
        coefficients.extend(
            (0..threshold.degree()).map(|_| FieldElement::random(&mut *rng)),
        );
        Self { coefficients }
    }

    #[cfg(test)]
    pub(crate) fn from_coefficients(coefficients: Vec<FieldElement>) -> Self {
        Self { coefficients }
    }

    #[cfg(test)]
    pub(crate) fn coefficients(&self) -> &[FieldElement] {
        &self.coefficients
    }

    /// Evaluates `f(x) mod p` with Horner's method, highest coefficient first
    pub(crate) fn evaluate(&self, x: &FieldElement) -> FieldElement {
        self.coefficients
            .iter()
            .rev()
            .fold(FieldElement::zero(), |acc, coefficient| {
                &(&acc * x) + coefficient
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn poly(coefficients: &[u32]) -> Polynomial {
        Polynomial::from_coefficients(
            coefficients
                .iter()
                .copied()
                .map(FieldElement::from)
                .collect(),
        )
    }

    #[test]
    fn test_horner_evaluation() {
        // x^2 + 2x + 3
        let p = poly(&[3, 2, 1]);
        assert_eq!(p.evaluate(&FieldElement::from(0u32)), FieldElement::from(3u32));
        assert_eq!(p.evaluate(&FieldElement::from(1u32)), FieldElement::from(6u32));
        assert_eq!(p.evaluate(&FieldElement::from(2u32)), FieldElement::from(11u32));
        assert_eq!(p.evaluate(&FieldElement::from(10u32)), FieldElement::from(123u32));
    }

    #[test]
    fn test_constant_polynomial() {
        let p = poly(&[42]);
        for x in 1..5u32 {
            assert_eq!(p.evaluate(&FieldElement::from(x)), FieldElement::from(42u32));
        }
    }

    #[test]
    fn test_random_polynomial_shape() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let secret = FieldElement::from(99u32);
        let p = Polynomial::random(secret.clone(), Threshold::new(4).unwrap(), &mut rng);

        assert_eq!(p.coefficients().len(), 4);
        assert_eq!(p.coefficients()[0], secret);
        assert_eq!(p.evaluate(&FieldElement::zero()), secret);
    }

    #[test]
    fn test_fresh_coefficients_each_call() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let threshold = Threshold::new(3).unwrap();
        let first = Polynomial::random(FieldElement::one(), threshold, &mut rng);
        let second = Polynomial::random(FieldElement::one(), threshold, &mut rng);

        assert_eq!(first.coefficients()[0], second.coefficients()[0]);
        assert_ne!(first.coefficients()[1..], second.coefficients()[1..]);
    }
}

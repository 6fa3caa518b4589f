//! EIP-197 style product-of-pairings checks.
//!
//! A check is a sequence of (G1, G2) terms whose combined pairing product
//! must equal the multiplicative identity. The backend sits behind a trait
//! so the verification logic does not care whether the product runs on the
//! in-process multi-Miller loop or an external precompile fed with the
//! calldata encoding below.

use ark_ec::pairing::Pairing;
use ark_ec::AffineRepr;
use ark_ff::{BigInteger, PrimeField, Zero};

use crate::constant_for_curves::{G1Affine, G2Affine, E};
use crate::errors::KzgError;

/// One `e(G1, G2)` factor of a product-equals-one check.
pub type PairingTerm = (G1Affine, G2Affine);

/// Pairing backend seam.
pub trait PairingEngine {
    /// `true` iff the product of pairings over all terms is the identity.
    /// At least one term is required (`EmptyPairingInput`).
    fn product_is_one(&self, terms: &[PairingTerm]) -> Result<bool, KzgError>;
}

/// In-process backend over the arkworks multi-pairing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bn254Engine;

impl PairingEngine for Bn254Engine {
    fn product_is_one(&self, terms: &[PairingTerm]) -> Result<bool, KzgError> {
        if terms.is_empty() {
            return Err(KzgError::EmptyPairingInput);
        }
        let g1: Vec<G1Affine> = terms.iter().map(|t| t.0).collect();
        let g2: Vec<G2Affine> = terms.iter().map(|t| t.1).collect();
        Ok(E::multi_pairing(g1, g2).is_zero())
    }
}

/// Calldata for the EIP-197 pairing precompile: per term the G1 point as
/// `x || y`, then the G2 point with each extension coordinate emitted
/// imaginary part first, all as 32-byte big-endian words. Points at
/// infinity encode as zero words. The precompile returns a word decoding to
/// `1` exactly when the product is the identity.
pub fn eip197_calldata(terms: &[PairingTerm]) -> Result<Vec<u8>, KzgError> {
    if terms.is_empty() {
        return Err(KzgError::EmptyPairingInput);
    }
    let mut data = Vec::with_capacity(terms.len() * 192);
    for (g1, g2) in terms {
        let (x, y) = g1.xy().unwrap_or_default();
        data.extend_from_slice(&x.into_bigint().to_bytes_be());
        data.extend_from_slice(&y.into_bigint().to_bytes_be());
        let (x, y) = g2.xy().unwrap_or_default();
        for coord in [x.c1, x.c0, y.c1, y.c0] {
            data.extend_from_slice(&coord.into_bigint().to_bytes_be());
        }
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use ark_ec::CurveGroup;
    use ark_std::UniformRand;
    use rand::thread_rng;

    use super::*;
    use crate::constant_for_curves::ScalarField;

    type F = ScalarField;

    #[test]
    fn pairing_is_bilinear() {
        let mut rng = thread_rng();
        let a = F::rand(&mut rng);
        let g = G1Affine::generator();
        let h = G2Affine::generator();

        let lhs = E::pairing((g * a).into_affine(), h);
        let rhs = E::pairing(g, (h * a).into_affine());
        assert_eq!(lhs, rhs);

        let b = F::rand(&mut rng);
        let c = F::rand(&mut rng);
        let sum = E::pairing(g, ((h * b) + (h * c)).into_affine());
        let product = E::pairing(g, (h * b).into_affine()).0 * E::pairing(g, (h * c).into_affine()).0;
        assert_eq!(sum.0, product);
    }

    #[test]
    fn generator_terms_cancel() {
        let engine = Bn254Engine;
        let g = G1Affine::generator();
        let h = G2Affine::generator();

        assert!(engine.product_is_one(&[(g, h), (-g, h)]).unwrap());

        // e(5P, Q) * e(-P, 5Q) == 1
        let five = F::from(5u64);
        let terms = [((g * five).into_affine(), h), (-g, (h * five).into_affine())];
        assert!(engine.product_is_one(&terms).unwrap());

        assert!(!engine.product_is_one(&[(g, h)]).unwrap());
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(
            Bn254Engine.product_is_one(&[]),
            Err(KzgError::EmptyPairingInput)
        );
        assert_eq!(eip197_calldata(&[]), Err(KzgError::EmptyPairingInput));
    }

    #[test]
    fn calldata_layout() {
        let g = G1Affine::generator();
        let h = G2Affine::generator();
        let data = eip197_calldata(&[(g, h), (g, h)]).unwrap();
        assert_eq!(data.len(), 2 * 192);

        // bn254 G1 generator is (1, 2)
        let mut word = [0u8; 32];
        word[31] = 1;
        assert_eq!(&data[..32], &word);
        word[31] = 2;
        assert_eq!(&data[32..64], &word);

        // G2 x coordinate starts with its imaginary part
        let (x, _) = h.xy().unwrap();
        assert_eq!(&data[64..96], x.c1.into_bigint().to_bytes_be().as_slice());
        assert_eq!(&data[96..128], x.c0.into_bigint().to_bytes_be().as_slice());

        // both terms encode identically
        assert_eq!(&data[..192], &data[192..]);
    }

    #[test]
    fn infinity_encodes_as_zero_words() {
        let data = eip197_calldata(&[(G1Affine::zero(), G2Affine::generator())]).unwrap();
        assert!(data[..64].iter().all(|&b| b == 0));
    }
}

//! Commitment and opening-proof generation, generic over the group so both
//! verifier orientations (commitment in G1 with proofs in G2, and the
//! mirror) share one implementation.

use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::PrimeField;
use ark_poly::univariate::DensePolynomial;
use num_bigint::BigInt;

use crate::errors::KzgError;
use crate::poly::{quotient, quotient_multi};
use crate::utils::fe_from_bigint;

/// `sum_i coeffs[i] * srs[i]`, affine-normalized.
pub fn commit<G: AffineRepr>(coeffs: &[G::ScalarField], srs: &[G]) -> Result<G, KzgError>
where
    G::Group: VariableBaseMSM<MulBase = G>,
{
    if srs.len() < coeffs.len() {
        return Err(KzgError::InsufficientSrs {
            needed: coeffs.len(),
            available: srs.len(),
        });
    }
    Ok(G::Group::msm_unchecked(&srs[..coeffs.len()], coeffs).into_affine())
}

/// Untyped entry point taking raw big-integer coefficients, rejecting
/// negative and non-canonical values before folding.
pub fn commit_raw<G: AffineRepr>(coeffs: &[BigInt], srs: &[G]) -> Result<G, KzgError>
where
    G::Group: VariableBaseMSM<MulBase = G>,
{
    let scalars: Vec<G::ScalarField> = coeffs
        .iter()
        .map(fe_from_bigint)
        .collect::<Result<_, _>>()?;
    commit(&scalars, srs)
}

/// Opening proof for `poly` at `x`: a commitment to the quotient
/// `(poly(X) - poly(x)) / (X - x)` over the supplied (proof-side) SRS.
pub fn gen_proof<G: AffineRepr>(
    poly: &DensePolynomial<G::ScalarField>,
    x: G::ScalarField,
    srs: &[G],
) -> Result<G, KzgError>
where
    G::Group: VariableBaseMSM<MulBase = G>,
{
    let q = quotient(poly, x)?;
    commit(&q.coeffs, srs)
}

/// Batch opening proof for `poly` over `indices`: a commitment to
/// `(poly(X) - I(X)) / Z(X)`.
pub fn gen_multi_proof<G: AffineRepr>(
    poly: &DensePolynomial<G::ScalarField>,
    indices: &[G::ScalarField],
    srs: &[G],
) -> Result<G, KzgError>
where
    G::Group: VariableBaseMSM<MulBase = G>,
{
    let q = quotient_multi(poly, indices)?;
    commit(&q.coeffs, srs)
}

/// `y * pk`, the masked evaluation claim `sk * y * G` when `pk = sk * G`.
/// With the generator as `pk` this is the plain unmasked `y * G`.
pub fn masked_value<G: AffineRepr>(pk: &G, y: &G::ScalarField) -> G {
    pk.mul_bigint(y.into_bigint()).into_affine()
}

#[cfg(test)]
mod tests {
    use ark_ec::AffineRepr;
    use ark_poly::DenseUVPolynomial;
    use ark_std::UniformRand;
    use num_bigint::BigInt;
    use rand::thread_rng;

    use super::*;
    use crate::constant_for_curves::{G1Affine, ScalarField};
    use crate::srs::Srs;

    type F = ScalarField;

    #[test]
    fn commitment_is_the_srs_fold() {
        let mut rng = thread_rng();
        let tau = F::rand(&mut rng);
        let srs = Srs::insecure_setup(tau, 8).unwrap();
        let coeffs: Vec<F> = (0..5).map(|_| F::rand(&mut rng)).collect();

        let commitment = commit(&coeffs, srs.g1()).unwrap();

        // against powers of a known tau the fold collapses to p(tau) * G
        let poly = DensePolynomial::from_coefficients_vec(coeffs);
        use ark_poly::Polynomial;
        let expected = (G1Affine::generator() * poly.evaluate(&tau)).into_affine();
        assert_eq!(commitment, expected);
    }

    #[test]
    fn short_srs_is_rejected() {
        let srs = Srs::insecure_setup(F::from(3u64), 2).unwrap();
        let coeffs = vec![F::from(1u64); 3];
        assert_eq!(
            commit(&coeffs, srs.g1()),
            Err(KzgError::InsufficientSrs {
                needed: 3,
                available: 2
            })
        );
    }

    #[test]
    fn raw_commitment_checks_signs() {
        let srs = Srs::insecure_setup(F::from(3u64), 4).unwrap();
        let ok = commit_raw(&[BigInt::from(5), BigInt::from(7)], srs.g1()).unwrap();
        assert_eq!(
            ok,
            commit(&[F::from(5u64), F::from(7u64)], srs.g1()).unwrap()
        );
        assert_eq!(
            commit_raw::<G1Affine>(&[BigInt::from(-5)], srs.g1()),
            Err(KzgError::NegativeCoefficient)
        );
    }

    #[test]
    fn masked_value_with_generator_pk_is_plain() {
        let mut rng = thread_rng();
        let y = F::rand(&mut rng);
        let plain = masked_value(&G1Affine::generator(), &y);
        assert_eq!(plain, (G1Affine::generator() * y).into_affine());
    }
}

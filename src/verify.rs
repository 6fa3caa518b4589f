//! Proof verification.
//!
//! The production path is the four-term EIP-197 pairing product whose term
//! order is bit-exact with the on-chain verifier contracts. Both group
//! orientations are supported: commitment in G2 with G1 proofs (and a G1
//! masking key), and the mirror. The `DebugTrapdoor` shortcut needs the
//! setup secret and exists for tests and sanity checks only.

use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_poly::univariate::DensePolynomial;
use ark_poly::Polynomial;

use crate::constant_for_curves::{G1Affine, G2Affine, ScalarField};
use crate::errors::KzgError;
use crate::kzg::commit;
use crate::pairing::{Bn254Engine, PairingEngine, PairingTerm};
use crate::poly::{lagrange_interpolate, quotient, quotient_multi, vanishing_poly};
use crate::srs::Srs;

/// Pairing-based proof checks against a loaded SRS.
///
/// Every method returns `Ok(false)` for an invalid proof; errors are
/// reserved for malformed preconditions such as a too-shallow SRS.
pub struct KzgVerifier<'a, P: PairingEngine = Bn254Engine> {
    srs: &'a Srs,
    engine: P,
}

impl<'a> KzgVerifier<'a> {
    pub fn new(srs: &'a Srs) -> Self {
        Self {
            srs,
            engine: Bn254Engine,
        }
    }
}

impl<'a, P: PairingEngine> KzgVerifier<'a, P> {
    pub fn with_engine(srs: &'a Srs, engine: P) -> Self {
        Self { srs, engine }
    }

    /// Commitment in G2, proof/value/pk in G1.
    ///
    /// Checks `e(pk, C) * e(w, x*G2) * e(-w, tau*G2) * e(-value, G2) == 1`,
    /// in exactly that order. `value` is `sk * y * G1` under a masking key
    /// `pk = sk * G1`, or plain `y * G1` when `pk` is the generator.
    pub fn verify_g2_commitment(
        &self,
        commitment: &G2Affine,
        proof: &G1Affine,
        index: ScalarField,
        value: &G1Affine,
        pk: &G1Affine,
    ) -> Result<bool, KzgError> {
        let tau_g2 = self.srs.g2_powers(2)?[1];
        let g2 = G2Affine::generator();
        let x_g2 = (g2 * index).into_affine();
        let terms: [PairingTerm; 4] = [
            (*pk, *commitment),
            (*proof, x_g2),
            (-*proof, tau_g2),
            (-*value, g2),
        ];
        self.engine.product_is_one(&terms)
    }

    /// Mirrored orientation: commitment in G1, proof/value/pk in G2.
    pub fn verify_g1_commitment(
        &self,
        commitment: &G1Affine,
        proof: &G2Affine,
        index: ScalarField,
        value: &G2Affine,
        pk: &G2Affine,
    ) -> Result<bool, KzgError> {
        let tau_g1 = self.srs.g1_powers(2)?[1];
        let g1 = G1Affine::generator();
        let x_g1 = (g1 * index).into_affine();
        let terms: [PairingTerm; 4] = [
            (*commitment, *pk),
            (x_g1, *proof),
            (tau_g1, -*proof),
            (g1, -*value),
        ];
        self.engine.product_is_one(&terms)
    }

    /// Batch opening at `indices` against claimed `values`, commitment in
    /// G1 with the multiproof in G2. The x/tau term pair of the single-point
    /// check is replaced by commitments to the vanishing polynomial `Z` of
    /// the index set and the interpolation `I` of the claimed values.
    /// Unmasked.
    pub fn verify_multi_g1_commitment(
        &self,
        commitment: &G1Affine,
        multi_proof: &G2Affine,
        indices: &[ScalarField],
        values: &[ScalarField],
    ) -> Result<bool, KzgError> {
        let z = vanishing_poly(indices);
        let interpolated = lagrange_interpolate(indices, values)?;
        let z_commit: G1Affine = commit(&z.coeffs, self.srs.g1())?;
        let i_commit: G1Affine = commit(&interpolated.coeffs, self.srs.g1())?;
        // Z(tau) * q(tau) - (p(tau) - I(tau)) == 0
        let diff = (i_commit.into_group() - *commitment).into_affine();
        let terms: [PairingTerm; 2] = [(z_commit, *multi_proof), (diff, G2Affine::generator())];
        self.engine.product_is_one(&terms)
    }

    /// Mirrored batch opening: commitment in G2, multiproof in G1.
    pub fn verify_multi_g2_commitment(
        &self,
        commitment: &G2Affine,
        multi_proof: &G1Affine,
        indices: &[ScalarField],
        values: &[ScalarField],
    ) -> Result<bool, KzgError> {
        let z = vanishing_poly(indices);
        let interpolated = lagrange_interpolate(indices, values)?;
        let z_commit: G2Affine = commit(&z.coeffs, self.srs.g2())?;
        let i_commit: G1Affine = commit(&interpolated.coeffs, self.srs.g1())?;
        let terms: [PairingTerm; 3] = [
            (*multi_proof, z_commit),
            (-G1Affine::generator(), *commitment),
            (i_commit, G2Affine::generator()),
        ];
        self.engine.product_is_one(&terms)
    }
}

/// Verification shortcut for holders of the setup trapdoor: with `tau` in
/// hand the whole pairing equation collapses to scalar arithmetic on the
/// "scalar images" `p(tau)` and `q(tau)` of commitment and proof.
///
/// Strictly a test/sanity capability. It is not sound as a trust boundary
/// because producing it requires the very secret whose destruction makes
/// the scheme binding.
#[derive(Clone, Copy, Debug)]
pub struct DebugTrapdoor<F: PrimeField> {
    tau: F,
}

impl<F: PrimeField> DebugTrapdoor<F> {
    pub fn new(tau: F) -> Self {
        Self { tau }
    }

    /// Scalar image of a commitment to `poly`: `p(tau)`.
    pub fn commit_scalar(&self, poly: &DensePolynomial<F>) -> F {
        poly.evaluate(&self.tau)
    }

    /// Scalar image of an opening proof at `x`: `q(tau)`.
    pub fn open_scalar(&self, poly: &DensePolynomial<F>, x: F) -> Result<F, KzgError> {
        Ok(quotient(poly, x)?.evaluate(&self.tau))
    }

    /// Scalar image of a batch opening proof over `indices`.
    pub fn open_multi_scalar(&self, poly: &DensePolynomial<F>, indices: &[F]) -> Result<F, KzgError> {
        Ok(quotient_multi(poly, indices)?.evaluate(&self.tau))
    }

    /// The single-point pairing equation in the scalar field:
    /// `p(tau) - y == q(tau) * (tau - x)`.
    pub fn verify(&self, commitment: F, witness: F, x: F, y: F) -> bool {
        commitment - y == witness * (self.tau - x)
    }

    /// The batch equation in the scalar field:
    /// `p(tau) - I(tau) == q(tau) * Z(tau)`.
    pub fn verify_multi(
        &self,
        commitment: F,
        witness: F,
        indices: &[F],
        values: &[F],
    ) -> Result<bool, KzgError> {
        let z = vanishing_poly(indices).evaluate(&self.tau);
        let interpolated = lagrange_interpolate(indices, values)?.evaluate(&self.tau);
        Ok(commitment - interpolated == witness * z)
    }
}

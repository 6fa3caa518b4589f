//! Serializable parameter bundles for external verifier contracts.
//!
//! Points and scalars are rendered as 0x-prefixed lowercase hex with no
//! leading-zero padding, matching what contract constructors and ABI
//! encoders expect. G2 coordinates are emitted imaginary part first, the
//! same convention as the EIP-197 calldata encoding.

use ark_ec::AffineRepr;
use serde::{Deserialize, Serialize};

use crate::constant_for_curves::{G1Affine, G2Affine, ScalarField};
use crate::errors::KzgError;
use crate::poly::{lagrange_interpolate, vanishing_poly};
use crate::utils::fe_to_hex;

/// A point in either group: G1 as `[x, y]`, G2 as `[[x_im, x_re],
/// [y_im, y_re]]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointParam {
    G1([String; 2]),
    G2([[String; 2]; 2]),
}

pub fn g1_param(p: &G1Affine) -> PointParam {
    let (x, y) = p.xy().unwrap_or_default();
    PointParam::G1([fe_to_hex(&x), fe_to_hex(&y)])
}

pub fn g2_param(p: &G2Affine) -> PointParam {
    let (x, y) = p.xy().unwrap_or_default();
    PointParam::G2([
        [fe_to_hex(&x.c1), fe_to_hex(&x.c0)],
        [fe_to_hex(&y.c1), fe_to_hex(&y.c0)],
    ])
}

/// Everything a single-point verifier contract call needs:
/// `verify(commitment, proof, index, value, pk)`. The claimed evaluation
/// travels as the group point `value = y * pk` (masked, or plain `y * G`
/// under the generator key), never as a bare scalar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleProofParams {
    pub commitment: PointParam,
    pub proof: PointParam,
    pub index: String,
    pub value: PointParam,
    pub pk: PointParam,
}

/// Parameters for the G2-commitment orientation (proof, value and pk in G1).
pub fn single_proof_params_g2_commitment(
    commitment: &G2Affine,
    proof: &G1Affine,
    index: &ScalarField,
    value: &G1Affine,
    pk: &G1Affine,
) -> SingleProofParams {
    SingleProofParams {
        commitment: g2_param(commitment),
        proof: g1_param(proof),
        index: fe_to_hex(index),
        value: g1_param(value),
        pk: g1_param(pk),
    }
}

/// Parameters for the mirrored orientation (commitment in G1, everything
/// else in G2).
pub fn single_proof_params_g1_commitment(
    commitment: &G1Affine,
    proof: &G2Affine,
    index: &ScalarField,
    value: &G2Affine,
    pk: &G2Affine,
) -> SingleProofParams {
    SingleProofParams {
        commitment: g1_param(commitment),
        proof: g2_param(proof),
        index: fe_to_hex(index),
        value: g2_param(value),
        pk: g2_param(pk),
    }
}

/// Batch-opening call parameters. The contract re-derives nothing: the
/// coefficients of the interpolation `I` and the vanishing polynomial `Z`
/// over the opened index set are shipped alongside the points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiProofParams {
    pub commitment: PointParam,
    pub multi_proof: PointParam,
    pub indices: Vec<String>,
    pub values: Vec<String>,
    pub i_coeffs: Vec<String>,
    pub z_coeffs: Vec<String>,
}

pub fn multi_proof_params_g1_commitment(
    commitment: &G1Affine,
    multi_proof: &G2Affine,
    indices: &[ScalarField],
    values: &[ScalarField],
) -> Result<MultiProofParams, KzgError> {
    let interpolated = lagrange_interpolate(indices, values)?;
    let z = vanishing_poly(indices);
    Ok(MultiProofParams {
        commitment: g1_param(commitment),
        multi_proof: g2_param(multi_proof),
        indices: indices.iter().map(fe_to_hex).collect(),
        values: values.iter().map(fe_to_hex).collect(),
        i_coeffs: interpolated.coeffs.iter().map(fe_to_hex).collect(),
        z_coeffs: z.coeffs.iter().map(fe_to_hex).collect(),
    })
}

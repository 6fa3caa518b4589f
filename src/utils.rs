use ark_ff::{Field, PrimeField};
use num_bigint::{BigInt, BigUint, Sign};

use crate::errors::KzgError;

/// return [x^0, x^1, ..., x^n-1]
pub(crate) fn compute_powers<F: Field>(x: &F, n: usize) -> Vec<F> {
    let mut powers = Vec::with_capacity(n);
    let mut cur = F::ONE;
    for _ in 0..n {
        powers.push(cur);
        cur *= x;
    }
    powers
}

/// Canonical conversion into the field; values at or above the modulus are
/// rejected rather than silently reduced.
pub fn fe_from_biguint<F: PrimeField>(value: &BigUint) -> Result<F, KzgError> {
    let modulus: BigUint = F::MODULUS.into();
    if *value >= modulus {
        return Err(KzgError::ValueOutOfField);
    }
    Ok(F::from(value.clone()))
}

/// Parses a decimal or `0x`-prefixed hex string into a canonical field
/// element. The SRS ceremony tables mix both encodings.
pub fn fe_from_str<F: PrimeField>(s: &str) -> Result<F, KzgError> {
    let digits = s.trim();
    let parsed = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) => BigUint::parse_bytes(hex.as_bytes(), 16),
        None => BigUint::parse_bytes(digits.as_bytes(), 10),
    };
    let value = parsed.ok_or(KzgError::ValueOutOfField)?;
    fe_from_biguint(&value)
}

/// Signed variant used by the untyped commitment entry point.
pub fn fe_from_bigint<F: PrimeField>(value: &BigInt) -> Result<F, KzgError> {
    if value.sign() == Sign::Minus {
        return Err(KzgError::NegativeCoefficient);
    }
    fe_from_biguint(value.magnitude())
}

/// Minimal-width lowercase hex with a `0x` prefix, the encoding the verifier
/// contract ABI takes (unlike the fixed 32-byte words of the pairing
/// precompile calldata).
pub fn fe_to_hex<F: PrimeField>(value: &F) -> String {
    let digits: BigUint = value.into_bigint().into();
    format!("0x{:x}", digits)
}

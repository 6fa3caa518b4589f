//! Univariate polynomial helpers on top of `DensePolynomial`: Lagrange
//! interpolation, vanishing polynomials, and the exact divisions behind
//! opening proofs.

use ark_ff::{Field, Zero};
use ark_poly::univariate::{DenseOrSparsePolynomial, DensePolynomial};
use ark_poly::{DenseUVPolynomial, Polynomial};

use crate::errors::KzgError;

/// The unique polynomial of degree `< n` through `(i, values[i])` for
/// `i = 0..n`. Feeding the result to `commit` yields a commitment to these
/// values.
pub fn interpolate<F: Field>(values: &[F]) -> Result<DensePolynomial<F>, KzgError> {
    let xs: Vec<F> = (0..values.len() as u64).map(F::from).collect();
    lagrange_interpolate(&xs, values)
}

/// Lagrange interpolation through arbitrary `(xs[i], ys[i])` pairs.
/// An empty or length-mismatched point set is `InvalidInterpolationInput`;
/// coincident interpolation points surface as `InexactDivision`, the same
/// data-defect class as a failed quotient.
pub fn lagrange_interpolate<F: Field>(xs: &[F], ys: &[F]) -> Result<DensePolynomial<F>, KzgError> {
    if xs.is_empty() || xs.len() != ys.len() {
        return Err(KzgError::InvalidInterpolationInput);
    }
    let mut acc = DensePolynomial::from_coefficients_vec(vec![]);
    for (i, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
        // basis_i(X) = prod_{j != i} (X - x_j) / (x_i - x_j)
        let mut numer = DensePolynomial::from_coefficients_vec(vec![F::ONE]);
        let mut denom = F::ONE;
        for (j, &xj) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            numer = numer.naive_mul(&DensePolynomial::from_coefficients_vec(vec![-xj, F::ONE]));
            denom *= xi - xj;
        }
        let scale = yi * denom.inverse().ok_or(KzgError::InexactDivision)?;
        let scaled =
            DensePolynomial::from_coefficients_vec(numer.coeffs.iter().map(|c| *c * scale).collect());
        acc = &acc + &scaled;
    }
    Ok(acc)
}

/// Z(X) = prod_j (X - points[j])
pub fn vanishing_poly<F: Field>(points: &[F]) -> DensePolynomial<F> {
    let mut z = DensePolynomial::from_coefficients_vec(vec![F::ONE]);
    for &p in points {
        z = z.naive_mul(&DensePolynomial::from_coefficients_vec(vec![-p, F::ONE]));
    }
    z
}

/// Coefficients of `(poly(X) - poly(x)) / (X - x)`.
///
/// `x` is a root of the numerator by construction, so the division is exact;
/// a non-zero remainder means corrupted data rather than a bad proof and
/// fails with `InexactDivision`.
pub fn quotient<F: Field>(poly: &DensePolynomial<F>, x: F) -> Result<DensePolynomial<F>, KzgError> {
    let y = poly.evaluate(&x);
    let numer = poly - &DensePolynomial::from_coefficients_vec(vec![y]);
    let divisor = DensePolynomial::from_coefficients_vec(vec![-x, F::ONE]);
    divide_exact(&numer, &divisor)
}

/// Coefficients of `(poly(X) - I(X)) / Z(X)` where `Z` vanishes on `indices`
/// and `I` interpolates `poly` over them. The single-point quotient is the
/// one-index special case.
pub fn quotient_multi<F: Field>(
    poly: &DensePolynomial<F>,
    indices: &[F],
) -> Result<DensePolynomial<F>, KzgError> {
    let values: Vec<F> = indices.iter().map(|x| poly.evaluate(x)).collect();
    let interpolated = lagrange_interpolate(indices, &values)?;
    let numer = poly - &interpolated;
    divide_exact(&numer, &vanishing_poly(indices))
}

fn divide_exact<F: Field>(
    numer: &DensePolynomial<F>,
    divisor: &DensePolynomial<F>,
) -> Result<DensePolynomial<F>, KzgError> {
    let (q, r) = DenseOrSparsePolynomial::from(numer)
        .divide_with_q_and_r(&DenseOrSparsePolynomial::from(divisor))
        .ok_or(KzgError::InexactDivision)?;
    if !r.is_zero() {
        return Err(KzgError::InexactDivision);
    }
    Ok(q)
}

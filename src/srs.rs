//! Structured reference string: powers of a discarded secret tau in both
//! pairing groups, loaded from trusted ceremony tables.
//!
//! The reference data are the first 65536 entries of challenge file #46 of
//! the Perpetual Powers of Tau ceremony, shipped as two JSON tables. As long
//! as one ceremony participant discarded their toxic waste the tables are
//! sound; this crate only consumes them and never runs a setup of its own.

use std::path::Path;
use std::sync::OnceLock;

use ark_bn254::Fq2;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rayon::prelude::*;

use crate::constant_for_curves::{G1Affine, G1Projective, G2Affine, G2Projective, ScalarField};
use crate::errors::KzgError;
use crate::utils::{compute_powers, fe_from_str};

/// Entries per group in the ceremony tables.
pub const MAX_DEPTH: usize = 65536;

static GLOBAL_SRS: OnceLock<Srs> = OnceLock::new();

/// Parallel tables `g1[i] = tau^i * G1` and `g2[i] = tau^i * G2`.
///
/// Immutable once constructed; the index-0 entries are the group generators.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Srs {
    g1: Vec<G1Affine>,
    g2: Vec<G2Affine>,
}

impl Srs {
    /// The `[1, MAX_DEPTH]` precondition every depth argument must satisfy.
    pub fn check_depth(depth: usize) -> Result<(), KzgError> {
        if depth == 0 || depth > MAX_DEPTH {
            return Err(KzgError::InvalidDepth(depth));
        }
        Ok(())
    }

    /// Parses the first `depth` entries of the two ceremony tables.
    ///
    /// G1 entries are `[x, y]`; G2 entries are `[x_im, x_re, y_im, y_re]`
    /// and are reordered to the internal `(re, im)` convention. The index-0
    /// entries must decode to the group generators, which guards against
    /// corrupted or mis-indexed data.
    pub fn from_json_tables(g1_json: &str, g2_json: &str, depth: usize) -> Result<Self, KzgError> {
        Self::check_depth(depth)?;
        let g1_raw: Vec<[String; 2]> =
            serde_json::from_str(g1_json).map_err(|_| KzgError::CorruptSrs)?;
        let g2_raw: Vec<[String; 4]> =
            serde_json::from_str(g2_json).map_err(|_| KzgError::CorruptSrs)?;
        if g1_raw.len() < depth || g2_raw.len() < depth {
            return Err(KzgError::InvalidDepth(depth));
        }

        let mut g1 = Vec::with_capacity(depth);
        for entry in &g1_raw[..depth] {
            g1.push(G1Affine::new_unchecked(
                fe_from_str(&entry[0])?,
                fe_from_str(&entry[1])?,
            ));
        }
        let mut g2 = Vec::with_capacity(depth);
        for entry in &g2_raw[..depth] {
            let x = Fq2::new(fe_from_str(&entry[1])?, fe_from_str(&entry[0])?);
            let y = Fq2::new(fe_from_str(&entry[3])?, fe_from_str(&entry[2])?);
            g2.push(G2Affine::new_unchecked(x, y));
        }
        Self::validated(g1, g2)
    }

    pub fn from_files(
        g1_path: impl AsRef<Path>,
        g2_path: impl AsRef<Path>,
        depth: usize,
    ) -> Result<Self, KzgError> {
        let g1_json = std::fs::read_to_string(g1_path).map_err(|_| KzgError::CorruptSrs)?;
        let g2_json = std::fs::read_to_string(g2_path).map_err(|_| KzgError::CorruptSrs)?;
        Self::from_json_tables(&g1_json, &g2_json, depth)
    }

    /// Derives both tables from an explicit trapdoor. Test and development
    /// use only: a production SRS comes from the ceremony tables, with the
    /// trapdoor destroyed.
    pub fn insecure_setup(tau: ScalarField, depth: usize) -> Result<Self, KzgError> {
        Self::check_depth(depth)?;
        let powers = compute_powers(&tau, depth);
        let g1: Vec<G1Projective> = powers
            .par_iter()
            .map(|p| G1Affine::generator() * *p)
            .collect();
        let g2: Vec<G2Projective> = powers
            .par_iter()
            .map(|p| G2Affine::generator() * *p)
            .collect();
        Self::validated(
            G1Projective::normalize_batch(&g1),
            G2Projective::normalize_batch(&g2),
        )
    }

    fn validated(g1: Vec<G1Affine>, g2: Vec<G2Affine>) -> Result<Self, KzgError> {
        if g1.first() != Some(&G1Affine::generator()) || g2.first() != Some(&G2Affine::generator())
        {
            return Err(KzgError::CorruptSrs);
        }
        Ok(Srs { g1, g2 })
    }

    pub fn depth(&self) -> usize {
        self.g1.len()
    }

    /// The first `depth` G1 powers; `InvalidDepth` past the loaded table.
    pub fn g1_powers(&self, depth: usize) -> Result<&[G1Affine], KzgError> {
        Self::check_depth(depth)?;
        self.g1.get(..depth).ok_or(KzgError::InvalidDepth(depth))
    }

    /// The first `depth` G2 powers; `InvalidDepth` past the loaded table.
    pub fn g2_powers(&self, depth: usize) -> Result<&[G2Affine], KzgError> {
        Self::check_depth(depth)?;
        self.g2.get(..depth).ok_or(KzgError::InvalidDepth(depth))
    }

    pub fn g1(&self) -> &[G1Affine] {
        &self.g1
    }

    pub fn g2(&self) -> &[G2Affine] {
        &self.g2
    }

    /// Masking key `pk = sk * srs_g1[0]`.
    pub fn public_key_g1(&self, sk: &ScalarField) -> Result<G1Affine, KzgError> {
        Ok((self.g1_powers(1)?[0] * *sk).into_affine())
    }

    /// Masking key `pk = sk * srs_g2[0]`.
    pub fn public_key_g2(&self, sk: &ScalarField) -> Result<G2Affine, KzgError> {
        Ok((self.g2_powers(1)?[0] * *sk).into_affine())
    }

    /// The sk-scaled G1 prefix, the proof basis of the masked flow.
    pub fn scaled_g1(&self, sk: &ScalarField, depth: usize) -> Result<Vec<G1Affine>, KzgError> {
        Ok(scale_points(self.g1_powers(depth)?, sk))
    }

    /// The sk-scaled G2 prefix, for the mirrored orientation.
    pub fn scaled_g2(&self, sk: &ScalarField, depth: usize) -> Result<Vec<G2Affine>, KzgError> {
        Ok(scale_points(self.g2_powers(depth)?, sk))
    }

    /// One-time process-wide installation. The first call wins; later calls
    /// return the already-installed table, so concurrent initialization
    /// cannot race. Read-only afterwards, no further synchronization needed.
    pub fn install_global(self) -> &'static Srs {
        GLOBAL_SRS.get_or_init(|| self)
    }

    pub fn global() -> Option<&'static Srs> {
        GLOBAL_SRS.get()
    }
}

/// Every point multiplied by `sk`, affine-normalized.
pub fn scale_points<G: AffineRepr>(points: &[G], sk: &G::ScalarField) -> Vec<G> {
    let exponent = sk.into_bigint();
    let scaled: Vec<G::Group> = points.iter().map(|p| p.mul_bigint(exponent)).collect();
    G::Group::normalize_batch(&scaled)
}

#[cfg(test)]
mod tests {
    use ark_std::UniformRand;
    use num_bigint::BigUint;
    use rand::thread_rng;

    use super::*;
    use crate::constant_for_curves::BaseField;

    fn decimal(v: &BaseField) -> String {
        let digits: BigUint = v.into_bigint().into();
        digits.to_string()
    }

    fn external_tables(srs: &Srs) -> (String, String) {
        let g1: Vec<[String; 2]> = srs
            .g1()
            .iter()
            .map(|p| {
                let (x, y) = p.xy().unwrap();
                [decimal(&x), decimal(&y)]
            })
            .collect();
        let g2: Vec<[String; 4]> = srs
            .g2()
            .iter()
            .map(|p| {
                let (x, y) = p.xy().unwrap();
                [
                    decimal(&x.c1),
                    decimal(&x.c0),
                    decimal(&y.c1),
                    decimal(&y.c0),
                ]
            })
            .collect();
        (
            serde_json::to_string(&g1).unwrap(),
            serde_json::to_string(&g2).unwrap(),
        )
    }

    #[test]
    fn depth_bounds() {
        assert_eq!(Srs::check_depth(0), Err(KzgError::InvalidDepth(0)));
        assert_eq!(
            Srs::check_depth(MAX_DEPTH + 1),
            Err(KzgError::InvalidDepth(MAX_DEPTH + 1))
        );
        assert_eq!(Srs::check_depth(1), Ok(()));
        assert_eq!(Srs::check_depth(MAX_DEPTH), Ok(()));
    }

    #[test]
    fn setup_starts_at_the_generators() {
        let srs = Srs::insecure_setup(ScalarField::rand(&mut thread_rng()), 8).unwrap();
        assert_eq!(srs.g1()[0], G1Affine::generator());
        assert_eq!(srs.g2()[0], G2Affine::generator());
        assert_eq!(srs.depth(), 8);
    }

    #[test]
    fn json_tables_round_trip() {
        let srs = Srs::insecure_setup(ScalarField::from(12345u64), 6).unwrap();
        let (g1_json, g2_json) = external_tables(&srs);
        let reloaded = Srs::from_json_tables(&g1_json, &g2_json, 6).unwrap();
        assert_eq!(reloaded, srs);

        // a shallower load is a prefix
        let shallow = Srs::from_json_tables(&g1_json, &g2_json, 2).unwrap();
        assert_eq!(shallow.g1(), &srs.g1()[..2]);
    }

    #[test]
    fn corrupted_table_is_rejected() {
        let srs = Srs::insecure_setup(ScalarField::from(777u64), 4).unwrap();
        let (g1_json, g2_json) = external_tables(&srs);
        let corrupted = g1_json.replacen("[\"1\",", "[\"2\",", 1);
        assert_eq!(
            Srs::from_json_tables(&corrupted, &g2_json, 4),
            Err(KzgError::CorruptSrs)
        );
        assert_eq!(
            Srs::from_json_tables("not json", &g2_json, 4),
            Err(KzgError::CorruptSrs)
        );
    }

    #[test]
    fn load_deeper_than_the_table_fails() {
        let srs = Srs::insecure_setup(ScalarField::from(99u64), 4).unwrap();
        let (g1_json, g2_json) = external_tables(&srs);
        assert_eq!(
            Srs::from_json_tables(&g1_json, &g2_json, 5),
            Err(KzgError::InvalidDepth(5))
        );
        assert_eq!(srs.g1_powers(5), Err(KzgError::InvalidDepth(5)));
        assert_eq!(srs.g1_powers(0), Err(KzgError::InvalidDepth(0)));
        assert_eq!(srs.g2_powers(4).unwrap().len(), 4);
    }

    #[test]
    fn public_keys_match_direct_scalar_multiplication() {
        let mut rng = thread_rng();
        let srs = Srs::insecure_setup(ScalarField::rand(&mut rng), 4).unwrap();
        let sk = ScalarField::rand(&mut rng);
        assert_eq!(
            srs.public_key_g1(&sk).unwrap(),
            (G1Affine::generator() * sk).into_affine()
        );
        assert_eq!(
            srs.public_key_g2(&sk).unwrap(),
            (G2Affine::generator() * sk).into_affine()
        );
    }

    #[test]
    fn scaled_prefix_multiplies_every_power() {
        let mut rng = thread_rng();
        let srs = Srs::insecure_setup(ScalarField::rand(&mut rng), 4).unwrap();
        let sk = ScalarField::rand(&mut rng);
        let scaled = srs.scaled_g1(&sk, 3).unwrap();
        for (orig, scaled) in srs.g1_powers(3).unwrap().iter().zip(&scaled) {
            assert_eq!((*orig * sk).into_affine(), *scaled);
        }
    }

    #[test]
    fn global_installation_is_idempotent() {
        let first = Srs::insecure_setup(ScalarField::from(5u64), 2)
            .unwrap()
            .install_global();
        let second = Srs::insecure_setup(ScalarField::from(6u64), 2)
            .unwrap()
            .install_global();
        assert!(std::ptr::eq(first, second));
        assert!(Srs::global().is_some());
    }
}

use ark_bn254::{Bn254, Fq, Fq2, Fr};

pub type E = Bn254;

pub type ScalarField = Fr;

pub type BaseField = Fq;

pub type BaseField2 = Fq2;

pub type G1Affine = ark_bn254::G1Affine;

pub type G2Affine = ark_bn254::G2Affine;

pub type G1Projective = ark_bn254::G1Projective;

pub type G2Projective = ark_bn254::G2Projective;

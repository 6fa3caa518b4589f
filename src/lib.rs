//! KZG polynomial commitments over BN254.
//!
//! Commit to a polynomial with a single group element and prove evaluations
//! at one or more points with constant-size openings. Verification runs as an
//! EIP-197 style product-of-pairings check whose term order matches the
//! on-chain verifier contracts, including the public-key-masked variant where
//! the claimed evaluation is carried as `sk * y * G` instead of in the clear.
//!
//! The structured reference string is consumed as trusted public data (the
//! Perpetual Powers of Tau ceremony tables); this crate never generates a
//! production SRS.

pub mod constant_for_curves;
pub mod errors;
pub mod kzg;
pub mod pairing;
pub mod poly;
pub mod srs;
pub mod utils;
pub mod verify;
pub mod wire;

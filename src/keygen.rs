//! KeyGen/Setup: sample the secret key, public key, file name, and
//! generator vector for a file, per spec.md §4.3.

use crate::curve::{g1_generator, g2_generator, Fr};
use crate::error::{PorError, Result};
use crate::types::{FileName, GeneratorVector, KeyMaterial, PublicKey, SecretKey};
use ark_std::UniformRand;
use rand::{CryptoRng, RngCore};

/// Samples a fresh [`KeyMaterial`] for a file whose blocks will be
/// `s`-bytes wide.
///
/// `rng` must be a cryptographically secure source (enforced by the
/// `CryptoRng` bound) — the source's wall-clock-seeded generator is a
/// documented weakness this implementation does not carry forward (see
/// spec.md §9, "Random number source").
pub fn setup<R: RngCore + CryptoRng>(s: usize, rng: &mut R) -> Result<KeyMaterial> {
    if s == 0 {
        return Err(PorError::parameter("block size s must be at least 1"));
    }

    let alpha = Fr::rand(rng);
    let name = Fr::rand(rng);
    let pk = g2_generator() * alpha;

    let g1 = g1_generator();
    let u: Vec<_> = (0..s).map(|_| g1 * Fr::rand(rng)).collect();

    Ok(KeyMaterial {
        sk: SecretKey(alpha),
        pk: PublicKey(pk),
        name: FileName(name),
        u: GeneratorVector(u),
    })
}

//! Verifier: recompute both sides of the pairing identity and compare,
//! per spec.md §4.7.

use crate::curve::{g1_zero, g2_generator, hash_to_g1, pairing};
use crate::error::{PorError, Result};
use crate::types::{ChallengeSet, FileName, GeneratorVector, Proof, PublicKey};

/// Checks `(σ, μ)` against `(pk, name, u, Q)` for block width `s`.
///
/// Returns `Ok(true)`/`Ok(false)` for an accepted/rejected proof; an
/// `Err` is reserved for IO, decode, or parameter failures that occur
/// before the pairing check can even be attempted. A rejected proof is
/// never represented as an error (spec.md §7, "ProofRejected ... is a
/// normal boolean false return").
pub fn verify(
    pk: &PublicKey,
    name: &FileName,
    u: &GeneratorVector,
    q: &ChallengeSet,
    proof: &Proof,
    s: usize,
) -> Result<bool> {
    if u.len() != s {
        return Err(PorError::parameter(format!(
            "generator vector has length {} but s={}",
            u.len(),
            s
        )));
    }
    if proof.mu.len() != s {
        return Err(PorError::parameter(format!(
            "mu has length {} but s={}",
            proof.mu.len(),
            s
        )));
    }

    let lhs = pairing(proof.sigma, g2_generator());

    let mut r_u = g1_zero();
    for (mu_j, u_j) in proof.mu.iter().zip(u.0.iter()) {
        r_u += *u_j * crate::curve::Fr::from(*mu_j);
    }

    let mut r_h = g1_zero();
    for pair in &q.0 {
        r_h += hash_to_g1(name.0, pair.index) * crate::curve::Fr::from(pair.nu);
    }

    let rhs = pairing(r_h + r_u, pk.0);

    Ok(lhs == rhs)
}

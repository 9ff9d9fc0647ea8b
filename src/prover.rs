//! Prover: aggregate challenged tags into σ and compute the response
//! vector μ, per spec.md §4.6.

use crate::chunker::RandomAccessReader;
use crate::config::MU_MAX;
use crate::curve::g1_zero;
use crate::error::{PorError, Result};
use crate::types::{ChallengeSet, Proof, TagStream};
use std::path::Path;

/// Computes `(σ, μ)` for challenge set `Q` against `tags` and `file`.
///
/// σ is accumulated by iterating `Q` in the order it was recorded,
/// reading each `tag_{i_k}` from the tag stream by index (O(1) random
/// access via the fixed G1 stride). μ_j is a commutative sum and does
/// not depend on that order.
///
/// μ_j is accumulated in `u64` and range-checked against `MU_MAX` before
/// narrowing to the legacy 32-bit wire format — the source silently
/// truncates past 2^32; this implementation surfaces a
/// [`PorError::Parameter`] instead so the caller sees the precondition
/// violated (spec.md §4.6, §9 "μ as 32-bit unsigned").
pub fn prove(
    q: &ChallengeSet,
    tags: &TagStream,
    path: impl AsRef<Path>,
    s: usize,
) -> Result<Proof> {
    let mut reader = RandomAccessReader::open(path, s)?;

    let mut sigma = g1_zero();
    for pair in &q.0 {
        let tag = tags
            .0
            .get(pair.index as usize)
            .ok_or_else(|| PorError::parameter(format!("challenge index {} out of range", pair.index)))?;
        sigma += *tag * crate::curve::Fr::from(pair.nu);
    }

    let mut mu_acc = vec![0u64; s];
    for pair in &q.0 {
        for j in 0..s {
            let byte = reader.read_byte(pair.index, j)?;
            mu_acc[j] += pair.nu as u64 * byte as u64;
        }
    }

    let mut mu = Vec::with_capacity(s);
    for (j, value) in mu_acc.into_iter().enumerate() {
        if value > MU_MAX {
            return Err(PorError::parameter(format!(
                "mu[{}] = {} overflows the 32-bit wire format (MU_MAX = {})",
                j, value, MU_MAX
            )));
        }
        mu.push(value as u32);
    }

    Ok(Proof { sigma, mu })
}

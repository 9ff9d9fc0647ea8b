//! Challenger: produce a challenge set of (index, weight) pairs, per
//! spec.md §4.5.

use crate::codec::ChallengePair;
use crate::config::{MAX_CHALLENGES, NU_MAX};
use crate::error::{PorError, Result};
use crate::types::ChallengeSet;
use rand::{CryptoRng, Rng, RngCore};

/// Draws `c` challenge pairs `(i_k, ν_k)` with `i_k` uniform over
/// `[0, n)` and `ν_k` uniform over `[0, NU_MAX)`. Pairs may repeat; the
/// protocol remains sound under repetition (spec.md §4.5).
///
/// `rng` must be a CSPRNG (enforced by the `CryptoRng` bound): a
/// predictable challenge stream lets a dishonest server precompute
/// responses, which is the documented weakness of the source's
/// clock-seeded generator (spec.md §9).
pub fn challenge<R: RngCore + CryptoRng>(n: u64, c: usize, rng: &mut R) -> Result<ChallengeSet> {
    if n == 0 {
        return Err(PorError::parameter("block count n must be at least 1"));
    }
    if c > MAX_CHALLENGES {
        return Err(PorError::parameter(format!(
            "challenge count {} exceeds the maximum of {}",
            c, MAX_CHALLENGES
        )));
    }

    let pairs = (0..c)
        .map(|_| ChallengePair {
            index: rng.gen_range(0..n),
            nu: rng.gen_range(0..NU_MAX),
        })
        .collect();

    Ok(ChallengeSet(pairs))
}

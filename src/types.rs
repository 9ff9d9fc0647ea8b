//! The typed values every protocol operation passes between stages, per
//! the "pure functions over typed values" redesign note: KeyGen, Sign,
//! Challenge, Prove, and Verify each take and return one of these, and
//! the file layout in [`crate::store`] is a serialization concern on top
//! of them, not the source of truth.

use crate::codec::ChallengePair;
use crate::curve::{Fr, G1, G2};

/// The secret key: a single scalar α.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SecretKey(pub Fr);

/// The public key: v = α·g2.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PublicKey(pub G2);

/// The file identifier: a scalar sampled once per file, binding tags to
/// it independent of the secret key.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FileName(pub Fr);

/// The length-`s` vector of independent G1 generators u_0 .. u_{s-1}.
#[derive(Clone, PartialEq, Debug)]
pub struct GeneratorVector(pub Vec<G1>);

impl GeneratorVector {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything [`crate::keygen::setup`] produces for one file.
#[derive(Clone, Debug)]
pub struct KeyMaterial {
    pub sk: SecretKey,
    pub pk: PublicKey,
    pub name: FileName,
    pub u: GeneratorVector,
}

/// The ordered tag stream σ_0 .. σ_{n-1} produced by the Signer, one G1
/// point per block.
#[derive(Clone, PartialEq, Debug)]
pub struct TagStream(pub Vec<G1>);

impl TagStream {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The challenge set Q = { (i_k, ν_k) }, in generation order (order is
/// significant for σ aggregation, irrelevant for μ).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ChallengeSet(pub Vec<ChallengePair>);

impl ChallengeSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cardinality(&self) -> usize {
        self.0.len()
    }
}

/// The prover's response: one aggregated G1 point plus the s-dimensional
/// integer vector μ.
#[derive(Clone, PartialEq, Debug)]
pub struct Proof {
    pub sigma: G1,
    pub mu: Vec<u32>,
}

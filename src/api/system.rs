//! PorSystem: unified API entry point over the five core PoR operations.

use crate::challenger;
use crate::curve::G1;
use crate::error::Result;
use crate::keygen;
use crate::prover;
use crate::signer;
use crate::store::Store;
use crate::types::{
    ChallengeSet, FileName, GeneratorVector, KeyMaterial, Proof, PublicKey, TagStream,
};
use crate::verifier;
use rand::{CryptoRng, RngCore};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The unified API entry point over KeyGen, Sign, Challenge, Prove, and
/// Verify, bound to one working directory and one block size `s`.
pub struct PorSystem {
    store: Store,
    s: usize,
}

impl PorSystem {
    /// Creates a system bound to `working_dir` and block size `s`. Does
    /// not touch the filesystem; `working_dir` is created lazily on the
    /// first save.
    pub fn new(working_dir: impl Into<PathBuf>, s: usize) -> Self {
        PorSystem {
            store: Store::new(working_dir),
            s,
        }
    }

    /// The block size this system was constructed with.
    pub fn s(&self) -> usize {
        self.s
    }

    /// Runs KeyGen for this system's `s`.
    pub fn setup<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<KeyMaterial> {
        debug!(s = self.s, "PorSystem::setup");
        keygen::setup(self.s, rng)
    }

    /// Runs Sign against `file` using the given key material.
    pub fn sign(&self, file: impl AsRef<Path>, km: &KeyMaterial) -> Result<TagStream> {
        debug!(s = self.s, "PorSystem::sign");
        signer::sign(file, self.s, &km.sk, &km.name, &km.u)
    }

    /// Runs the Challenger for `n` blocks and `c` challenges.
    pub fn challenge<R: RngCore + CryptoRng>(
        &self,
        n: u64,
        c: usize,
        rng: &mut R,
    ) -> Result<ChallengeSet> {
        debug!(n, c, "PorSystem::challenge");
        challenger::challenge(n, c, rng)
    }

    /// Runs the Prover against `q`, `tags`, and `file`.
    pub fn prove(&self, q: &ChallengeSet, tags: &TagStream, file: impl AsRef<Path>) -> Result<Proof> {
        debug!(c = q.cardinality(), s = self.s, "PorSystem::prove");
        prover::prove(q, tags, file, self.s)
    }

    /// Runs the Verifier against `pk`, `name`, `u`, `q`, and `proof`.
    pub fn verify(
        &self,
        pk: &PublicKey,
        name: &FileName,
        u: &GeneratorVector,
        q: &ChallengeSet,
        proof: &Proof,
    ) -> Result<bool> {
        debug!(c = q.cardinality(), s = self.s, "PorSystem::verify");
        verifier::verify(pk, name, u, q, proof, self.s)
    }

    /// Persists key material to this system's working directory.
    pub fn save_key_material(&self, km: &KeyMaterial) -> Result<()> {
        self.store.save_key_material(km)
    }

    /// Persists the tag stream to this system's working directory.
    pub fn save_tags(&self, tags: &TagStream) -> Result<()> {
        self.store.save_tags(tags)
    }

    /// Persists a challenge set to this system's working directory.
    pub fn save_challenges(&self, q: &ChallengeSet) -> Result<()> {
        self.store.save_challenges(q)
    }

    /// Persists a proof to this system's working directory.
    pub fn save_proof(&self, proof: &Proof) -> Result<()> {
        self.store.save_proof(proof)
    }

    /// Loads everything Verify needs from this system's working
    /// directory: pk, name, u, the challenge set of cardinality `c`, and
    /// the proof.
    pub fn load_for_verify(
        &self,
        c: usize,
    ) -> Result<(PublicKey, FileName, GeneratorVector, ChallengeSet, Proof)> {
        let pk = self.store.load_pk()?;
        let name = self.store.load_name()?;
        let u = self.store.load_u(self.s)?;
        let q = self.store.load_challenges(c)?;
        let proof = self.store.load_proof(self.s)?;
        Ok((pk, name, u, q, proof))
    }

    /// Loads the tag stream given a known block count `n`.
    pub fn load_tags(&self, n: usize) -> Result<TagStream> {
        self.store.load_tags(n)
    }

    /// Exposes the raw aggregated tags for callers that want to inspect
    /// them without going through the whole `(σ, μ)` round trip.
    pub fn tags_as_points(tags: &TagStream) -> &[G1] {
        &tags.0
    }
}

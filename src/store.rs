//! File-layout persistence: a thin serialization layer over the typed
//! values in [`crate::types`], per the "implicit files-as-state" design
//! note — the working directory is where values get parked between CLI
//! invocations, not where the protocol's state actually lives.
//!
//! Layout (spec.md §6): `sk.bin`, `pk.bin`, `name.bin`, `u.bin`,
//! `signature.bin`, `challenge.bin`, `sigma.bin`, `mu.bin`. Each file
//! holds exactly one record type with no header, no framing, no version
//! byte.

use crate::codec::{
    decode_challenges, decode_fr, decode_g1, decode_g1_vec, decode_g2, decode_mu, encode_challenges,
    encode_fr, encode_g1, encode_g1_vec, encode_g2, encode_mu,
};
use crate::error::{PorError, Result};
use crate::types::{
    ChallengeSet, FileName, GeneratorVector, KeyMaterial, Proof, PublicKey, SecretKey, TagStream,
};
use std::path::{Path, PathBuf};

/// A working directory holding the eight record files of spec.md §6.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Store { dir: dir.into() }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Creates the working directory if it does not already exist.
    pub fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| PorError::io(&self.dir, e))
    }

    fn write_file(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(name);
        std::fs::write(&path, bytes).map_err(|e| PorError::io(path, e))
    }

    fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.path(name);
        std::fs::read(&path).map_err(|e| PorError::io(path, e))
    }

    /// Writes every record produced by KeyGen: sk.bin, pk.bin, name.bin,
    /// u.bin.
    pub fn save_key_material(&self, km: &KeyMaterial) -> Result<()> {
        self.ensure_dir()?;
        self.write_file("sk.bin", &encode_fr(&km.sk.0))?;
        self.write_file("pk.bin", &encode_g2(&km.pk.0))?;
        self.write_file("name.bin", &encode_fr(&km.name.0))?;
        self.write_file("u.bin", &encode_g1_vec(&km.u.0))?;
        Ok(())
    }

    /// Reads `sk.bin`.
    pub fn load_sk(&self) -> Result<SecretKey> {
        Ok(SecretKey(decode_fr(&self.read_file("sk.bin")?)?))
    }

    /// Reads `pk.bin`.
    pub fn load_pk(&self) -> Result<PublicKey> {
        Ok(PublicKey(decode_g2(&self.read_file("pk.bin")?)?))
    }

    /// Reads `name.bin`.
    pub fn load_name(&self) -> Result<FileName> {
        Ok(FileName(decode_fr(&self.read_file("name.bin")?)?))
    }

    /// Reads `u.bin`, the length-`s` generator vector.
    pub fn load_u(&self, s: usize) -> Result<GeneratorVector> {
        Ok(GeneratorVector(decode_g1_vec(&self.read_file("u.bin")?, s)?))
    }

    /// Writes `signature.bin`, the tag stream.
    pub fn save_tags(&self, tags: &TagStream) -> Result<()> {
        self.ensure_dir()?;
        self.write_file("signature.bin", &encode_g1_vec(&tags.0))
    }

    /// Reads `signature.bin` as `n` G1 tags.
    pub fn load_tags(&self, n: usize) -> Result<TagStream> {
        Ok(TagStream(decode_g1_vec(&self.read_file("signature.bin")?, n)?))
    }

    /// Returns the raw path to `signature.bin`, for callers that want to
    /// seek into it directly rather than decoding the whole stream (not
    /// used by the in-process pipeline, which keeps tags in memory, but
    /// kept as a public seam for out-of-process tooling).
    pub fn tag_stream_path(&self) -> PathBuf {
        self.path("signature.bin")
    }

    /// Writes `challenge.bin`.
    pub fn save_challenges(&self, q: &ChallengeSet) -> Result<()> {
        self.ensure_dir()?;
        self.write_file("challenge.bin", &encode_challenges(&q.0))
    }

    /// Reads `challenge.bin` as `c` pairs.
    pub fn load_challenges(&self, c: usize) -> Result<ChallengeSet> {
        Ok(ChallengeSet(decode_challenges(
            &self.read_file("challenge.bin")?,
            c,
        )?))
    }

    /// Writes `sigma.bin` and `mu.bin`.
    pub fn save_proof(&self, proof: &Proof) -> Result<()> {
        self.ensure_dir()?;
        self.write_file("sigma.bin", &encode_g1(&proof.sigma))?;
        self.write_file("mu.bin", &encode_mu(&proof.mu))?;
        Ok(())
    }

    /// Reads `sigma.bin` and `mu.bin` (μ of length `s`) into a [`Proof`].
    pub fn load_proof(&self, s: usize) -> Result<Proof> {
        let sigma = decode_g1(&self.read_file("sigma.bin")?)?;
        let mu = decode_mu(&self.read_file("mu.bin")?, s)?;
        Ok(Proof { sigma, mu })
    }
}

/// Returns `dir` joined with spec.md's fixed filename for the original
/// input file, used by CLI call sites that stage a copy of the source
/// file alongside the generated records (the file itself is never part
/// of the eight fixed records — it is supplied by the caller to Sign and
/// Prove directly).
pub fn original_file_path(dir: impl AsRef<Path>, file_name: &str) -> PathBuf {
    dir.as_ref().join(file_name)
}

//! Shared fixtures for the integration test suite: deterministic file
//! generation and a one-call driver through the full five-stage
//! pipeline.

use por_crypto::api::PorSystem;
use por_crypto::types::{ChallengeSet, KeyMaterial, Proof, TagStream};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Parameters for one end-to-end run: file size, block size `s`,
/// challenge count `c`, and the seed driving every CSPRNG draw.
#[derive(Debug, Clone, Copy)]
pub struct TestConfig {
    pub file_size: usize,
    pub s: usize,
    pub c: usize,
    pub seed: u64,
}

impl Default for TestConfig {
    fn default() -> Self {
        TestConfig {
            file_size: 1024,
            s: 64,
            c: 10,
            seed: por_crypto::config::TEST_RANDOM_SEED,
        }
    }
}

impl TestConfig {
    pub fn with_challenges(c: usize) -> Self {
        TestConfig {
            c,
            ..Self::default()
        }
    }

    pub fn with_block_size(s: usize) -> Self {
        TestConfig {
            s,
            ..Self::default()
        }
    }

    pub fn with_file_size(file_size: usize) -> Self {
        TestConfig {
            file_size,
            ..Self::default()
        }
    }
}

/// A `TempPath` deletes the file it names on drop, so every scenario
/// cleans up after itself even on an assertion panic.
pub struct TempPath(pub PathBuf);

impl AsRef<std::path::Path> for TempPath {
    fn as_ref(&self) -> &std::path::Path {
        &self.0
    }
}

impl Drop for TempPath {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

/// Writes `bytes` to a fresh temp file, returning a guard that removes
/// it again once the scenario is done with it.
pub fn write_temp_file(bytes: &[u8]) -> TempPath {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let mut path = std::env::temp_dir();
    path.push(format!(
        "por-itest-{}-{}.bin",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let mut file = std::fs::File::create(&path).expect("create temp file");
    use std::io::Write;
    file.write_all(bytes).expect("write temp file");
    TempPath(path)
}

/// Deterministic pseudo-random file content for a given size and seed,
/// so scenarios are reproducible without depending on a fixed byte
/// pattern that might accidentally line up with block boundaries.
pub fn create_test_data(size: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; size];
    rng.fill_bytes(&mut data);
    data
}

/// Everything a scenario needs to make further assertions: the key
/// material, the temp file (kept alive via the guard), the tag stream,
/// the challenge set, the proof, and the Verifier's boolean result.
pub struct ScenarioSetup {
    pub km: KeyMaterial,
    pub file: TempPath,
    pub tags: TagStream,
    pub challenges: ChallengeSet,
    pub proof: Proof,
    pub verified: bool,
    pub s: usize,
}

/// Runs KeyGen, Sign, Challenge, Prove, and Verify once against a fresh
/// temp file of deterministic pseudo-random content, per `cfg`.
pub fn setup_test_scenario(cfg: &TestConfig) -> por_crypto::Result<ScenarioSetup> {
    let data = create_test_data(cfg.file_size, cfg.seed);
    let file = write_temp_file(&data);

    let dir = std::env::temp_dir().join(format!("por-itest-dir-{}", std::process::id()));
    let system = PorSystem::new(&dir, cfg.s);

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let km = system.setup(&mut rng)?;
    let tags = system.sign(&file, &km)?;
    let n = tags.len() as u64;
    let challenges = system.challenge(n, cfg.c, &mut rng)?;
    let proof = system.prove(&challenges, &tags, &file)?;
    let verified = system.verify(&km.pk, &km.name, &km.u, &challenges, &proof)?;

    Ok(ScenarioSetup {
        km,
        file,
        tags,
        challenges,
        proof,
        verified,
        s: cfg.s,
    })
}

//! Centralized configuration for the PoR system.
//!
//! Mirrors the teacher crate's pattern of a single module holding every
//! protocol constant, so magic numbers never drift between call sites.

/// Exclusive upper bound on a challenge weight `ν_k`. Preserved verbatim
/// from the original protocol for bit-exact wire compatibility (Open
/// Question 3 in spec.md §9 — decided NOT to widen).
pub const NU_MAX: u32 = 500;

/// Maximum number of challenges accepted by the Challenger/Prover/Verifier
/// in one round. Not part of the original protocol; a DoS guard in the
/// same spirit as the teacher crate's `MAX_NUM_CHALLENGES`.
pub const MAX_CHALLENGES: usize = 100_000;

/// μ_j is serialized as a little-endian u32 (the legacy wire format). The
/// accumulator that produces it is computed in u64 and range-checked
/// before narrowing; see [`crate::prover::prove`].
pub const MU_MAX: u64 = u32::MAX as u64;

/// Default working directory for the file-layout store (sk.bin, pk.bin,
/// ...), matching the original protocol's hardcoded `results/` but made
/// overridable via the CLI rather than frozen as a constant.
pub const DEFAULT_WORKING_DIR: &str = "results";

/// A fixed random seed used only in tests to ensure deterministic
/// behavior across runs (never used by KeyGen or the Challenger in
/// production code paths, both of which require a CSPRNG).
pub const TEST_RANDOM_SEED: u64 = 42;

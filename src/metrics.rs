//! Timing and proof-size summaries for CLI display.
//!
//! Mirrors the teacher crate's `metrics` module — a plain struct of
//! [`Duration`]s and sizes plus a box-drawing `format_table`, filled in
//! by the CLI as it drives the five-stage pipeline, rather than a
//! tracing/metrics-crate integration the core does not need.

use crate::codec::{G1_BYTES, MU_COMPONENT_BYTES};
use crate::types::Proof;
use std::time::Duration;

/// Per-stage timings for one KeyGen -> Sign -> Challenge -> Prove ->
/// Verify run, plus the resulting proof's wire size.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineMetrics {
    pub setup_duration: Duration,
    pub sign_duration: Duration,
    pub challenge_duration: Duration,
    pub prove_duration: Duration,
    pub verify_duration: Duration,
    pub proof_size_bytes: usize,
}

impl PipelineMetrics {
    /// Total wall-clock time across all five stages.
    pub fn total_duration(&self) -> Duration {
        self.setup_duration
            + self.sign_duration
            + self.challenge_duration
            + self.prove_duration
            + self.verify_duration
    }

    /// Size in bytes of `sigma.bin` plus `mu.bin` for a proof with `s`
    /// components, per the codec's fixed-width record layout.
    pub fn proof_size_for(s: usize) -> usize {
        G1_BYTES + s * MU_COMPONENT_BYTES
    }

    /// Formats the stage timings and proof size as a CLI-friendly table,
    /// in the teacher's box-drawing style.
    pub fn format_table(&self) -> String {
        let mut out = String::new();
        out.push_str("  ┌─────────────────────────────────────┐\n");
        out.push_str("  │ Stage           │ Duration            │\n");
        out.push_str("  ├─────────────────┼─────────────────────┤\n");
        for (label, d) in [
            ("KeyGen", self.setup_duration),
            ("Sign", self.sign_duration),
            ("Challenge", self.challenge_duration),
            ("Prove", self.prove_duration),
            ("Verify", self.verify_duration),
        ] {
            out.push_str(&format!(
                "  │ {:<15} │ {:>16.3}ms │\n",
                label,
                d.as_secs_f64() * 1000.0
            ));
        }
        out.push_str("  ├─────────────────┼─────────────────────┤\n");
        out.push_str(&format!(
            "  │ {:<15} │ {:>16.3}ms │\n",
            "Total",
            self.total_duration().as_secs_f64() * 1000.0
        ));
        out.push_str("  └─────────────────┴─────────────────────┘\n");
        out.push_str(&format!(
            "  proof size: {} bytes ({:.2} KB)\n",
            self.proof_size_bytes,
            self.proof_size_bytes as f64 / 1024.0
        ));
        out
    }
}

/// Computes the on-wire size of `proof` (sigma-record + mu-record),
/// independent of the number of challenges `c` that produced it.
pub fn proof_size_bytes(proof: &Proof) -> usize {
    G1_BYTES + proof.mu.len() * MU_COMPONENT_BYTES
}

//! High-level assertion helpers shared across the integration tests.

use super::fixtures::ScenarioSetup;

/// Asserts that a full pipeline run verified successfully.
pub fn assert_prove_and_verify_succeeds(setup: ScenarioSetup) {
    assert!(
        setup.verified,
        "expected verification to succeed for s={}, c={}",
        setup.s,
        setup.challenges.cardinality()
    );
}

/// Asserts that a full pipeline run was rejected by the Verifier.
pub fn assert_verify_fails(setup: ScenarioSetup) {
    assert!(
        !setup.verified,
        "expected verification to fail for s={}, c={}",
        setup.s,
        setup.challenges.cardinality()
    );
}

/// Asserts that a [`por_crypto::Result`] is an `Err` whose rendered
/// message contains `needle`.
pub fn assert_error_contains<T: std::fmt::Debug>(result: por_crypto::Result<T>, needle: &str) {
    match result {
        Ok(v) => panic!("expected an error containing {needle:?}, got Ok({v:?})"),
        Err(e) => {
            let message = e.to_string();
            assert!(
                message.contains(needle),
                "error message {message:?} does not contain {needle:?}"
            );
        }
    }
}

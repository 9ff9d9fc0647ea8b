//! Shared test infrastructure for the integration suite.
//!
//! - `fixtures`: [`TestConfig`] and [`setup_test_scenario`] for driving
//!   the full five-stage pipeline against a temp file.
//! - `assertions`: result-shaped assertion helpers over a
//!   [`fixtures::ScenarioSetup`].

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::{setup_test_scenario, TestConfig};

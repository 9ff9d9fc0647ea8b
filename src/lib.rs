//! A publicly-verifiable compact Proof of Retrievability (PoR) library,
//! in the style of Shacham-Waters, over a pairing-friendly curve
//! (BN-254 / alt-bn128 class).
//!
//! A data owner stores a file with an untrusted server. A third party
//! who never sees the file can later challenge the server with a short
//! random request and check, from a compact response, that the server
//! still holds the file with overwhelming probability. The bilinear
//! pairing e: G1 x G2 -> GT lets per-block authenticators aggregate
//! homomorphically into one group element, so the response size is
//! independent of the number of challenges (beyond a small log factor).
//!
//! ## Main Components
//!
//! - [`api`]: the unified [`api::PorSystem`] entry point
//! - [`keygen`]: KeyGen/Setup — samples the secret key, public key, file
//!   name, and generator vector
//! - [`signer`]: Sign — computes one G1 tag per file block
//! - [`challenger`]: Challenge — draws a random (index, weight) challenge
//!   set
//! - [`prover`]: Prove — aggregates challenged tags into a compact
//!   response
//! - [`verifier`]: Verify — recomputes both sides of the pairing identity
//! - [`codec`]: bit-exact binary encoding of every artifact
//! - [`chunker`]: deterministic file-to-blocks partition
//! - [`store`]: the working-directory file layout (sk.bin, pk.bin, ...)
//! - [`curve`]: the algebraic capability set the rest of the crate
//!   consumes
//! - [`config`]: centralized protocol constants
//! - [`metrics`]: per-stage timing and proof-size summaries for CLI
//!   display
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`error::Result`]. A rejected proof
//! is not an error: [`verifier::verify`] returns `Ok(false)`, reserving
//! `Err` for IO, decode, and parameter failures (see [`error::PorError`]).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use por_crypto::api::PorSystem;
//! use rand::rngs::OsRng;
//! use std::io::Write;
//!
//! let mut rng = OsRng;
//! let mut file = std::fs::File::create("/tmp/por-quickstart.dat").unwrap();
//! file.write_all(&(0u8..=255).cycle().take(4096).collect::<Vec<_>>()).unwrap();
//! drop(file);
//!
//! let system = PorSystem::new("/tmp/por-quickstart-results", 64);
//! let km = system.setup(&mut rng).unwrap();
//! let tags = system.sign("/tmp/por-quickstart.dat", &km).unwrap();
//!
//! let n = tags.len() as u64;
//! let q = system.challenge(n, 20, &mut rng).unwrap();
//! let proof = system.prove(&q, &tags, "/tmp/por-quickstart.dat").unwrap();
//!
//! let ok = system.verify(&km.pk, &km.name, &km.u, &q, &proof).unwrap();
//! assert!(ok);
//! ```

pub mod api;
pub mod challenger;
pub mod chunker;
pub mod codec;
pub mod config;
pub mod curve;
pub mod error;
pub mod keygen;
pub mod metrics;
pub mod prover;
pub mod signer;
pub mod store;
pub mod types;
pub mod verifier;

pub use api::PorSystem;
pub use error::{PorError, Result};
pub use types::{
    ChallengeSet, FileName, GeneratorVector, KeyMaterial, Proof, PublicKey, SecretKey, TagStream,
};

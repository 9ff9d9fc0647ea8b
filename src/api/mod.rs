//! A high-level, unified API over the five core PoR operations.
//!
//! [`PorSystem`] wraps a working directory and block size `s`, so a
//! caller does not have to thread the file-layout [`crate::store::Store`]
//! through every call by hand. The underlying operations
//! (`keygen::setup`, `signer::sign`, `challenger::challenge`,
//! `prover::prove`, `verifier::verify`) remain plain functions over typed
//! values — this module only adds the working-directory bookkeeping
//! around them.
//!
//! ## Example
//!
//! ```rust,no_run
//! use por_crypto::api::PorSystem;
//! use rand::rngs::OsRng;
//!
//! let mut rng = OsRng;
//! let system = PorSystem::new("results", 64);
//! let km = system.setup(&mut rng).unwrap();
//! system.save_key_material(&km).unwrap();
//!
//! let tags = system.sign("data.bin", &km).unwrap();
//! system.save_tags(&tags).unwrap();
//!
//! let n = tags.len() as u64;
//! let q = system.challenge(n, 10, &mut rng).unwrap();
//! let proof = system.prove(&q, &tags, "data.bin").unwrap();
//! let ok = system.verify(&km.pk, &km.name, &km.u, &q, &proof).unwrap();
//! assert!(ok);
//! ```

mod system;

pub use system::PorSystem;
